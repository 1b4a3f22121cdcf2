//! RelationshipAnalyzer: talent pools, role breakdowns, exclusivity,
//! overlap, and diversity per network and studio.

use std::collections::BTreeSet;

use tracing::debug;

use greenlight_core::config::AnalysisConfig;
use greenlight_core::types::{CreditRole, Creator, Show};

use crate::credits::CreditIndex;

use super::diversity;
use super::significance;
use super::types::{
    NetworkProfile, OverlapPair, RoleBreakdown, RoleSignal, SharedCreator, StudioProfile,
};

/// Network/studio talent-pool statistics.
///
/// Ratio metrics are only computed for outlets at or above the show-count
/// floor; everything below it is excluded from profiles, overlap, and
/// diversity alike so small samples never distort a ranking.
pub struct RelationshipAnalyzer {
    min_shows: usize,
    major_share: f64,
    z_threshold: f64,
}

impl RelationshipAnalyzer {
    /// Create an analyzer with explicit thresholds.
    pub fn new(min_shows: usize, major_share: f64, z_threshold: f64) -> Self {
        Self {
            min_shows,
            major_share,
            z_threshold,
        }
    }

    /// Create an analyzer from the analysis config.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            config.effective_min_network_shows(),
            config.effective_major_share(),
            config.effective_z_threshold(),
        )
    }

    /// Profiles for every network at or above the show floor, name order.
    pub fn network_profiles(&self, index: &CreditIndex) -> Vec<NetworkProfile> {
        let creators = index.creators();
        let mut profiles = Vec::new();

        for network in index.networks() {
            let Some(show_ids) = index.shows_on_network(network) else {
                continue;
            };
            let total = show_ids.len();
            if total < self.min_shows {
                continue;
            }

            let pool: Vec<&Creator> = creators
                .iter()
                .copied()
                .filter(|c| c.networks.contains(network))
                .collect();
            let shows: Vec<&Show> =
                show_ids.iter().filter_map(|id| index.show(*id)).collect();

            let mut exclusive_talent = Vec::new();
            let mut shared_talent = Vec::new();
            for creator in &pool {
                if creator.networks.len() == 1 {
                    exclusive_talent.push(creator.name.clone());
                } else {
                    shared_talent.push(SharedCreator {
                        name: creator.name.clone(),
                        roles: creator.roles.iter().cloned().collect(),
                        affiliations: creator.networks.iter().cloned().collect(),
                    });
                }
            }

            profiles.push(NetworkProfile {
                name: network.to_string(),
                total_shows: total,
                talent_size: pool.len(),
                role_breakdown: role_breakdown(&pool),
                exclusive_talent,
                shared_talent,
                major_genres: diversity::major_shares(&shows, total, self.major_share, |s| {
                    Some(s.genre.as_str())
                }),
                major_subgenres: diversity::major_shares(&shows, total, self.major_share, |s| {
                    s.subgenre.as_deref()
                }),
            });
        }

        debug!(profiles = profiles.len(), "network profiles computed");
        profiles
    }

    /// Profiles for every studio at or above the show floor, name order.
    pub fn studio_profiles(&self, index: &CreditIndex) -> Vec<StudioProfile> {
        let creators = index.creators();
        let mut profiles = Vec::new();

        for studio in index.studios() {
            let Some(show_ids) = index.shows_at_studio(studio) else {
                continue;
            };
            let total = show_ids.len();
            if total < self.min_shows {
                continue;
            }

            let pool: Vec<&Creator> = creators
                .iter()
                .copied()
                .filter(|c| {
                    index
                        .creator_studios(&c.name)
                        .is_some_and(|studios| studios.contains(studio))
                })
                .collect();
            let shows: Vec<&Show> =
                show_ids.iter().filter_map(|id| index.show(*id)).collect();

            let mut exclusive_talent = Vec::new();
            let mut shared_talent = Vec::new();
            for creator in &pool {
                let everywhere = creator.shows.iter().all(|id| {
                    index
                        .show(*id)
                        .is_some_and(|show| show.studios.contains(studio))
                });
                if everywhere {
                    exclusive_talent.push(creator.name.clone());
                } else {
                    let affiliations = index
                        .creator_studios(&creator.name)
                        .map(|studios| studios.iter().cloned().collect())
                        .unwrap_or_default();
                    shared_talent.push(SharedCreator {
                        name: creator.name.clone(),
                        roles: creator.roles.iter().cloned().collect(),
                        affiliations,
                    });
                }
            }

            profiles.push(StudioProfile {
                name: studio.to_string(),
                total_shows: total,
                talent_size: pool.len(),
                role_breakdown: role_breakdown(&pool),
                exclusive_talent,
                shared_talent,
                major_genres: diversity::major_shares(&shows, total, self.major_share, |s| {
                    Some(s.genre.as_str())
                }),
                major_subgenres: diversity::major_shares(&shows, total, self.major_share, |s| {
                    s.subgenre.as_deref()
                }),
            });
        }

        debug!(profiles = profiles.len(), "studio profiles computed");
        profiles
    }

    /// Shared talent between every pair of qualifying networks, ranked by
    /// shared-creator count descending, ties by name pair.
    pub fn network_overlaps(&self, index: &CreditIndex) -> Vec<OverlapPair> {
        let creators = index.creators();
        let pools: Vec<(String, Vec<&Creator>)> = index
            .networks()
            .into_iter()
            .filter(|network| {
                index
                    .shows_on_network(network)
                    .is_some_and(|shows| shows.len() >= self.min_shows)
            })
            .map(|network| {
                let pool: Vec<&Creator> = creators
                    .iter()
                    .copied()
                    .filter(|c| c.networks.contains(network))
                    .collect();
                (network.to_string(), pool)
            })
            .collect();

        overlaps_from(&pools, |creator| {
            creator.networks.iter().cloned().collect()
        })
    }

    /// Shared talent between every pair of qualifying studios.
    pub fn studio_overlaps(&self, index: &CreditIndex) -> Vec<OverlapPair> {
        let creators = index.creators();
        let pools: Vec<(String, Vec<&Creator>)> = index
            .studios()
            .into_iter()
            .filter(|studio| {
                index
                    .shows_at_studio(studio)
                    .is_some_and(|shows| shows.len() >= self.min_shows)
            })
            .map(|studio| {
                let pool: Vec<&Creator> = creators
                    .iter()
                    .copied()
                    .filter(|c| {
                        index
                            .creator_studios(&c.name)
                            .is_some_and(|studios| studios.contains(studio))
                    })
                    .collect();
                (studio.to_string(), pool)
            })
            .collect();

        overlaps_from(&pools, |creator| {
            index
                .creator_studios(&creator.name)
                .map(|studios| studios.iter().cloned().collect())
                .unwrap_or_default()
        })
    }

    /// Cross-network role outliers over already-computed profiles.
    pub fn role_signals(&self, profiles: &[NetworkProfile]) -> Vec<RoleSignal> {
        significance::role_signals(profiles, self.z_threshold)
    }
}

/// Vocabulary-role counts over a pool. Roles nobody holds are omitted.
fn role_breakdown(pool: &[&Creator]) -> Vec<RoleBreakdown> {
    if pool.is_empty() {
        return Vec::new();
    }
    let talent = pool.len() as f64;
    let mut breakdown = Vec::new();
    for role in CreditRole::ALL {
        let count = pool
            .iter()
            .filter(|c| c.roles.contains(role.display_name()))
            .count();
        if count > 0 {
            breakdown.push(RoleBreakdown {
                role,
                count,
                percentage: count as f64 / talent * 100.0,
            });
        }
    }
    breakdown
}

/// Pairwise shared talent over name-ordered pools.
fn overlaps_from<F>(pools: &[(String, Vec<&Creator>)], affiliations_of: F) -> Vec<OverlapPair>
where
    F: Fn(&Creator) -> Vec<String>,
{
    let name_sets: Vec<BTreeSet<&str>> = pools
        .iter()
        .map(|(_, pool)| pool.iter().map(|c| c.name.as_str()).collect())
        .collect();

    let mut pairs = Vec::new();
    for i in 0..pools.len() {
        for j in (i + 1)..pools.len() {
            // Pool members are name-sorted, so shared inherits that order.
            let shared: Vec<SharedCreator> = pools[i]
                .1
                .iter()
                .filter(|c| name_sets[j].contains(c.name.as_str()))
                .map(|c| SharedCreator {
                    name: c.name.clone(),
                    roles: c.roles.iter().cloned().collect(),
                    affiliations: affiliations_of(c),
                })
                .collect();
            if shared.is_empty() {
                continue;
            }
            pairs.push(OverlapPair {
                name_a: pools[i].0.clone(),
                name_b: pools[j].0.clone(),
                shared,
            });
        }
    }

    pairs.sort_by(|a, b| {
        b.shared
            .len()
            .cmp(&a.shared.len())
            .then_with(|| {
                (a.name_a.as_str(), a.name_b.as_str()).cmp(&(b.name_a.as_str(), b.name_b.as_str()))
            })
    });
    pairs
}
