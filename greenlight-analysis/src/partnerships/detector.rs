//! PartnershipDetector: greedy two-person team detection by show overlap.
//!
//! Candidates are scanned in lexicographic name order and the first
//! qualifying partner wins. The scan order is part of the contract: it is
//! what makes repeated runs over the same snapshot reproducible.

use std::collections::BTreeSet;

use tracing::debug;

use greenlight_core::config::AnalysisConfig;
use greenlight_core::types::collections::FxHashSet;
use greenlight_core::types::{Creator, ShowId, Team};

use crate::credits::CreditIndex;

use super::types::PartnershipResult;

/// Both-direction show overlap for an unordered creator pair.
///
/// `ratios.0` is the shared count over `a`'s catalog, `ratios.1` over `b`'s.
/// Empty catalogs yield 0.0 rather than dividing by zero.
pub fn overlap_ratios(a: &BTreeSet<ShowId>, b: &BTreeSet<ShowId>) -> (f64, f64) {
    if a.is_empty() || b.is_empty() {
        return (0.0, 0.0);
    }
    let shared = a.intersection(b).count() as f64;
    (shared / a.len() as f64, shared / b.len() as f64)
}

/// Greedy partnership detector.
pub struct PartnershipDetector {
    min_shows: usize,
    overlap_threshold: f64,
}

impl PartnershipDetector {
    /// Create a detector with explicit thresholds.
    pub fn new(min_shows: usize, overlap_threshold: f64) -> Self {
        Self {
            min_shows,
            overlap_threshold,
        }
    }

    /// Create a detector from the analysis config.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            config.effective_min_shows(),
            config.effective_overlap_threshold(),
        )
    }

    /// Detect disjoint two-person teams over the index.
    ///
    /// A pair bonds iff both overlap ratios meet the threshold. Once bonded,
    /// neither member is considered again; a candidate qualifying against
    /// several partners keeps the first in scan order and the alternates are
    /// only logged. Empty input yields an empty result.
    pub fn detect(&self, index: &CreditIndex) -> PartnershipResult {
        let candidates: Vec<&Creator> = index
            .creators()
            .into_iter()
            .filter(|c| c.show_count() >= self.min_shows)
            .collect();

        let mut processed: FxHashSet<&str> = FxHashSet::default();
        let mut result = PartnershipResult::default();

        for (i, candidate) in candidates.iter().enumerate() {
            if processed.contains(candidate.name.as_str()) {
                continue;
            }

            let mut bonded: Option<&Creator> = None;
            for partner in candidates.iter().skip(i + 1) {
                if processed.contains(partner.name.as_str()) {
                    continue;
                }
                if !self.qualifies(candidate, partner) {
                    continue;
                }
                match bonded {
                    None => bonded = Some(partner),
                    Some(first) => {
                        // First match already won; record the asymmetry.
                        debug!(
                            creator = %candidate.name,
                            partner = %first.name,
                            alternate = %partner.name,
                            "alternate qualifying partner skipped"
                        );
                    }
                }
            }

            if let Some(partner) = bonded {
                processed.insert(candidate.name.as_str());
                processed.insert(partner.name.as_str());

                let mut team = Team::new(candidate.name.clone(), partner.name.clone());
                team.shows = candidate.shows.union(&partner.shows).copied().collect();
                team.networks = candidate
                    .networks
                    .union(&partner.networks)
                    .cloned()
                    .collect();

                debug!(
                    team = %team.label(),
                    shows = team.shows.len(),
                    networks = team.networks.len(),
                    "partnership bonded"
                );

                result
                    .partnerships
                    .insert(candidate.name.clone(), partner.name.clone());
                result
                    .partnerships
                    .insert(partner.name.clone(), candidate.name.clone());
                result.teams.push(team);
            }
        }

        for candidate in &candidates {
            if !processed.contains(candidate.name.as_str()) {
                result.solo.push(candidate.name.clone());
            }
        }

        // Candidates were scanned name-sorted, so solo is already ordered;
        // team labels still need their own sort.
        result.teams.sort_by(|a, b| a.label().cmp(&b.label()));

        debug!(
            teams = result.teams.len(),
            solo = result.solo.len(),
            candidates = candidates.len(),
            "partnership detection complete"
        );

        result
    }

    fn qualifies(&self, a: &Creator, b: &Creator) -> bool {
        let (ratio_a, ratio_b) = overlap_ratios(&a.shows, &b.shows);
        ratio_a >= self.overlap_threshold && ratio_b >= self.overlap_threshold
    }
}
