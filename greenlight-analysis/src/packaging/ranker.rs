//! Package clustering and ranking over a scoped show set.
//!
//! This is a second, independent clustering pass over the full creator
//! set, not a reuse of detected partnerships. The caller scopes it with a
//! show filter (a genre, a source type) and supplies the success scorer;
//! the ranker unions each team's catalog, breaks it down per network, and
//! ranks by network breadth before volume before score.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use petgraph::unionfind::UnionFind;
use statrs::statistics::Statistics;
use tracing::debug;

use greenlight_core::config::AnalysisConfig;
use greenlight_core::traits::SuccessScorer;
use greenlight_core::types::{Show, ShowId};

use crate::credits::CreditIndex;
use crate::partnerships::detector::overlap_ratios;

use super::types::{ClusterStrategy, NetworkBreakdown, RankedShow, Suggestion};

type Candidate<'a> = (&'a str, BTreeSet<ShowId>);

/// Clusters scoped catalogs into teams and ranks the multi-network ones.
pub struct PackageRanker {
    min_shows: usize,
    overlap_threshold: f64,
    min_networks: usize,
    strategy: ClusterStrategy,
}

impl PackageRanker {
    /// Create a ranker with explicit thresholds and the default strategy.
    pub fn new(min_shows: usize, overlap_threshold: f64, min_networks: usize) -> Self {
        Self {
            min_shows,
            overlap_threshold,
            min_networks,
            strategy: ClusterStrategy::default(),
        }
    }

    /// Create a ranker from the analysis config.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            config.effective_package_min_shows(),
            config.effective_overlap_threshold(),
            config.effective_package_min_networks(),
        )
    }

    /// Switch the clustering strategy.
    pub fn with_strategy(mut self, strategy: ClusterStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Ranked suggestions over every show.
    pub fn suggest_all(
        &self,
        index: &CreditIndex,
        scorer: &dyn SuccessScorer,
    ) -> Vec<Suggestion> {
        self.suggest(index, scorer, |_| true)
    }

    /// Ranked suggestions over the shows accepted by `filter`.
    pub fn suggest<F>(
        &self,
        index: &CreditIndex,
        scorer: &dyn SuccessScorer,
        filter: F,
    ) -> Vec<Suggestion>
    where
        F: Fn(&Show) -> bool,
    {
        let mut in_scope: BTreeSet<ShowId> = BTreeSet::new();
        for show in index.shows().values() {
            if filter(show) {
                in_scope.insert(show.id);
            }
        }

        // Name order pins the greedy scan.
        let candidates: Vec<Candidate<'_>> = index
            .creators()
            .into_iter()
            .filter_map(|creator| {
                let scoped: BTreeSet<ShowId> = creator
                    .shows
                    .intersection(&in_scope)
                    .copied()
                    .collect();
                (scoped.len() >= self.min_shows).then(|| (creator.name.as_str(), scoped))
            })
            .collect();

        let teams = match self.strategy {
            ClusterStrategy::Star => star_teams(&candidates, self.overlap_threshold),
            ClusterStrategy::Transitive => transitive_teams(&candidates, self.overlap_threshold),
        };

        let mut suggestions: Vec<Suggestion> = teams
            .iter()
            .filter_map(|members| self.build_suggestion(index, scorer, &candidates, members))
            .collect();

        suggestions.sort_by(|a, b| {
            b.network_count
                .cmp(&a.network_count)
                .then_with(|| b.total_shows.cmp(&a.total_shows))
                .then_with(|| desc_f64(a.overall_success, b.overall_success))
                .then_with(|| a.label.cmp(&b.label))
        });

        debug!(
            strategy = ?self.strategy,
            in_scope = in_scope.len(),
            candidates = candidates.len(),
            teams = teams.len(),
            suggestions = suggestions.len(),
            "package ranking complete"
        );
        suggestions
    }

    fn build_suggestion(
        &self,
        index: &CreditIndex,
        scorer: &dyn SuccessScorer,
        candidates: &[Candidate<'_>],
        members: &[usize],
    ) -> Option<Suggestion> {
        let names: Vec<String> = members
            .iter()
            .map(|&i| candidates[i].0.to_string())
            .collect();

        let mut shows: BTreeSet<ShowId> = BTreeSet::new();
        for &i in members {
            shows.extend(candidates[i].1.iter().copied());
        }

        let mut by_network: BTreeMap<String, Vec<RankedShow>> = BTreeMap::new();
        let mut all_scores = Vec::new();
        for id in &shows {
            let Some(show) = index.show(*id) else { continue };
            let success_score = scorer.score(show);
            if let Some(score) = success_score {
                all_scores.push(score);
            }
            by_network
                .entry(show.network.clone())
                .or_default()
                .push(RankedShow {
                    id: *id,
                    title: show.title.clone(),
                    success_score,
                });
        }
        if by_network.len() < self.min_networks {
            return None;
        }

        let mut networks: Vec<NetworkBreakdown> = by_network
            .into_iter()
            .map(|(network, mut ranked)| {
                ranked.sort_by(|a, b| {
                    desc_opt(a.success_score, b.success_score)
                        .then_with(|| a.title.cmp(&b.title))
                        .then_with(|| a.id.cmp(&b.id))
                });
                let scored: Vec<f64> =
                    ranked.iter().filter_map(|s| s.success_score).collect();
                NetworkBreakdown {
                    network,
                    show_count: ranked.len(),
                    success_score: mean_of(&scored),
                    shows: ranked,
                }
            })
            .collect();
        networks.sort_by(|a, b| {
            b.show_count
                .cmp(&a.show_count)
                .then_with(|| desc_opt(a.success_score, b.success_score))
                .then_with(|| a.network.cmp(&b.network))
        });

        Some(Suggestion {
            label: names.join(" & "),
            members: names,
            network_count: networks.len(),
            total_shows: shows.len(),
            networks,
            overall_success: mean_of(&all_scores).unwrap_or(0.0),
        })
    }
}

/// Seed-centric clusters: members qualify against the seed only, first
/// qualifying match claims them.
fn star_teams(candidates: &[Candidate<'_>], threshold: f64) -> Vec<Vec<usize>> {
    let mut processed = vec![false; candidates.len()];
    let mut teams = Vec::new();

    for seed in 0..candidates.len() {
        if processed[seed] {
            continue;
        }
        processed[seed] = true;
        let mut members = vec![seed];
        for other in (seed + 1)..candidates.len() {
            if processed[other] {
                continue;
            }
            let (a, b) = overlap_ratios(&candidates[seed].1, &candidates[other].1);
            if a >= threshold && b >= threshold {
                processed[other] = true;
                members.push(other);
            }
        }
        teams.push(members);
    }
    teams
}

/// Union-find closure over every qualifying pair.
fn transitive_teams(candidates: &[Candidate<'_>], threshold: f64) -> Vec<Vec<usize>> {
    let mut dsu: UnionFind<usize> = UnionFind::new(candidates.len());
    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            let (a, b) = overlap_ratios(&candidates[i].1, &candidates[j].1);
            if a >= threshold && b >= threshold {
                dsu.union(i, j);
            }
        }
    }

    let mut components: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for i in 0..candidates.len() {
        components.entry(dsu.find(i)).or_default().push(i);
    }
    components.into_values().collect()
}

fn mean_of(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        None
    } else {
        Some(Statistics::mean(scores))
    }
}

fn desc_f64(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Descending with unscored entries last.
fn desc_opt(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
