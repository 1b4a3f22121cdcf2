//! Output types for package ranking.

use serde::{Deserialize, Serialize};

use greenlight_core::types::ShowId;

/// How candidate creators are grouped into package teams.
///
/// `Star` reproduces the deliberately cheap historical behavior: members
/// qualify against the seed only, so two non-seed members may barely
/// overlap each other. `Transitive` closes that chain with union-find and
/// produces different (usually larger) teams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterStrategy {
    #[default]
    Star,
    Transitive,
}

/// One show inside a network breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedShow {
    pub id: ShowId,
    pub title: String,
    /// External 0-100 rating. Absent when the scorer has no opinion.
    pub success_score: Option<f64>,
}

/// A suggestion's footprint on a single network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkBreakdown {
    pub network: String,
    pub show_count: usize,
    /// Mean success over the network's scored shows. `None` when no show
    /// on this network carries a score.
    pub success_score: Option<f64>,
    /// Shows ordered by success score descending, unscored last.
    pub shows: Vec<RankedShow>,
}

/// A ranked package suggestion: one team (or individual) with a
/// multi-network catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Member names joined with " & ", or a single creator name.
    pub label: String,
    /// Member names, lexicographic order.
    pub members: Vec<String>,
    /// Per-network footprint, ordered by (show_count, success) descending.
    pub networks: Vec<NetworkBreakdown>,
    /// Distinct in-scope shows across all members.
    pub total_shows: usize,
    pub network_count: usize,
    /// Mean success over all scored shows. 0.0 when nothing is scored.
    pub overall_success: f64,
}
