//! Partnership detection output types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use greenlight_core::types::Team;

/// Result of one partnership detection pass.
///
/// Teams are disjoint: a creator appears in at most one, and never also in
/// `solo`. Both lists carry a total order so identical inputs serialize
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnershipResult {
    /// Detected teams, sorted by display label.
    pub teams: Vec<Team>,
    /// Qualifying creators left unpaired, sorted by name.
    pub solo: Vec<String>,
    /// Partner lookup: member name to partner name, both directions.
    pub partnerships: BTreeMap<String, String>,
}

impl PartnershipResult {
    /// The partner bonded to `name`, if any.
    pub fn partner_of(&self, name: &str) -> Option<&str> {
        self.partnerships.get(name).map(String::as_str)
    }

    /// Whether `name` belongs to a detected team.
    pub fn is_teamed(&self, name: &str) -> bool {
        self.partnerships.contains_key(name)
    }

    /// Number of detected teams.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }
}
