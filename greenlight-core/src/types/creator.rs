//! Derived creator records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::show::ShowId;

/// A creator as derived from the credit rows.
///
/// Identity is the case-sensitive name. Shows, roles, and networks are
/// unions across every row the creator appears in; ordered sets keep the
/// derived views deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    pub shows: BTreeSet<ShowId>,
    /// Raw role strings across all shows, vocabulary and otherwise.
    pub roles: BTreeSet<String>,
    pub networks: BTreeSet<String>,
}

impl Creator {
    /// Create an empty creator record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shows: BTreeSet::new(),
            roles: BTreeSet::new(),
            networks: BTreeSet::new(),
        }
    }

    /// Number of distinct shows the creator is credited on.
    pub fn show_count(&self) -> usize {
        self.shows.len()
    }

    /// Number of distinct networks the creator has worked across.
    pub fn network_count(&self) -> usize {
        self.networks.len()
    }
}
