//! Raw credit rows as delivered by the backing store.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::show::ShowId;

/// One credit record: a creator credited on a show under one or more roles.
///
/// Rows are the source of truth and immutable once loaded. The same
/// (creator, show) pair may arrive in several rows that differ only in
/// role strings; the index unions them and counts the pair once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditRow {
    /// Case-sensitive creator identity. Spelling variants are distinct
    /// creators; no fuzzy resolution is attempted.
    pub creator_name: String,
    pub show_id: ShowId,
    /// Raw role strings, including any outside the fixed vocabulary.
    pub roles: BTreeSet<String>,
    pub network: String,
    pub studios: BTreeSet<String>,
}

impl CreditRow {
    /// Create a credit row with a single role.
    pub fn new(
        creator_name: impl Into<String>,
        show_id: ShowId,
        role: impl Into<String>,
        network: impl Into<String>,
    ) -> Self {
        let mut roles = BTreeSet::new();
        roles.insert(role.into());
        Self {
            creator_name: creator_name.into(),
            show_id,
            roles,
            network: network.into(),
            studios: BTreeSet::new(),
        }
    }

    /// Add a role string.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    /// Add a credited studio.
    pub fn with_studio(mut self, studio: impl Into<String>) -> Self {
        self.studios.insert(studio.into());
        self
    }
}
