//! Show identity and attributes.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a show in the backing store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ShowId(pub u64);

impl ShowId {
    /// Create a show id from its raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw u64 value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "show#{}", self.0)
    }
}

impl From<u64> for ShowId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Attributes of a single show, supplied by the backing store.
///
/// `success_score` is computed externally (0 to 100); `None` means the show
/// has not been scored yet and it is excluded from every success mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: ShowId,
    pub title: String,
    pub network: String,
    /// Studios credited on the show. A show credits every studio in the set.
    pub studios: BTreeSet<String>,
    pub genre: String,
    pub subgenre: Option<String>,
    pub episode_count: u32,
    pub success_score: Option<f64>,
}

impl Show {
    /// Create a show with the required attributes; optional fields unset.
    pub fn new(
        id: ShowId,
        title: impl Into<String>,
        network: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            network: network.into(),
            studios: BTreeSet::new(),
            genre: genre.into(),
            subgenre: None,
            episode_count: 0,
            success_score: None,
        }
    }

    /// Add a credited studio.
    pub fn with_studio(mut self, studio: impl Into<String>) -> Self {
        self.studios.insert(studio.into());
        self
    }

    /// Set the subgenre.
    pub fn with_subgenre(mut self, subgenre: impl Into<String>) -> Self {
        self.subgenre = Some(subgenre.into());
        self
    }

    /// Set the episode count.
    pub fn with_episodes(mut self, episode_count: u32) -> Self {
        self.episode_count = episode_count;
        self
    }

    /// Set the externally computed success score.
    pub fn with_success_score(mut self, score: f64) -> Self {
        self.success_score = Some(score);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_id_orders_by_raw_value() {
        let mut ids = vec![ShowId::new(5), ShowId::new(1), ShowId::new(3)];
        ids.sort();
        assert_eq!(ids, vec![ShowId::new(1), ShowId::new(3), ShowId::new(5)]);
    }

    #[test]
    fn test_show_builder_sets_optional_fields() {
        let show = Show::new(ShowId::new(7), "Night Shift", "Meridian", "Drama")
            .with_studio("Lantern Pictures")
            .with_subgenre("Medical")
            .with_episodes(10)
            .with_success_score(74.5);
        assert_eq!(show.studios.len(), 1);
        assert_eq!(show.subgenre.as_deref(), Some("Medical"));
        assert_eq!(show.episode_count, 10);
        assert_eq!(show.success_score, Some(74.5));
    }
}
