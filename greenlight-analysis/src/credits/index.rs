//! CreditIndex: normalizes raw credit rows into per-creator and
//! per-network/per-studio views.
//!
//! The index is a pure function of its input and immutable once built.
//! The show attribute table is the authority for network, studio, and genre;
//! rows contribute only the creator-to-show edges and their role strings.

use std::collections::BTreeSet;

use tracing::debug;

use greenlight_core::errors::{IndexError, IndexResult};
use greenlight_core::types::collections::FxHashMap;
use greenlight_core::types::{CreditRow, Creator, Show, ShowId};

/// Immutable index over one snapshot of credit rows and show attributes.
#[derive(Debug, Clone)]
pub struct CreditIndex {
    creators: FxHashMap<String, Creator>,
    shows: FxHashMap<ShowId, Show>,
    shows_by_network: FxHashMap<String, BTreeSet<ShowId>>,
    shows_by_studio: FxHashMap<String, BTreeSet<ShowId>>,
    studios_by_creator: FxHashMap<String, BTreeSet<String>>,
}

impl CreditIndex {
    /// Build the index, failing fast on absent attributes.
    ///
    /// Rows that differ only in role strings collapse onto one
    /// (creator, show) edge with the roles unioned, so multi-role credits
    /// never inflate show counts.
    pub fn build(
        rows: &[CreditRow],
        shows: &FxHashMap<ShowId, Show>,
    ) -> IndexResult<Self> {
        for show in shows.values() {
            Self::validate_show(show)?;
        }

        let mut creators: FxHashMap<String, Creator> = FxHashMap::default();
        let mut studios_by_creator: FxHashMap<String, BTreeSet<String>> =
            FxHashMap::default();

        for row in rows {
            Self::validate_row(row)?;
            let show = shows.get(&row.show_id).ok_or_else(|| IndexError::UnknownShow {
                show_id: row.show_id,
                creator: row.creator_name.clone(),
            })?;

            let creator = creators
                .entry(row.creator_name.clone())
                .or_insert_with(|| Creator::new(row.creator_name.clone()));
            creator.shows.insert(row.show_id);
            creator.roles.extend(row.roles.iter().cloned());
            creator.networks.insert(show.network.clone());

            studios_by_creator
                .entry(row.creator_name.clone())
                .or_default()
                .extend(show.studios.iter().cloned());
        }

        let mut shows_by_network: FxHashMap<String, BTreeSet<ShowId>> =
            FxHashMap::default();
        let mut shows_by_studio: FxHashMap<String, BTreeSet<ShowId>> =
            FxHashMap::default();
        for show in shows.values() {
            shows_by_network
                .entry(show.network.clone())
                .or_default()
                .insert(show.id);
            for studio in &show.studios {
                shows_by_studio
                    .entry(studio.clone())
                    .or_default()
                    .insert(show.id);
            }
        }

        debug!(
            creators = creators.len(),
            shows = shows.len(),
            networks = shows_by_network.len(),
            studios = shows_by_studio.len(),
            "credit index built"
        );

        Ok(Self {
            creators,
            shows: shows.clone(),
            shows_by_network,
            shows_by_studio,
            studios_by_creator,
        })
    }

    fn validate_show(show: &Show) -> IndexResult<()> {
        if show.title.is_empty() {
            return Err(IndexError::missing_column("title", format!("{}", show.id)));
        }
        if show.network.is_empty() {
            return Err(IndexError::missing_column(
                "network",
                format!("{} ({})", show.id, show.title),
            ));
        }
        if show.genre.is_empty() {
            return Err(IndexError::missing_column(
                "genre",
                format!("{} ({})", show.id, show.title),
            ));
        }
        Ok(())
    }

    fn validate_row(row: &CreditRow) -> IndexResult<()> {
        if row.creator_name.is_empty() {
            return Err(IndexError::missing_column(
                "creator_name",
                format!("credit row for {}", row.show_id),
            ));
        }
        if row.network.is_empty() {
            return Err(IndexError::missing_column(
                "network",
                format!("credit row for `{}` on {}", row.creator_name, row.show_id),
            ));
        }
        Ok(())
    }

    /// All creators, sorted by name. The pinned scan order for every
    /// downstream pass.
    pub fn creators(&self) -> Vec<&Creator> {
        let mut creators: Vec<&Creator> = self.creators.values().collect();
        creators.sort_by(|a, b| a.name.cmp(&b.name));
        creators
    }

    /// Look up a creator by exact name.
    pub fn creator(&self, name: &str) -> Option<&Creator> {
        self.creators.get(name)
    }

    /// Studios a creator's shows credit, unioned across the catalog.
    pub fn creator_studios(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.studios_by_creator.get(name)
    }

    /// All network names, sorted.
    pub fn networks(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.shows_by_network.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All studio names, sorted.
    pub fn studios(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.shows_by_studio.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up a show's attributes.
    pub fn show(&self, id: ShowId) -> Option<&Show> {
        self.shows.get(&id)
    }

    /// All shows keyed by id.
    pub fn shows(&self) -> &FxHashMap<ShowId, Show> {
        &self.shows
    }

    /// Show ids aired on a network.
    pub fn shows_on_network(&self, network: &str) -> Option<&BTreeSet<ShowId>> {
        self.shows_by_network.get(network)
    }

    /// Show ids credited to a studio.
    pub fn shows_at_studio(&self, studio: &str) -> Option<&BTreeSet<ShowId>> {
        self.shows_by_studio.get(studio)
    }

    /// Networks spanned by a set of shows, via the attribute table.
    pub fn networks_of(&self, shows: &BTreeSet<ShowId>) -> BTreeSet<String> {
        shows
            .iter()
            .filter_map(|id| self.shows.get(id))
            .map(|show| show.network.clone())
            .collect()
    }

    /// Number of distinct creators.
    pub fn creator_count(&self) -> usize {
        self.creators.len()
    }

    /// Number of shows in the attribute table.
    pub fn show_count(&self) -> usize {
        self.shows.len()
    }
}
