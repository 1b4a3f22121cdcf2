//! CreditSource trait: the backing analytical store seam.
//!
//! The engine never performs I/O. Whatever store holds the credit records
//! implements this trait and materializes a full snapshot before a report
//! runs; pagination and retries are the implementor's concern.

use crate::errors::IndexResult;
use crate::types::collections::FxHashMap;
use crate::types::{CreditRow, Show, ShowId};

/// Provider of the materialized credit snapshot a report runs over.
pub trait CreditSource: Send + Sync {
    /// All credit rows in the snapshot.
    fn credit_rows(&self) -> IndexResult<Vec<CreditRow>>;

    /// Attribute table for every show the rows may reference.
    fn show_attributes(&self) -> IndexResult<FxHashMap<ShowId, Show>>;
}

/// In-memory implementation backed by owned tables.
/// Used by tests and fixtures; production stores adapt their own snapshots.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    rows: Vec<CreditRow>,
    shows: FxHashMap<ShowId, Show>,
}

impl InMemorySource {
    /// Create a source over the given tables.
    pub fn new(rows: Vec<CreditRow>, shows: FxHashMap<ShowId, Show>) -> Self {
        Self { rows, shows }
    }

    /// Number of credit rows in the snapshot.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl CreditSource for InMemorySource {
    fn credit_rows(&self) -> IndexResult<Vec<CreditRow>> {
        Ok(self.rows.clone())
    }

    fn show_attributes(&self) -> IndexResult<FxHashMap<ShowId, Show>> {
        Ok(self.shows.clone())
    }
}
