//! Network and studio relationship aggregation.

pub mod analyzer;
pub mod diversity;
pub mod significance;
pub mod types;

pub use analyzer::RelationshipAnalyzer;
pub use types::{
    GenreShare, NetworkProfile, OverlapPair, RoleBreakdown, RoleSignal, SharedCreator,
    StudioProfile,
};
