//! greenlight-analysis: The Greenlight credit analytics engine
//!
//! Turns a materialized snapshot of credit rows and show attributes into the
//! derived structures the dashboard ranks and draws:
//! - Credits: normalized per-creator and per-network index
//! - Partnerships: greedy two-person team detection by show overlap
//! - Relationships: network/studio talent pools, role breakdowns, diversity,
//!   and z-score role significance
//! - Stories: success-story and emerging-collaboration classification
//! - Packaging: multi-network package suggestions with success ranking
//! - Engine: per-report orchestrator producing a full dashboard report

pub mod credits;
pub mod engine;
pub mod packaging;
pub mod partnerships;
pub mod relationships;
pub mod stories;

// Re-exports for convenience
pub use credits::CreditIndex;
pub use engine::{DashboardReport, ReportEngine};
pub use packaging::{
    ClusterStrategy, NetworkBreakdown, PackageRanker, RankedShow, Suggestion,
};
pub use partnerships::{PartnershipDetector, PartnershipResult};
pub use relationships::{
    GenreShare, NetworkProfile, OverlapPair, RelationshipAnalyzer, RoleBreakdown,
    RoleSignal, SharedCreator, StudioProfile,
};
pub use stories::{StoryClassifier, StoryLists, SuccessStory};
