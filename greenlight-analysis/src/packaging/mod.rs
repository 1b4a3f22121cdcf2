//! Package suggestions: scoped clustering plus multi-key ranking.

pub mod ranker;
pub mod types;

pub use ranker::PackageRanker;
pub use types::{ClusterStrategy, NetworkBreakdown, RankedShow, Suggestion};
