//! Two-person partnership detection.

pub mod detector;
pub mod types;

pub use detector::PartnershipDetector;
pub use types::PartnershipResult;
