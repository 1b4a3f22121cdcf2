//! greenlight-core: Shared foundation for the Greenlight credit analytics engine
//!
//! This crate provides the pieces every other Greenlight crate builds on:
//! - Types: credit rows, shows, creators, teams, and the role vocabulary
//! - Errors: one enum per subsystem, `thiserror` only
//! - Config: layered TOML configuration with env overrides
//! - Traits: credit-source and success-scorer seams for external collaborators
//! - Constants: analysis thresholds and layout defaults
//! - Logging: tracing subscriber setup for binaries and tests

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::{AnalysisConfig, GreenlightConfig, LayoutConfig};
pub use errors::{ConfigError, IndexError, IndexResult, LayoutError};
pub use traits::{CreditSource, InMemorySource, ShowTableScorer, SuccessScorer};
pub use types::{CreditRole, CreditRow, Creator, Show, ShowId, Team};
