//! Configuration system for Greenlight.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod analysis_config;
pub mod greenlight_config;
pub mod layout_config;

pub use analysis_config::AnalysisConfig;
pub use greenlight_config::GreenlightConfig;
pub use layout_config::LayoutConfig;
