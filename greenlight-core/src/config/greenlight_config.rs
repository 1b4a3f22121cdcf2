//! Top-level Greenlight configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, LayoutConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`GREENLIGHT_*`)
/// 2. Project config (`greenlight.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GreenlightConfig {
    pub analysis: AnalysisConfig,
    pub layout: LayoutConfig,
}

impl GreenlightConfig {
    /// Load configuration with 3-layer resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Environment variables (`GREENLIGHT_*`)
    /// 2. Project config (`greenlight.toml` in `root`)
    /// 3. Compiled defaults
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 2: project config
        let project_config_path = root.join("greenlight.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config);

        // Validate the final config
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &GreenlightConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.analysis.overlap_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.overlap_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(share) = config.analysis.major_share {
            if !(0.0..1.0).contains(&share) {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.major_share".to_string(),
                    message: "must be at least 0.0 and below 1.0".to_string(),
                });
            }
        }
        if let Some(z) = config.analysis.z_threshold {
            if z <= 0.0 || !z.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.z_threshold".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if let Some(min_shows) = config.analysis.min_shows {
            if min_shows == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.min_shows".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(min_shows) = config.analysis.package_min_shows {
            if min_shows == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.package_min_shows".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(radius) = config.layout.max_node_radius {
            if radius <= 0.0 || !radius.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "layout.max_node_radius".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if let Some(size) = config.layout.canvas_size {
            if size <= 0.0 || !size.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "layout.canvas_size".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GreenlightConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GreenlightConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut GreenlightConfig, other: &GreenlightConfig) {
        // Analysis
        if other.analysis.min_shows.is_some() {
            base.analysis.min_shows = other.analysis.min_shows;
        }
        if other.analysis.overlap_threshold.is_some() {
            base.analysis.overlap_threshold = other.analysis.overlap_threshold;
        }
        if other.analysis.min_network_shows.is_some() {
            base.analysis.min_network_shows = other.analysis.min_network_shows;
        }
        if other.analysis.major_share.is_some() {
            base.analysis.major_share = other.analysis.major_share;
        }
        if other.analysis.z_threshold.is_some() {
            base.analysis.z_threshold = other.analysis.z_threshold;
        }
        if other.analysis.package_min_shows.is_some() {
            base.analysis.package_min_shows = other.analysis.package_min_shows;
        }
        if other.analysis.package_min_networks.is_some() {
            base.analysis.package_min_networks = other.analysis.package_min_networks;
        }

        // Layout
        if other.layout.min_pool_size.is_some() {
            base.layout.min_pool_size = other.layout.min_pool_size;
        }
        if other.layout.max_node_radius.is_some() {
            base.layout.max_node_radius = other.layout.max_node_radius;
        }
        if other.layout.canvas_size.is_some() {
            base.layout.canvas_size = other.layout.canvas_size;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GREENLIGHT_ANALYSIS_MIN_SHOWS`, `GREENLIGHT_LAYOUT_CANVAS_SIZE`, etc.
    fn apply_env_overrides(config: &mut GreenlightConfig) {
        if let Ok(val) = std::env::var("GREENLIGHT_ANALYSIS_MIN_SHOWS") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.min_shows = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GREENLIGHT_ANALYSIS_OVERLAP_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.analysis.overlap_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GREENLIGHT_ANALYSIS_MAJOR_SHARE") {
            if let Ok(v) = val.parse::<f64>() {
                config.analysis.major_share = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GREENLIGHT_ANALYSIS_Z_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.analysis.z_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GREENLIGHT_LAYOUT_MAX_NODE_RADIUS") {
            if let Ok(v) = val.parse::<f64>() {
                config.layout.max_node_radius = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GREENLIGHT_LAYOUT_CANVAS_SIZE") {
            if let Ok(v) = val.parse::<f64>() {
                config.layout.canvas_size = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
