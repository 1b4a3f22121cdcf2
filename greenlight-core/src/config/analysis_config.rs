//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the analysis subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum shows for a partnership candidate. Default: 3.
    pub min_shows: Option<usize>,
    /// Two-sided overlap ratio required to bond a pair. Default: 0.80.
    pub overlap_threshold: Option<f64>,
    /// Minimum shows before a network/studio gets ratio metrics. Default: 3.
    pub min_network_shows: Option<usize>,
    /// Share a genre must strictly exceed to count as major. Default: 0.10.
    pub major_share: Option<f64>,
    /// Absolute z-score for flagging a role percentage. Default: 1.5.
    pub z_threshold: Option<f64>,
    /// Minimum in-scope shows for a package candidate. Default: 2.
    pub package_min_shows: Option<usize>,
    /// Minimum networks a package suggestion must span. Default: 2.
    pub package_min_networks: Option<usize>,
}

impl AnalysisConfig {
    /// Returns the effective partnership show floor, defaulting to 3.
    pub fn effective_min_shows(&self) -> usize {
        self.min_shows.unwrap_or(constants::DEFAULT_MIN_SHOWS)
    }

    /// Returns the effective overlap threshold, defaulting to 0.80.
    pub fn effective_overlap_threshold(&self) -> f64 {
        self.overlap_threshold
            .unwrap_or(constants::DEFAULT_OVERLAP_THRESHOLD)
    }

    /// Returns the effective network show floor, defaulting to 3.
    pub fn effective_min_network_shows(&self) -> usize {
        self.min_network_shows
            .unwrap_or(constants::DEFAULT_MIN_NETWORK_SHOWS)
    }

    /// Returns the effective major-genre share, defaulting to 0.10.
    pub fn effective_major_share(&self) -> f64 {
        self.major_share.unwrap_or(constants::DEFAULT_MAJOR_SHARE)
    }

    /// Returns the effective z-score threshold, defaulting to 1.5.
    pub fn effective_z_threshold(&self) -> f64 {
        self.z_threshold.unwrap_or(constants::DEFAULT_Z_THRESHOLD)
    }

    /// Returns the effective package show floor, defaulting to 2.
    pub fn effective_package_min_shows(&self) -> usize {
        self.package_min_shows
            .unwrap_or(constants::DEFAULT_PACKAGE_MIN_SHOWS)
    }

    /// Returns the effective package network floor, defaulting to 2.
    pub fn effective_package_min_networks(&self) -> usize {
        self.package_min_networks
            .unwrap_or(constants::DEFAULT_PACKAGE_MIN_NETWORKS)
    }
}
