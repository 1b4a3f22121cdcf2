//! Graph layout configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for relationship-graph construction and layout.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum talent-pool size for a node to enter the graph. Default: 2.
    pub min_pool_size: Option<usize>,
    /// Radius of the largest node; others scale linearly. Default: 60.0.
    pub max_node_radius: Option<f64>,
    /// Square canvas edge length the layout targets. Default: 1000.0.
    pub canvas_size: Option<f64>,
}

impl LayoutConfig {
    /// Returns the effective pool-size floor, defaulting to 2.
    pub fn effective_min_pool_size(&self) -> usize {
        self.min_pool_size.unwrap_or(constants::DEFAULT_MIN_POOL_SIZE)
    }

    /// Returns the effective maximum node radius, defaulting to 60.0.
    pub fn effective_max_node_radius(&self) -> f64 {
        self.max_node_radius
            .unwrap_or(constants::DEFAULT_MAX_NODE_RADIUS)
    }

    /// Returns the effective canvas size, defaulting to 1000.0.
    pub fn effective_canvas_size(&self) -> f64 {
        self.canvas_size.unwrap_or(constants::DEFAULT_CANVAS_SIZE)
    }
}
