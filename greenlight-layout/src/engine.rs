//! LayoutEngine: try the primary, catch failure, retry with the fallback.

use tracing::{debug, warn};

use greenlight_core::config::LayoutConfig;

use crate::graph::GraphBuilder;
use crate::types::{Layout, LayoutAlgorithm, RelationshipGraph};
use crate::{spring, stress};

/// Owns the layout configuration and the primary/fallback decision.
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Build the relationship graph from pools and overlap counts.
    pub fn build_graph(
        &self,
        pools: &[(String, usize)],
        shared: &[(String, String, usize)],
    ) -> RelationshipGraph {
        GraphBuilder::from_config(&self.config).build(pools, shared)
    }

    /// Lay out the graph. The primary stress layout handles the common
    /// connected case; anything it rejects goes to the spring fallback,
    /// which always produces finite coordinates.
    pub fn layout(&self, graph: &RelationshipGraph) -> Layout {
        let canvas_size = self.config.effective_canvas_size();
        match stress::layout(graph, canvas_size) {
            Ok(positions) => {
                debug!(nodes = positions.len(), "stress layout accepted");
                Layout {
                    algorithm: LayoutAlgorithm::Stress,
                    positions,
                }
            }
            Err(error) => {
                warn!(%error, "stress layout failed, falling back to spring");
                Layout {
                    algorithm: LayoutAlgorithm::Spring,
                    positions: spring::layout(graph, canvas_size),
                }
            }
        }
    }
}
