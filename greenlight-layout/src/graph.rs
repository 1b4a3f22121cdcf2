//! Relationship graph construction.

use std::collections::BTreeMap;

use tracing::debug;

use greenlight_core::config::LayoutConfig;

use crate::types::{GraphEdge, GraphNode, RelationshipGraph};

/// Builds the graph from talent pools and pairwise shared-creator counts.
///
/// Pools below the minimum size are dropped, and any edge touching a
/// dropped node goes with it.
pub struct GraphBuilder {
    min_pool_size: usize,
    max_node_radius: f64,
}

impl GraphBuilder {
    pub fn new(min_pool_size: usize, max_node_radius: f64) -> Self {
        Self {
            min_pool_size,
            max_node_radius,
        }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(
            config.effective_min_pool_size(),
            config.effective_max_node_radius(),
        )
    }

    /// Build a graph from `(name, pool_size)` pools and
    /// `(a, b, shared_count)` overlap entries.
    pub fn build(
        &self,
        pools: &[(String, usize)],
        shared: &[(String, String, usize)],
    ) -> RelationshipGraph {
        let surviving: BTreeMap<&str, usize> = pools
            .iter()
            .filter(|(_, size)| *size >= self.min_pool_size)
            .map(|(name, size)| (name.as_str(), *size))
            .collect();

        let max_pool = surviving.values().copied().max().unwrap_or(0);
        if max_pool == 0 {
            debug!("no pools survived the size floor");
            return RelationshipGraph::default();
        }

        let radii: BTreeMap<&str, f64> = surviving
            .iter()
            .map(|(name, size)| {
                (*name, *size as f64 / max_pool as f64 * self.max_node_radius)
            })
            .collect();

        let nodes: Vec<GraphNode> = surviving
            .iter()
            .map(|(name, size)| GraphNode {
                name: (*name).to_string(),
                pool_size: *size,
                radius: radii[name],
            })
            .collect();

        let mut edge_counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
        for (a, b, count) in shared {
            if *count == 0 || a == b {
                continue;
            }
            if !radii.contains_key(a.as_str()) || !radii.contains_key(b.as_str()) {
                continue;
            }
            let key = if a <= b {
                (a.as_str(), b.as_str())
            } else {
                (b.as_str(), a.as_str())
            };
            let slot = edge_counts.entry(key).or_insert(0);
            *slot = (*slot).max(*count);
        }

        let edges: Vec<GraphEdge> = edge_counts
            .into_iter()
            .map(|((source, target), shared_count)| {
                let avg_radius = (radii[source] + radii[target]) / 2.0;
                GraphEdge {
                    source: source.to_string(),
                    target: target.to_string(),
                    shared_count,
                    weight: 1.0 / (avg_radius + 1.0),
                }
            })
            .collect();

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "relationship graph built"
        );
        RelationshipGraph { nodes, edges }
    }
}
