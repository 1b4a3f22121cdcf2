//! Graph and layout types consumed by the rendering layer.

use serde::{Deserialize, Serialize};

/// A graph node: one network or studio, sized by talent pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: String,
    pub pool_size: usize,
    /// Visual radius, scaled linearly against the largest pool.
    pub radius: f64,
}

/// An undirected edge between two nodes sharing talent.
///
/// `source` < `target` lexicographically; each pair appears once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub shared_count: usize,
    /// Inverse of the average endpoint radius, so edges between large
    /// nodes are stretched further apart.
    pub weight: f64,
}

/// The relationship graph handed to layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipGraph {
    /// Name order.
    pub nodes: Vec<GraphNode>,
    /// (source, target) order.
    pub edges: Vec<GraphEdge>,
}

impl RelationshipGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Which algorithm produced the final coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutAlgorithm {
    /// Energy-minimizing embedding over path-distance targets.
    Stress,
    /// Iterative spring-force fallback.
    Spring,
}

/// A laid-out node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// Final layout: one position per graph node, same order as the nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub algorithm: LayoutAlgorithm,
    pub positions: Vec<NodePosition>,
}
