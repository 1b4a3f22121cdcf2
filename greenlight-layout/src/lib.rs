//! Force-directed layout for the network/studio relationship graph.
//!
//! - `graph`: node/edge construction with pool-size filtering and
//!   radius/weight scaling
//! - `stress`: energy-minimizing primary layout over path-distance targets
//! - `spring`: bounded-iteration fallback that always produces finite
//!   coordinates
//! - `engine`: try the primary, catch failure, retry with the fallback

pub mod engine;
pub mod graph;
pub mod spring;
pub mod stress;
pub mod types;

// Re-exports for convenience
pub use engine::LayoutEngine;
pub use graph::GraphBuilder;
pub use types::{GraphEdge, GraphNode, Layout, LayoutAlgorithm, NodePosition, RelationshipGraph};
