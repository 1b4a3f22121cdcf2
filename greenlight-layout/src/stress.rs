//! Energy-minimizing primary layout.
//!
//! Targets are graph path distances over edge weights, scaled to the
//! canvas, then positions are refined by stress majorization. Disconnected
//! graphs are rejected up front: unreachable pairs have no usable target,
//! which is exactly the non-convergence case the fallback exists for.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use petgraph::algo::{connected_components, dijkstra};
use petgraph::graph::{NodeIndex, UnGraph};
use tracing::debug;

use greenlight_core::constants::{STRESS_MAX_ITERATIONS, STRESS_TOLERANCE};
use greenlight_core::errors::LayoutError;

use crate::types::{NodePosition, RelationshipGraph};

const MIN_SEPARATION: f64 = 1e-9;

/// Lay out the graph, or report why it cannot be done.
pub fn layout(
    graph: &RelationshipGraph,
    canvas_size: f64,
) -> Result<Vec<NodePosition>, LayoutError> {
    let n = graph.nodes.len();
    let center = canvas_size / 2.0;
    if n == 0 {
        return Ok(Vec::new());
    }
    if n == 1 {
        return Ok(vec![NodePosition {
            name: graph.nodes[0].name.clone(),
            x: center,
            y: center,
        }]);
    }

    let targets = path_targets(graph, canvas_size)?;

    // Deterministic circle start.
    let ring = canvas_size / 4.0;
    let mut positions: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            (center + ring * angle.cos(), center + ring * angle.sin())
        })
        .collect();

    let mut stress = stress_value(&positions, &targets);
    let mut residual = f64::INFINITY;

    for iteration in 1..=STRESS_MAX_ITERATIONS {
        let mut next = vec![(0.0f64, 0.0f64); n];
        for i in 0..n {
            let mut weight_sum = 0.0;
            let mut x = 0.0;
            let mut y = 0.0;
            for j in 0..n {
                if i == j {
                    continue;
                }
                let target = targets[i][j];
                let weight = 1.0 / (target * target);
                let dx = positions[i].0 - positions[j].0;
                let dy = positions[i].1 - positions[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(MIN_SEPARATION);
                x += weight * (positions[j].0 + target * dx / dist);
                y += weight * (positions[j].1 + target * dy / dist);
                weight_sum += weight;
            }
            next[i] = (x / weight_sum, y / weight_sum);
        }
        positions = next;

        for (node, &(x, y)) in graph.nodes.iter().zip(&positions) {
            if !x.is_finite() || !y.is_finite() {
                return Err(LayoutError::DegenerateCoordinate {
                    node: node.name.clone(),
                });
            }
        }

        let next_stress = stress_value(&positions, &targets);
        residual = if stress > 0.0 {
            (stress - next_stress).abs() / stress
        } else {
            0.0
        };
        if residual < STRESS_TOLERANCE {
            debug!(iterations = iteration, "stress layout converged");
            return Ok(collect(graph, &positions));
        }
        stress = next_stress;
    }

    Err(LayoutError::NonConvergence {
        iterations: STRESS_MAX_ITERATIONS,
        residual,
    })
}

/// All-pairs path distances scaled so the farthest pair spans half the
/// canvas.
fn path_targets(
    graph: &RelationshipGraph,
    canvas_size: f64,
) -> Result<Vec<Vec<f64>>, LayoutError> {
    let n = graph.nodes.len();
    let index_of: BTreeMap<&str, usize> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.name.as_str(), i))
        .collect();

    let mut mirror: UnGraph<usize, f64> = UnGraph::with_capacity(n, graph.edges.len());
    let indices: Vec<NodeIndex> = (0..n).map(|i| mirror.add_node(i)).collect();
    for edge in &graph.edges {
        if let (Some(&a), Some(&b)) = (
            index_of.get(edge.source.as_str()),
            index_of.get(edge.target.as_str()),
        ) {
            mirror.add_edge(indices[a], indices[b], edge.weight);
        }
    }

    if connected_components(&mirror) > 1 {
        return Err(LayoutError::NonConvergence {
            iterations: 0,
            residual: f64::INFINITY,
        });
    }

    let mut targets = vec![vec![0.0f64; n]; n];
    let mut max_target = 0.0f64;
    for i in 0..n {
        let paths = dijkstra(&mirror, indices[i], None, |e| *e.weight());
        for j in 0..n {
            if i == j {
                continue;
            }
            let distance = paths.get(&indices[j]).copied().unwrap_or(f64::INFINITY);
            targets[i][j] = distance;
            max_target = max_target.max(distance);
        }
    }
    if !max_target.is_finite() || max_target <= 0.0 {
        return Err(LayoutError::NonConvergence {
            iterations: 0,
            residual: f64::INFINITY,
        });
    }

    let scale = canvas_size / (2.0 * max_target);
    for row in &mut targets {
        for target in row.iter_mut() {
            *target *= scale;
        }
    }
    Ok(targets)
}

fn stress_value(positions: &[(f64, f64)], targets: &[Vec<f64>]) -> f64 {
    let n = positions.len();
    let mut total = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let target = targets[i][j];
            if target <= 0.0 {
                continue;
            }
            let dx = positions[i].0 - positions[j].0;
            let dy = positions[i].1 - positions[j].1;
            let dist = (dx * dx + dy * dy).sqrt();
            let gap = dist - target;
            total += gap * gap / (target * target);
        }
    }
    total
}

fn collect(graph: &RelationshipGraph, positions: &[(f64, f64)]) -> Vec<NodePosition> {
    graph
        .nodes
        .iter()
        .zip(positions)
        .map(|(node, &(x, y))| NodePosition {
            name: node.name.clone(),
            x,
            y,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GraphEdge, GraphNode};

    fn node(name: &str) -> GraphNode {
        GraphNode {
            name: name.to_string(),
            pool_size: 5,
            radius: 30.0,
        }
    }

    fn edge(source: &str, target: &str) -> GraphEdge {
        GraphEdge {
            source: source.to_string(),
            target: target.to_string(),
            shared_count: 2,
            weight: 1.0 / 31.0,
        }
    }

    #[test]
    fn test_triangle_converges_to_finite_positions() {
        let graph = RelationshipGraph {
            nodes: vec![node("Meridian"), node("Pinnacle"), node("Vista")],
            edges: vec![
                edge("Meridian", "Pinnacle"),
                edge("Meridian", "Vista"),
                edge("Pinnacle", "Vista"),
            ],
        };

        let positions = layout(&graph, 1000.0).unwrap();
        assert_eq!(positions.len(), 3);
        for position in &positions {
            assert!(position.x.is_finite());
            assert!(position.y.is_finite());
        }
        // Connected nodes end up separated, not collapsed.
        let dx = positions[0].x - positions[1].x;
        let dy = positions[0].y - positions[1].y;
        assert!((dx * dx + dy * dy).sqrt() > 1.0);
    }

    #[test]
    fn test_disconnected_graph_is_rejected() {
        let graph = RelationshipGraph {
            nodes: vec![
                node("Meridian"),
                node("Pinnacle"),
                node("Vista"),
                node("Crestline"),
            ],
            edges: vec![edge("Meridian", "Pinnacle"), edge("Crestline", "Vista")],
        };

        let err = layout(&graph, 1000.0).unwrap_err();
        assert!(matches!(err, LayoutError::NonConvergence { .. }));
    }

    #[test]
    fn test_trivial_graphs_lay_out_immediately() {
        assert!(layout(&RelationshipGraph::default(), 1000.0)
            .unwrap()
            .is_empty());

        let single = RelationshipGraph {
            nodes: vec![node("Meridian")],
            edges: Vec::new(),
        };
        let positions = layout(&single, 1000.0).unwrap();
        assert_eq!(positions.len(), 1);
        assert!((positions[0].x - 500.0).abs() < 1e-9);
    }
}
