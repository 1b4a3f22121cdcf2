//! Spring-force fallback layout.
//!
//! Classic repulsion/attraction with a fixed iteration budget and linear
//! cooling. Every guard here exists to keep the output finite no matter
//! what the primary choked on: coincident nodes get a deterministic
//! nudge, steps are capped by temperature, and coordinates are clamped to
//! the canvas.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use tracing::debug;

use greenlight_core::constants::SPRING_ITERATIONS;

use crate::types::{NodePosition, RelationshipGraph};

const MIN_DISTANCE: f64 = 0.01;

/// Lay out the graph. Infallible, coordinates are always finite.
pub fn layout(graph: &RelationshipGraph, canvas_size: f64) -> Vec<NodePosition> {
    let n = graph.nodes.len();
    let center = canvas_size / 2.0;
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![NodePosition {
            name: graph.nodes[0].name.clone(),
            x: center,
            y: center,
        }];
    }

    let index_of: BTreeMap<&str, usize> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.name.as_str(), i))
        .collect();
    let edges: Vec<(usize, usize, f64)> = graph
        .edges
        .iter()
        .filter_map(|edge| {
            let a = *index_of.get(edge.source.as_str())?;
            let b = *index_of.get(edge.target.as_str())?;
            Some((a, b, edge.weight))
        })
        .collect();

    // Same circle start as the primary so the two layouts are comparable.
    let ring = canvas_size / 4.0;
    let mut positions: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            (center + ring * angle.cos(), center + ring * angle.sin())
        })
        .collect();

    let k = (canvas_size * canvas_size / n as f64).sqrt();
    let mut temperature = canvas_size / 10.0;
    let cooling = temperature / SPRING_ITERATIONS as f64;

    for _ in 0..SPRING_ITERATIONS {
        let mut disp = vec![(0.0f64, 0.0f64); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy, dist) = separation(positions[i], positions[j], i, j);
                let force = k * k / dist;
                let (ux, uy) = (dx / dist, dy / dist);
                disp[i].0 += ux * force;
                disp[i].1 += uy * force;
                disp[j].0 -= ux * force;
                disp[j].1 -= uy * force;
            }
        }

        for &(a, b, weight) in &edges {
            let (dx, dy, dist) = separation(positions[a], positions[b], a, b);
            let force = dist * dist / k * weight;
            let (ux, uy) = (dx / dist, dy / dist);
            disp[a].0 -= ux * force;
            disp[a].1 -= uy * force;
            disp[b].0 += ux * force;
            disp[b].1 += uy * force;
        }

        for i in 0..n {
            let (dx, dy) = disp[i];
            let length = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
            let step = length.min(temperature);
            positions[i].0 = (positions[i].0 + dx / length * step).clamp(0.0, canvas_size);
            positions[i].1 = (positions[i].1 + dy / length * step).clamp(0.0, canvas_size);
        }
        temperature = (temperature - cooling).max(0.0);
    }

    debug!(nodes = n, "spring layout complete");
    graph
        .nodes
        .iter()
        .zip(&positions)
        .map(|(node, &(x, y))| NodePosition {
            name: node.name.clone(),
            x,
            y,
        })
        .collect()
}

/// Displacement between two nodes, nudged apart when coincident.
fn separation(a: (f64, f64), b: (f64, f64), i: usize, j: usize) -> (f64, f64, f64) {
    let mut dx = a.0 - b.0;
    let mut dy = a.1 - b.1;
    let mut dist = (dx * dx + dy * dy).sqrt();
    if dist < MIN_DISTANCE {
        dx = (i as f64 - j as f64) * MIN_DISTANCE;
        dy = MIN_DISTANCE;
        dist = (dx * dx + dy * dy).sqrt();
    }
    (dx, dy, dist)
}
