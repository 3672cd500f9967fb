//! Degree centrality.
//!
//! Degree centrality of a node is its total degree (in + out, parallel
//! edges counted individually) divided by `n - 1`, the maximum possible
//! degree in a simple graph of the same size. Graphs with a single node
//! score 0.0 for that node.

use std::collections::HashMap;

use petgraph::{Direction, visit::IntoNodeIdentifiers};

use crate::graph::NetworkGraph;

/// Compute degree centrality for every node in the graph.
///
/// Returns a map from node name to score. Scores fall in `[0, 1]` for
/// simple graphs; parallel edges and self-loops can push them above 1.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(net: &NetworkGraph) -> HashMap<String, f64> {
    let g = &net.graph;
    let n = g.node_count();
    let mut scores = HashMap::with_capacity(n);

    if n == 0 {
        return scores;
    }

    let denom = if n > 1 { (n - 1) as f64 } else { 1.0 };

    for idx in g.node_identifiers() {
        let in_d = g.edges_directed(idx, Direction::Incoming).count();
        let out_d = g.edges_directed(idx, Direction::Outgoing).count();
        let score = if n > 1 {
            (in_d + out_d) as f64 / denom
        } else {
            0.0
        };

        if let Some(name) = g.node_weight(idx) {
            scores.insert(name.clone(), score);
        }
    }

    scores
}
