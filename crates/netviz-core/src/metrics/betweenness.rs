//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness centrality measures how often a node lies on shortest paths
//! between other pairs of nodes. High-betweenness nodes are "bridges" —
//! removing them would disconnect parts of the network.
//!
//! # Algorithm
//!
//! Brandes' algorithm (2001) for unweighted directed graphs:
//!
//! 1. For each source node `s`, run BFS to compute shortest-path counts
//!    and distances.
//! 2. Accumulate dependency scores in reverse BFS order (farthest first).
//! 3. Sum the dependency scores across all source nodes.
//!
//! Shortest-path structure is computed over the simple support graph:
//! parallel edges collapse to one adjacency so path counts are not inflated
//! by duplicate input rows.
//!
//! Scores are normalized by `(n-1)(n-2)`, the number of ordered pairs a
//! node can mediate in a directed graph. Graphs with fewer than 3 nodes
//! score 0.0 everywhere.
//!
//! Complexity: O(V * E).

use std::collections::{HashMap, VecDeque};

use petgraph::{
    Direction,
    graph::NodeIndex,
    visit::{IntoNodeIdentifiers, NodeIndexable},
};
use tracing::instrument;

use crate::graph::NetworkGraph;

/// Compute normalized betweenness centrality for every node in the graph.
///
/// Returns a map from node name to score in `[0, 1]`. Endpoints of a path
/// do not count as lying on it; disconnected nodes score 0.0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(net))]
pub fn betweenness_centrality(net: &NetworkGraph) -> HashMap<String, f64> {
    let g = &net.graph;
    let n = g.node_count();

    if n == 0 {
        return HashMap::new();
    }

    // Deduplicated outgoing adjacency (parallel edges collapse).
    let successors: Vec<Vec<NodeIndex>> = g
        .node_identifiers()
        .map(|v| {
            let mut out: Vec<NodeIndex> = Vec::new();
            for w in g.neighbors_directed(v, Direction::Outgoing) {
                if !out.contains(&w) {
                    out.push(w);
                }
            }
            out
        })
        .collect();

    // Node-indexed betweenness accumulator.
    let mut cb: Vec<f64> = vec![0.0; n];

    for s in g.node_identifiers() {
        let si = g.to_index(s);

        // Stack: nodes in order of discovery (farthest popped first).
        let mut stack: Vec<NodeIndex> = Vec::with_capacity(n);

        // predecessors[w] = nodes immediately preceding w on shortest paths
        // from s.
        let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];

        // sigma[t]: number of shortest paths from s to t.
        let mut sigma: Vec<f64> = vec![0.0; n];
        sigma[si] = 1.0;

        // dist[t]: distance from s to t (-1 = unvisited).
        let mut dist: Vec<i64> = vec![-1; n];
        dist[si] = 0;

        let mut queue: VecDeque<NodeIndex> = VecDeque::new();
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            let vi = g.to_index(v);
            stack.push(v);

            for &w in &successors[vi] {
                let wi = g.to_index(w);

                if dist[wi] < 0 {
                    dist[wi] = dist[vi] + 1;
                    queue.push_back(w);
                }

                if dist[wi] == dist[vi] + 1 {
                    sigma[wi] += sigma[vi];
                    predecessors[wi].push(v);
                }
            }
        }

        // Accumulate dependencies in reverse BFS order.
        let mut delta: Vec<f64> = vec![0.0; n];

        while let Some(w) = stack.pop() {
            let wi = g.to_index(w);

            for &v in &predecessors[wi] {
                let vi = g.to_index(v);
                if sigma[wi] > 0.0 {
                    delta[vi] += (sigma[vi] / sigma[wi]) * (1.0 + delta[wi]);
                }
            }

            if wi != si {
                cb[wi] += delta[wi];
            }
        }
    }

    // Normalize by the number of ordered pairs a node can mediate.
    let scale = if n > 2 {
        1.0 / ((n - 1) as f64 * (n - 2) as f64)
    } else {
        0.0
    };

    let mut result = HashMap::with_capacity(n);
    for idx in g.node_identifiers() {
        if let Some(name) = g.node_weight(idx) {
            result.insert(name.clone(), cb[g.to_index(idx)] * scale);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::betweenness_centrality;
    use crate::graph::NetworkGraph;
    use crate::loader::EdgeRecord;

    fn build(edges: &[(&str, &str)]) -> NetworkGraph {
        let records: Vec<EdgeRecord> = edges
            .iter()
            .map(|(s, t)| EdgeRecord {
                source: (*s).to_string(),
                target: (*t).to_string(),
                kind: "link".to_string(),
            })
            .collect();
        NetworkGraph::from_records(&records)
    }

    #[test]
    fn empty_graph_returns_empty() {
        let net = NetworkGraph::from_records(&[]);
        assert!(betweenness_centrality(&net).is_empty());
    }

    #[test]
    fn two_nodes_score_zero() {
        let net = build(&[("A", "B")]);
        let bc = betweenness_centrality(&net);
        assert_eq!(bc["A"], 0.0);
        assert_eq!(bc["B"], 0.0);
    }

    #[test]
    fn chain_middle_node_mediates() {
        // A → B → C: B lies on the single A→C path.
        // Raw betweenness 1.0, normalized by (3-1)(3-2) = 2.
        let net = build(&[("A", "B"), ("B", "C")]);
        let bc = betweenness_centrality(&net);
        assert!((bc["A"] - 0.0).abs() < 1e-12);
        assert!((bc["B"] - 0.5).abs() < 1e-12);
        assert!((bc["C"] - 0.0).abs() < 1e-12);
    }

    #[test]
    fn diamond_splits_betweenness() {
        // A → B → D, A → C → D: two shortest A→D paths, each middle node on
        // one of them. Raw 0.5, normalized by (4-1)(4-2) = 6.
        let net = build(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        let bc = betweenness_centrality(&net);
        assert!((bc["B"] - 0.5 / 6.0).abs() < 1e-12, "got {}", bc["B"]);
        assert!((bc["C"] - 0.5 / 6.0).abs() < 1e-12, "got {}", bc["C"]);
        assert!((bc["A"] - 0.0).abs() < 1e-12);
        assert!((bc["D"] - 0.0).abs() < 1e-12);
    }

    #[test]
    fn chain_of_four() {
        // A → B → C → D: B on A→C and A→D (raw 2), C on A→D and B→D (raw 2),
        // normalized by (4-1)(4-2) = 6.
        let net = build(&[("A", "B"), ("B", "C"), ("C", "D")]);
        let bc = betweenness_centrality(&net);
        assert!((bc["B"] - 2.0 / 6.0).abs() < 1e-12, "got {}", bc["B"]);
        assert!((bc["C"] - 2.0 / 6.0).abs() < 1e-12, "got {}", bc["C"]);
    }

    #[test]
    fn parallel_edges_do_not_inflate_path_counts() {
        let net = build(&[("A", "B"), ("A", "B"), ("B", "C")]);
        let bc = betweenness_centrality(&net);
        assert!((bc["B"] - 0.5).abs() < 1e-12, "got {}", bc["B"]);
    }

    #[test]
    fn disconnected_pairs_score_zero() {
        let net = build(&[("A", "B"), ("C", "D")]);
        let bc = betweenness_centrality(&net);
        for name in ["A", "B", "C", "D"] {
            assert!((bc[name] - 0.0).abs() < 1e-12);
        }
    }
}
