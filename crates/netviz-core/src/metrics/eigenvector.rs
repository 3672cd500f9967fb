//! Eigenvector centrality via shifted power iteration.
//!
//! # Overview
//!
//! Eigenvector centrality scores nodes on the principle that connections
//! from high-scoring nodes are worth more. It is the dominant eigenvector
//! of the adjacency matrix; on a directed graph a node's score accumulates
//! from its in-neighbors.
//!
//! # Algorithm
//!
//! Shifted power iteration:
//!
//! 1. Initialize scores uniformly.
//! 2. `x' = x + Aᵀx` — each node keeps its score and adds the scores of its
//!    in-neighbors (per edge, so parallel edges contribute multiply).
//! 3. Normalize to unit L2 norm.
//! 4. Stop when the L1 change drops below `n * tolerance`.
//!
//! The `+x` shift keeps the iteration stable on DAGs and disconnected
//! graphs, where pure power iteration can oscillate or decay to zero. No
//! special casing for self-loops; they feed a node's score back to itself.
//!
//! Unlike the other metrics, non-convergence here is a hard error: the
//! iteration is capped and hitting the cap fails the run with
//! [`Error::Convergence`].

use std::collections::HashMap;

use petgraph::visit::{EdgeRef, IntoNodeIdentifiers, NodeIndexable};
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::graph::NetworkGraph;

/// Iteration cap for the power method.
pub const MAX_ITERATIONS: usize = 1000;

/// Per-node convergence tolerance (compared against the mean L1 change).
pub const TOLERANCE: f64 = 1e-6;

/// Compute eigenvector centrality for every node in the graph.
///
/// Returns a map from node name to score; the score vector has unit L2
/// norm, so individual scores fall in `[0, 1]`.
///
/// # Errors
///
/// Returns [`Error::Convergence`] if the iteration does not converge
/// within `max_iter` iterations.
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(net))]
pub fn eigenvector_centrality(
    net: &NetworkGraph,
    max_iter: usize,
    tolerance: f64,
) -> Result<HashMap<String, f64>> {
    let g = &net.graph;
    let n = g.node_count();

    if n == 0 {
        return Ok(HashMap::new());
    }

    let n_f64 = n as f64;
    let mut scores: Vec<f64> = vec![1.0 / n_f64; n];

    for iteration in 0..max_iter {
        let mut new_scores = scores.clone();

        // x' = x + Aᵀx: every edge u → v pushes u's score onto v.
        for edge in g.edge_references() {
            let ui = g.to_index(edge.source());
            let vi = g.to_index(edge.target());
            new_scores[vi] += scores[ui];
        }

        // Normalize to unit L2 norm.
        let norm: f64 = new_scores.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in &mut new_scores {
                *x /= norm;
            }
        }

        let diff: f64 = scores
            .iter()
            .zip(new_scores.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();

        scores = new_scores;

        if diff < n_f64 * tolerance {
            debug!(iterations = iteration + 1, "eigenvector converged");

            let mut result = HashMap::with_capacity(n);
            for idx in g.node_identifiers() {
                if let Some(name) = g.node_weight(idx) {
                    result.insert(name.clone(), scores[g.to_index(idx)]);
                }
            }
            return Ok(result);
        }
    }

    Err(Error::Convergence {
        iterations: max_iter,
    })
}

#[cfg(test)]
mod tests {
    use super::{MAX_ITERATIONS, TOLERANCE, eigenvector_centrality};
    use crate::error::Error;
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
        let scores =
            eigenvector_centrality(&net, MAX_ITERATIONS, TOLERANCE).expect("converges");
        assert!(scores.is_empty());
    }

    #[test]
    fn cycle_is_symmetric() {
        // A → B → C → A: perfect symmetry, all scores equal (1/√3).
        let net = build(&[("A", "B"), ("B", "C"), ("C", "A")]);
        let scores =
            eigenvector_centrality(&net, MAX_ITERATIONS, TOLERANCE).expect("converges");
        let expected = 1.0 / 3.0_f64.sqrt();
        for name in ["A", "B", "C"] {
            assert!(
                (scores[name] - expected).abs() < 1e-4,
                "{name} = {}",
                scores[name]
            );
        }
    }

    #[test]
    fn sink_of_a_star_scores_highest() {
        // B → A, C → A, D → A: A accumulates from three in-neighbors.
        let net = build(&[("B", "A"), ("C", "A"), ("D", "A")]);
        let scores =
            eigenvector_centrality(&net, MAX_ITERATIONS, TOLERANCE).expect("converges");
        for leaf in ["B", "C", "D"] {
            assert!(
                scores["A"] > scores[leaf],
                "A = {} vs {leaf} = {}",
                scores["A"],
                scores[leaf]
            );
        }
    }

    #[test]
    fn score_vector_has_unit_norm() {
        let net = build(&[("A", "B"), ("B", "C"), ("C", "A"), ("A", "C")]);
        let scores =
            eigenvector_centrality(&net, MAX_ITERATIONS, TOLERANCE).expect("converges");
        let norm: f64 = scores.values().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6, "norm = {norm}");
    }

    #[test]
    fn disconnected_components_all_scored() {
        let net = build(&[("A", "B"), ("C", "D")]);
        let scores =
            eigenvector_centrality(&net, MAX_ITERATIONS, TOLERANCE).expect("converges");
        for name in ["A", "B", "C", "D"] {
            assert!(scores.contains_key(name));
        }
        // Identical components get identical scores.
        assert!((scores["B"] - scores["D"]).abs() < 1e-6);
    }

    #[test]
    fn iteration_cap_is_a_convergence_error() {
        let net = build(&[("A", "B"), ("B", "C")]);
        let err = eigenvector_centrality(&net, 1, 0.0).expect_err("cannot converge");
        assert!(matches!(err, Error::Convergence { iterations: 1 }));
    }

    #[test]
    fn deterministic_across_runs() {
        let net = build(&[("A", "B"), ("B", "C"), ("C", "A"), ("B", "A")]);
        let first =
            eigenvector_centrality(&net, MAX_ITERATIONS, TOLERANCE).expect("converges");
        let second =
            eigenvector_centrality(&net, MAX_ITERATIONS, TOLERANCE).expect("converges");
        for (name, score) in &first {
            assert!((score - second[name]).abs() < f64::EPSILON);
        }
    }
}
