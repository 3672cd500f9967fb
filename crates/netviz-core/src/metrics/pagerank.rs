//! PageRank via the iterative power method.
//!
//! # Overview
//!
//! PageRank scores a node by the probability that a damped random walk
//! visits it:
//!
//! ```text
//! PR(v) = (1 - d) / N + d * Σ PR(u) / out_degree(u)   for each u → v
//! ```
//!
//! where `d` is the damping factor (default 0.85). Dangling nodes (no
//! outgoing edges) redistribute their rank uniformly; the teleportation
//! term keeps disconnected components reachable. Parallel edges each carry
//! their own share of the source's rank.
//!
//! Non-convergence within `max_iter` is logged as a warning and the last
//! iterate is returned; rank mass is still ~1.0 in that case.

use std::collections::HashMap;

use petgraph::{
    Direction,
    visit::{IntoNodeIdentifiers, NodeIndexable},
};
use tracing::{instrument, warn};

use crate::graph::NetworkGraph;

/// Configuration for PageRank computation.
#[derive(Debug, Clone)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs teleporting).
    /// Default: 0.85.
    pub damping: f64,
    /// Convergence threshold: stop when L1 norm of rank delta < tolerance.
    /// Default: 1e-6.
    pub tolerance: f64,
    /// Maximum number of iterations.
    /// Default: 100.
    pub max_iter: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-6,
            max_iter: 100,
        }
    }
}

/// Compute PageRank for every node in the graph.
///
/// Returns a map from node name to score; scores sum to ~1.0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(net, config))]
pub fn pagerank(net: &NetworkGraph, config: &PageRankConfig) -> HashMap<String, f64> {
    let g = &net.graph;
    let n = g.node_count();

    if n == 0 {
        return HashMap::new();
    }

    let n_f64 = n as f64;
    let base = (1.0 - config.damping) / n_f64;

    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0_f64; n];
    let mut converged = false;

    for _ in 0..config.max_iter {
        // Reset to the base teleportation value.
        for r in &mut new_ranks {
            *r = base;
        }

        // Distribute rank from each node along its outgoing edges.
        for node in g.node_identifiers() {
            let idx = g.to_index(node);
            let out_degree = g.edges_directed(node, Direction::Outgoing).count();

            if out_degree == 0 {
                // Dangling node: distribute its rank equally to all nodes.
                let share = config.damping * ranks[idx] / n_f64;
                for r in &mut new_ranks {
                    *r += share;
                }
            } else {
                let share = config.damping * ranks[idx] / out_degree as f64;
                for neighbor in g.neighbors_directed(node, Direction::Outgoing) {
                    new_ranks[g.to_index(neighbor)] += share;
                }
            }
        }

        // L1 norm of the delta.
        let delta: f64 = ranks
            .iter()
            .zip(new_ranks.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut ranks, &mut new_ranks);

        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            max_iter = config.max_iter,
            "pagerank did not converge, using last iterate"
        );
    }

    let mut scores = HashMap::with_capacity(n);
    for idx in g.node_identifiers() {
        if let Some(name) = g.node_weight(idx) {
            scores.insert(name.clone(), ranks[g.to_index(idx)]);
        }
    }

    scores
}
