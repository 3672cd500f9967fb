//! Directed graph construction from the edge list.
//!
//! # Overview
//!
//! Each [`EdgeRecord`] becomes one directed edge `source → target` whose
//! weight is the relationship type (rendered as the edge hover label).
//! Nodes are created implicitly by the first edge that references them, so
//! isolated nodes never occur.
//!
//! ## Multi-edge policy
//!
//! Parallel edges between the same ordered pair are **preserved**: petgraph's
//! `DiGraph` allows them and we never call `update_edge`. Duplicate input
//! rows therefore render as separate edges and contribute multiply to the
//! walk-based centrality metrics.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::instrument;

use crate::loader::EdgeRecord;

/// The directed network under analysis.
///
/// Nodes are string names; edge weights are relationship-type labels.
#[derive(Debug)]
pub struct NetworkGraph {
    /// Directed graph: node weights = names, edge weights = type labels.
    pub graph: DiGraph<String, String>,
    /// Mapping from node name to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
}

impl NetworkGraph {
    /// Build the graph from an edge list.
    #[must_use]
    #[instrument(skip(records))]
    pub fn from_records(records: &[EdgeRecord]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();

        for record in records {
            let source = *node_map
                .entry(record.source.clone())
                .or_insert_with(|| graph.add_node(record.source.clone()));
            let target = *node_map
                .entry(record.target.clone())
                .or_insert_with(|| graph.add_node(record.target.clone()));
            graph.add_edge(source, target, record.kind.clone());
        }

        Self { graph, node_map }
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges in the graph (parallel edges counted individually).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a node name.
    #[must_use]
    pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.node_map.get(name).copied()
    }

    /// Return the name for a node index.
    #[must_use]
    pub fn name(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }
}
