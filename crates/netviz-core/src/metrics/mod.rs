//! Centrality metrics over the directed network.
//!
//! # Overview
//!
//! Four whole-graph metrics, each answering a different question about a
//! node's structural importance:
//!
//! - **Degree centrality** (`degree`): How connected is the node, relative
//!   to the rest of the graph?
//! - **Betweenness centrality** (`betweenness`): Does the node sit on
//!   shortest paths between other nodes — is it a bridge or bottleneck?
//! - **Eigenvector centrality** (`eigenvector`): Is the node connected to
//!   other well-connected nodes?
//! - **PageRank** (`pagerank`): How often would a damped random walk visit
//!   the node?
//!
//! All metrics take a [`NetworkGraph`](crate::graph::NetworkGraph) reference
//! and return scores keyed by node name. Every node in the graph receives a
//! score from every metric.

pub mod betweenness;
pub mod degree;
pub mod eigenvector;
pub mod pagerank;

pub use betweenness::betweenness_centrality;
pub use degree::degree_centrality;
pub use eigenvector::eigenvector_centrality;
pub use pagerank::{PageRankConfig, pagerank};
