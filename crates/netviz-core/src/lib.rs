#![forbid(unsafe_code)]
//! netviz-core: edge-list loading, centrality metrics, and HTML rendering.
//!
//! # Pipeline
//!
//! ```text
//! CSV edge list
//!        ↓  loader::load_edges()
//! Vec<EdgeRecord>
//!        ↓  graph::NetworkGraph::from_records()
//! NetworkGraph (directed, parallel edges preserved)
//!        ↓  annotate::annotate()
//! BTreeMap<String, NodeAnnotation> (category, style, 4 centrality scores)
//!        ↓  render::render_html() + render::write_report()
//! interactive HTML report
//! ```
//!
//! Data flows strictly forward; each stage runs once and the first failure
//! aborts the run.
//!
//! # Conventions
//!
//! - **Errors**: [`error::Error`] within the crate; callers typically wrap
//!   with `anyhow` at the binary boundary.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod annotate;
pub mod category;
pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod metrics;
pub mod render;

pub use annotate::{NodeAnnotation, annotate};
pub use category::Category;
pub use config::RenderOptions;
pub use error::{Error, Result};
pub use graph::NetworkGraph;
pub use loader::{EdgeRecord, load_edges};
pub use render::{render_html, write_report};
