//! Per-node annotation: styling pass, centrality pass, top-5 highlighting.
//!
//! # Overview
//!
//! The annotator turns the bare graph into the fully-described node set the
//! renderer consumes. Two passes:
//!
//! 1. **Styling** — category from the ordered prefix rules, then color,
//!    size, and cleaned label from the per-category tables.
//! 2. **Centrality** — degree, betweenness, eigenvector, and PageRank over
//!    the whole directed graph.
//!
//! After both passes, the top [`TOP_HIGHLIGHT_COUNT`] nodes by PageRank
//! (ties broken by node name ascending, so the set is deterministic) get the
//! composite gold-border highlight style and a thicker border.
//!
//! The result is a `BTreeMap` keyed by node name; iteration order is
//! therefore stable across runs.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, instrument};

use crate::category::{Category, clean_label};
use crate::error::Result;
use crate::graph::NetworkGraph;
use crate::metrics::{
    betweenness_centrality, degree_centrality, eigenvector, eigenvector_centrality, pagerank,
    PageRankConfig,
};

/// How many top-PageRank nodes receive the highlight style.
pub const TOP_HIGHLIGHT_COUNT: usize = 5;

/// Border color for highlighted nodes.
pub const HIGHLIGHT_BORDER: &str = "#FFD700";

/// Hover background for highlighted nodes.
pub const HIGHLIGHT_HOVER: &str = "#FFEA00";

/// Border width applied to highlighted nodes.
pub const HIGHLIGHT_BORDER_WIDTH: u32 = 5;

/// A node color: either a flat base color or the composite highlight style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NodeColor {
    /// Plain hex color from the category table.
    Flat(String),
    /// Background/border/hover object used for highlighted nodes.
    Composite(CompositeColor),
}

/// vis-network composite color object for highlighted nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositeColor {
    /// The category's base color, kept as the fill.
    pub background: String,
    /// Gold border marking a top-PageRank node.
    pub border: String,
    /// Colors shown while the node is hovered or selected.
    pub highlight: HighlightColor,
}

/// Hover/selection colors inside a [`CompositeColor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightColor {
    /// Hover fill color.
    pub background: String,
    /// Hover border color.
    pub border: String,
}

/// Everything the renderer needs to know about one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeAnnotation {
    /// Category derived from the name prefix.
    pub category: Category,
    /// Display label (prefix stripped, underscores replaced).
    pub label: String,
    /// Flat base color, or the composite style for top-PageRank nodes.
    pub color: NodeColor,
    /// Rendered size from the category table.
    pub size: u32,
    /// Degree centrality score.
    pub degree: f64,
    /// Betweenness centrality score.
    pub betweenness: f64,
    /// Eigenvector centrality score.
    pub eigenvector: f64,
    /// PageRank score.
    pub pagerank: f64,
    /// Border width, set only on highlighted nodes.
    pub border_width: Option<u32>,
}

impl NodeAnnotation {
    /// Whether this node carries the top-PageRank highlight style.
    #[must_use]
    pub const fn is_highlighted(&self) -> bool {
        self.border_width.is_some()
    }
}

/// Annotate every node in the graph.
///
/// # Errors
///
/// Returns [`crate::error::Error::Convergence`] if eigenvector centrality
/// fails to converge within its iteration cap.
#[instrument(skip(net))]
pub fn annotate(net: &NetworkGraph) -> Result<BTreeMap<String, NodeAnnotation>> {
    let degree = degree_centrality(net);
    let betweenness = betweenness_centrality(net);
    let eigen = eigenvector_centrality(
        net,
        eigenvector::MAX_ITERATIONS,
        eigenvector::TOLERANCE,
    )?;
    let ranks = pagerank(net, &PageRankConfig::default());

    let mut annotations = BTreeMap::new();

    for name in net.node_map.keys() {
        let category = Category::of(name);
        annotations.insert(
            name.clone(),
            NodeAnnotation {
                category,
                label: clean_label(name),
                color: NodeColor::Flat(category.color().to_string()),
                size: category.size(),
                degree: degree.get(name).copied().unwrap_or_default(),
                betweenness: betweenness.get(name).copied().unwrap_or_default(),
                eigenvector: eigen.get(name).copied().unwrap_or_default(),
                pagerank: ranks.get(name).copied().unwrap_or_default(),
                border_width: None,
            },
        );
    }

    for name in top_by_pagerank(&ranks, TOP_HIGHLIGHT_COUNT) {
        if let Some(annotation) = annotations.get_mut(&name) {
            annotation.color = NodeColor::Composite(CompositeColor {
                background: annotation.category.color().to_string(),
                border: HIGHLIGHT_BORDER.to_string(),
                highlight: HighlightColor {
                    background: HIGHLIGHT_HOVER.to_string(),
                    border: HIGHLIGHT_BORDER.to_string(),
                },
            });
            annotation.border_width = Some(HIGHLIGHT_BORDER_WIDTH);
        }
    }

    info!(nodes = annotations.len(), "annotated network");
    Ok(annotations)
}

/// The `count` highest-PageRank node names, PageRank descending with name
/// ascending as the tie-break.
fn top_by_pagerank(ranks: &std::collections::HashMap<String, f64>, count: usize) -> Vec<String> {
    let mut ranked: Vec<(&String, f64)> = ranks.iter().map(|(k, v)| (k, *v)).collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    ranked
        .into_iter()
        .take(count)
        .map(|(name, _)| name.clone())
        .collect()
}
