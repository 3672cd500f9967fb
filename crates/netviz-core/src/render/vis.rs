//! vis-network JSON view of the annotated graph.
//!
//! These structs mirror the node/edge/options objects vis-network expects;
//! they are views over the domain types, kept separate so serialization
//! concerns never leak into the pipeline. Nodes are emitted in name order
//! (the annotation map is a `BTreeMap`), edges in insertion order.

use std::collections::BTreeMap;

use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::annotate::{NodeAnnotation, NodeColor};
use crate::config::RenderOptions;
use crate::graph::NetworkGraph;

/// One node object in the vis-network `DataSet`.
#[derive(Debug, Clone, Serialize)]
pub struct VisNode {
    /// Node name (the graph key).
    pub id: String,
    /// Display label.
    pub label: String,
    /// Category display name; vis-network groups nodes by it.
    pub group: String,
    /// Flat color or composite highlight style.
    pub color: NodeColor,
    /// Rendered size.
    pub size: u32,
    /// Border width, present only on highlighted nodes.
    #[serde(rename = "borderWidth", skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    /// Degree centrality, carried for hover/inspection tooling.
    pub degree_centrality: f64,
    /// Betweenness centrality.
    pub betweenness: f64,
    /// Eigenvector centrality.
    pub eigenvector: f64,
    /// PageRank.
    pub pagerank: f64,
}

/// One edge object in the vis-network `DataSet`.
#[derive(Debug, Clone, Serialize)]
pub struct VisEdge {
    /// Source node name.
    pub from: String,
    /// Target node name.
    pub to: String,
    /// Relationship type, shown on hover.
    pub title: String,
}

/// The vis-network options block.
#[derive(Debug, Clone, Serialize)]
pub struct VisOptions {
    nodes: NodeDefaults,
    edges: EdgeDefaults,
    physics: Physics,
    interaction: Interaction,
}

#[derive(Debug, Clone, Serialize)]
struct NodeDefaults {
    font: Font,
}

#[derive(Debug, Clone, Serialize)]
struct Font {
    size: u32,
}

#[derive(Debug, Clone, Serialize)]
struct EdgeDefaults {
    arrows: Arrows,
    color: String,
    smooth: bool,
}

#[derive(Debug, Clone, Serialize)]
struct Arrows {
    to: ArrowHead,
}

#[derive(Debug, Clone, Serialize)]
struct ArrowHead {
    enabled: bool,
    #[serde(rename = "scaleFactor")]
    scale_factor: f64,
}

#[derive(Debug, Clone, Serialize)]
struct Physics {
    enabled: bool,
    #[serde(rename = "barnesHut")]
    barnes_hut: BarnesHut,
}

#[derive(Debug, Clone, Serialize)]
struct BarnesHut {
    #[serde(rename = "gravitationalConstant")]
    gravitational_constant: f64,
    #[serde(rename = "springLength")]
    spring_length: f64,
    #[serde(rename = "springConstant")]
    spring_constant: f64,
}

#[derive(Debug, Clone, Serialize)]
struct Interaction {
    hover: bool,
    #[serde(rename = "navigationButtons")]
    navigation_buttons: bool,
}

impl VisOptions {
    /// Build the options block from [`RenderOptions`].
    #[must_use]
    pub fn from_render_options(options: &RenderOptions) -> Self {
        Self {
            nodes: NodeDefaults {
                font: Font {
                    size: options.font_size,
                },
            },
            edges: EdgeDefaults {
                arrows: Arrows {
                    to: ArrowHead {
                        enabled: true,
                        scale_factor: options.arrow_scale,
                    },
                },
                color: options.edge_color.clone(),
                smooth: false,
            },
            physics: Physics {
                enabled: true,
                barnes_hut: BarnesHut {
                    gravitational_constant: options.gravitational_constant,
                    spring_length: options.spring_length,
                    spring_constant: options.spring_constant,
                },
            },
            interaction: Interaction {
                hover: options.hover,
                navigation_buttons: options.navigation_buttons,
            },
        }
    }
}

/// Build the node list in name order.
#[must_use]
pub fn vis_nodes(annotations: &BTreeMap<String, NodeAnnotation>) -> Vec<VisNode> {
    annotations
        .iter()
        .map(|(name, annotation)| VisNode {
            id: name.clone(),
            label: annotation.label.clone(),
            group: annotation.category.display_name().to_string(),
            color: annotation.color.clone(),
            size: annotation.size,
            border_width: annotation.border_width,
            degree_centrality: annotation.degree,
            betweenness: annotation.betweenness,
            eigenvector: annotation.eigenvector,
            pagerank: annotation.pagerank,
        })
        .collect()
}

/// Build the edge list in insertion order.
#[must_use]
pub fn vis_edges(net: &NetworkGraph) -> Vec<VisEdge> {
    net.graph
        .edge_references()
        .filter_map(|edge| {
            let from = net.name(edge.source())?;
            let to = net.name(edge.target())?;
            Some(VisEdge {
                from: from.to_string(),
                to: to.to_string(),
                title: edge.weight().clone(),
            })
        })
        .collect()
}
