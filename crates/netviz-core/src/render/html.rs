//! HTML document assembly and output.
//!
//! The report is a single self-contained HTML file: vis-network pulled in
//! via its standard standalone include, the node/edge `DataSet`s and options
//! block embedded as JSON literals, and a fixed-position legend overlay
//! prepended at the top of the body.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::{info, instrument};

use crate::annotate::NodeAnnotation;
use crate::category::Category;
use crate::config::RenderOptions;
use crate::error::{Error, Result};
use crate::graph::NetworkGraph;
use crate::render::vis::{VisOptions, vis_edges, vis_nodes};

/// The standard vis-network standalone include.
pub const VIS_NETWORK_JS: &str =
    "https://unpkg.com/vis-network/standalone/umd/vis-network.min.js";

/// Categories listed in the legend (Other is implicit and unlisted).
const LEGEND_CATEGORIES: [Category; 3] = [
    Category::Volunteer,
    Category::School,
    Category::CommunityPartner,
];

/// Build the fixed-position legend overlay fragment.
#[must_use]
pub fn legend_fragment() -> String {
    let mut html = String::from(
        "<div style=\"position:absolute;top:10px;left:10px;background:white;\
         padding:15px;border:1px solid #ccc;z-index:1000;font-family:Arial;\
         border-radius:8px;\">\n  <b>Legend</b><br>\n",
    );
    for category in LEGEND_CATEGORIES {
        let _ = writeln!(
            html,
            "  <span style=\"color:{}\">&#9679;</span> {}<br>",
            category.color(),
            category.display_name()
        );
    }
    html.push_str("  Gold border = Top 5 most central nodes\n</div>");
    html
}

/// Render the complete HTML document for the annotated network.
///
/// # Errors
///
/// Returns [`Error::Serialize`] if the vis-network payload fails to
/// serialize (not expected for well-formed annotations).
#[instrument(skip(net, annotations, options))]
pub fn render_html(
    net: &NetworkGraph,
    annotations: &BTreeMap<String, NodeAnnotation>,
    options: &RenderOptions,
) -> Result<String> {
    let nodes_json = serde_json::to_string(&vis_nodes(annotations))?;
    let edges_json = serde_json::to_string(&vis_edges(net))?;
    let options_json = serde_json::to_string(&VisOptions::from_render_options(options))?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Network Report</title>
<script src="{VIS_NETWORK_JS}"></script>
<style>
  body {{ margin: 0; }}
  #network {{
    height: {height};
    width: {width};
    background-color: {background};
  }}
</style>
</head>
<body>
{legend}
<div id="network"></div>
<script>
  var nodes = new vis.DataSet({nodes_json});
  var edges = new vis.DataSet({edges_json});
  var container = document.getElementById("network");
  var network = new vis.Network(container, {{ nodes: nodes, edges: edges }}, {options_json});
</script>
</body>
</html>
"#,
        height = options.height,
        width = options.width,
        background = options.background,
        legend = legend_fragment(),
    ))
}

/// Write the rendered document to `path`, creating parent directories as
/// needed.
///
/// # Errors
///
/// Returns [`Error::Io`] if a directory cannot be created or the file
/// cannot be written.
#[instrument(skip(html))]
pub fn write_report(html: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, html).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = html.len(), "wrote report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{legend_fragment, render_html, write_report};
    use crate::annotate::annotate;
    use crate::config::RenderOptions;
    use crate::error::Error;
    use crate::graph::NetworkGraph;
    use crate::loader::EdgeRecord;

    fn build(edges: &[(&str, &str, &str)]) -> NetworkGraph {
        let records: Vec<EdgeRecord> = edges
            .iter()
            .map(|(s, t, k)| EdgeRecord {
                source: (*s).to_string(),
                target: (*t).to_string(),
                kind: (*k).to_string(),
            })
            .collect();
        NetworkGraph::from_records(&records)
    }

    #[test]
    fn legend_lists_known_categories_and_gold_note() {
        let legend = legend_fragment();
        assert!(legend.contains("Volunteer"));
        assert!(legend.contains("School"));
        assert!(legend.contains("Community Partner"));
        assert!(legend.contains("#1f77b4"));
        assert!(legend.contains("Gold border"));
    }

    #[test]
    fn document_embeds_data_legend_and_include() {
        let net = build(&[("Vol_Jane_Doe", "School_Lincoln", "tutors")]);
        let annotations = annotate(&net).expect("annotate");
        let html =
            render_html(&net, &annotations, &RenderOptions::default()).expect("render");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("vis-network.min.js"));
        assert!(html.contains("new vis.DataSet"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("\"title\":\"tutors\""));
        // Legend comes before the network container.
        let legend_at = html.find("Legend").expect("legend present");
        let network_at = html.find("id=\"network\"").expect("container present");
        assert!(legend_at < network_at);
    }

    #[test]
    fn canvas_styling_follows_options() {
        let net = build(&[("A", "B", "link")]);
        let annotations = annotate(&net).expect("annotate");
        let options = RenderOptions {
            height: "500px".to_string(),
            ..RenderOptions::default()
        };
        let html = render_html(&net, &annotations, &options).expect("render");
        assert!(html.contains("height: 500px;"));
        assert!(html.contains("background-color: #ffffff;"));
    }

    #[test]
    fn write_report_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("report.html");
        write_report("<!DOCTYPE html>", &path).expect("write");
        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "<!DOCTYPE html>");
    }

    #[cfg(unix)]
    #[test]
    fn unwritable_path_is_an_io_error() {
        let err = write_report("<!DOCTYPE html>", std::path::Path::new("/proc/netviz/out.html"))
            .expect_err("should fail");
        assert!(matches!(err, Error::Io { .. }));
    }
}
