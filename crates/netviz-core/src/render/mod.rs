//! Interactive HTML rendering of the annotated network.
//!
//! Two layers: `vis` holds the serde view structs mirroring vis-network's
//! node/edge/options JSON; `html` assembles the final document (include,
//! embedded data, legend overlay) and writes it to disk.

pub mod html;
pub mod vis;

pub use html::{legend_fragment, render_html, write_report};
pub use vis::{VisEdge, VisNode, VisOptions};
