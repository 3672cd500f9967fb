//! Rendering configuration.
//!
//! Every presentation knob the renderer uses lives here and is passed
//! explicitly down the pipeline — there is no ambient backend state. The
//! defaults reproduce the standard report appearance; callers that want a
//! different physics feel or canvas size override individual fields.

use serde::{Deserialize, Serialize};

/// Presentation and physics settings for the rendered network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Canvas height (CSS value).
    #[serde(default = "default_height")]
    pub height: String,
    /// Canvas width (CSS value).
    #[serde(default = "default_width")]
    pub width: String,
    /// Canvas background color.
    #[serde(default = "default_background")]
    pub background: String,
    /// Node label font size.
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Edge stroke color.
    #[serde(default = "default_edge_color")]
    pub edge_color: String,
    /// Arrowhead scale at the terminal end of each edge.
    #[serde(default = "default_arrow_scale")]
    pub arrow_scale: f64,
    /// barnesHut gravitational constant (repulsion).
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64,
    /// barnesHut spring rest length.
    #[serde(default = "default_spring_length")]
    pub spring_length: f64,
    /// barnesHut spring constant (attraction strength).
    #[serde(default = "default_spring_constant")]
    pub spring_constant: f64,
    /// Enable hover interaction.
    #[serde(default = "default_true")]
    pub hover: bool,
    /// Show on-canvas navigation buttons.
    #[serde(default = "default_true")]
    pub navigation_buttons: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            height: default_height(),
            width: default_width(),
            background: default_background(),
            font_size: default_font_size(),
            edge_color: default_edge_color(),
            arrow_scale: default_arrow_scale(),
            gravitational_constant: default_gravitational_constant(),
            spring_length: default_spring_length(),
            spring_constant: default_spring_constant(),
            hover: default_true(),
            navigation_buttons: default_true(),
        }
    }
}

fn default_height() -> String {
    "900px".to_string()
}

fn default_width() -> String {
    "100%".to_string()
}

fn default_background() -> String {
    "#ffffff".to_string()
}

const fn default_font_size() -> u32 {
    20
}

fn default_edge_color() -> String {
    "#999999".to_string()
}

const fn default_arrow_scale() -> f64 {
    0.6
}

const fn default_gravitational_constant() -> f64 {
    -12000.0
}

const fn default_spring_length() -> f64 {
    200.0
}

const fn default_spring_constant() -> f64 {
    0.04
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::RenderOptions;

    #[test]
    fn defaults_match_report_presentation() {
        let options = RenderOptions::default();
        assert_eq!(options.height, "900px");
        assert_eq!(options.font_size, 20);
        assert!((options.arrow_scale - 0.6).abs() < f64::EPSILON);
        assert!((options.gravitational_constant - -12000.0).abs() < f64::EPSILON);
        assert!(options.hover);
        assert!(options.navigation_buttons);
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"height": "600px"}"#).expect("parse");
        assert_eq!(options.height, "600px");
        assert_eq!(options.width, "100%");
        assert!((options.spring_length - 200.0).abs() < f64::EPSILON);
    }
}
