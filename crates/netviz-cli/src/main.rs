#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use netviz_core::annotate::annotate;
use netviz_core::config::RenderOptions;
use netviz_core::graph::NetworkGraph;
use netviz_core::loader::load_edges;
use netviz_core::render::{render_html, write_report};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "netviz: render an interactive centrality report from a CSV edge list",
    long_about = None
)]
struct Cli {
    /// Path to the input edge list (CSV with source, target, type columns).
    #[arg(short, long, default_value = "data/network_data.csv")]
    input: PathBuf,

    /// Path for the generated HTML report.
    #[arg(short, long, default_value = "output/interactive_network.html")]
    output: PathBuf,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let records = load_edges(&cli.input)
        .with_context(|| format!("loading edge list from {}", cli.input.display()))?;
    let net = NetworkGraph::from_records(&records);
    info!(
        nodes = net.node_count(),
        edges = net.edge_count(),
        "built network"
    );

    let annotations = annotate(&net).context("annotating network")?;
    let html = render_html(&net, &annotations, &RenderOptions::default())
        .context("rendering report")?;
    write_report(&html, &cli.output)
        .with_context(|| format!("writing report to {}", cli.output.display()))?;

    println!("Success! Open {} in your browser", cli.output.display());
    Ok(())
}
