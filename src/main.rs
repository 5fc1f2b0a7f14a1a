use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

use topograph::diagnostics::{CollectingSink, DiagnosticSink, LogSink};
use topograph::graph::{self, GraphSummary};
use topograph::loader::{self, TopologyFormat};
use topograph::topology;

/// Validate a network topology description and build its directed graph
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the topology file (.json, .yaml or .yml)
    topology: PathBuf,

    /// Topology file format, overriding detection from the extension
    #[arg(short, long)]
    format: Option<TopologyFormat>,

    /// Only load and validate the topology
    #[arg(long, conflicts_with = "skip_validation")]
    lint: bool,

    /// Build the graph without validating the topology first
    #[arg(long)]
    skip_validation: bool,

    /// Fail if any warnings are reported (e.g. isolated networks)
    #[arg(long)]
    strict: bool,

    /// Write a JSON degree summary of the built graph to this path
    #[arg(short, long)]
    summary: Option<PathBuf>,

    /// Default log filter when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str()))
        .init();

    info!("Topology file: {:?}", args.topology);

    run(&args)?;

    info!("Topology processing completed successfully");
    Ok(())
}

/// Process the topology, collecting diagnostics and replaying them to the log
fn run(args: &Args) -> Result<()> {
    let mut sink = CollectingSink::new();
    let result = process(args, &mut sink);

    let warnings = sink.at_level(log::Level::Warn).count();
    sink.drain_into(&mut LogSink);
    result?;

    if args.strict && warnings > 0 {
        return Err(eyre!("{} warning(s) reported in strict mode", warnings));
    }

    Ok(())
}

fn process(args: &Args, sink: &mut CollectingSink) -> Result<()> {
    let description = match args.format {
        Some(format) => loader::load_topology_with_format(&args.topology, format),
        None => loader::load_topology(&args.topology),
    }
    .wrap_err_with(|| format!("Failed to load topology '{}'", args.topology.display()))?;

    if args.skip_validation {
        warn!("Skipping validation of topology '{}'", description.name);
    } else {
        topology::validate_with(&description, sink)
            .wrap_err_with(|| format!("Topology '{}' is invalid", args.topology.display()))?;
    }

    if args.lint {
        info!("Lint completed successfully");
        return Ok(());
    }

    let graph =
        graph::build_with(&description, sink).wrap_err("Failed to build topology graph")?;
    drop(description);

    let summary = GraphSummary::from_graph(&graph);
    for degree in &summary.degrees {
        sink.info(&format!(
            "  {} ({}): {} egress, {} ingress",
            degree.name, degree.prefix, degree.egress, degree.ingress
        ));
    }
    if !summary.isolated_nodes.is_empty() {
        sink.warn(&format!("Isolated networks: {}", summary.isolated_nodes.join(", ")));
    }

    if let Some(path) = &args.summary {
        let json =
            serde_json::to_string_pretty(&summary).wrap_err("Failed to serialize graph summary")?;
        fs::write(path, json)
            .wrap_err_with(|| format!("Failed to write summary to '{}'", path.display()))?;
        info!("Wrote graph summary to {:?}", path);
    }

    graph.release();
    Ok(())
}
