//! zmatch: synthesize passive impedance-matching networks and emit them as
//! SPICE subcircuits.
//!
//! Picks one of three ladder topologies (LCC, PI, TEE), computes the element
//! reactances matching the source impedance to a resistive load at the
//! requested Q, validates the result algebraically, and prints the scaled
//! component netlist.

mod report;

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};
use lib_match::{validate, Topology};
use lib_spice::parse_impedance;
use lib_types::{Hertz, Impedance, Ohms};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "zmatch")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("topology").required(true)))]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Subcircuit name
    #[arg(short, long, default_value = "network")]
    name: String,

    /// Source impedance, e.g. 10+10j
    #[arg(short, long, value_parser = parse_impedance)]
    source: Impedance,

    /// Load impedance or Zo (must be purely resistive)
    #[arg(short, long, default_value = "50", value_parser = parse_impedance)]
    line: Impedance,

    /// Q factor
    #[arg(short, long, default_value_t = 1.0)]
    quality: f64,

    /// Design frequency in Hz
    #[arg(short, long)]
    frequency: Option<f64>,

    /// Bandwidth in Hz; together with --frequency it overrides Q as f/bw
    #[arg(short, long)]
    bandwidth: Option<f64>,

    /// Reverse the network, e.g. to match the line back into a high-Z input
    #[arg(short, long)]
    reverse: bool,

    /// Use a LCC network
    #[arg(long, group = "topology")]
    lcc: bool,

    /// Use a PI network
    #[arg(long, group = "topology")]
    pi: bool,

    /// Use a TEE network
    #[arg(long, group = "topology")]
    tee: bool,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    if !cli.line.is_resistive() {
        bail!("the load impedance cannot be complex, got {}", cli.line);
    }
    let rl = Ohms(cli.line.resistance());
    if rl.0 < 0.0 {
        bail!("the load resistance must be non-negative, got {}", rl.0);
    }

    let frequency = match cli.frequency {
        Some(f) if f < 0.0 => bail!("the frequency must be positive, got {} Hz", f),
        // A zero frequency cannot scale components; treat it as unset so the
        // raw reactances are reported instead.
        Some(f) if f == 0.0 => None,
        other => other.map(Hertz),
    };
    let bandwidth = match cli.bandwidth {
        Some(bw) if bw <= 0.0 => bail!("the bandwidth must be positive, got {} Hz", bw),
        other => other.map(Hertz),
    };

    // Frequency plus bandwidth overrides the requested Q.
    let quality = match (frequency, bandwidth) {
        (Some(f), Some(bw)) => f / bw,
        _ => cli.quality,
    };
    if quality <= 0.0 {
        bail!("the Q factor must be positive, got {}", quality);
    }

    let topology = if cli.lcc {
        Topology::Lcc
    } else if cli.tee {
        Topology::Tee
    } else {
        Topology::Pi
    };

    tracing::info!(%topology, zg = %cli.source, rl = rl.0, q = quality, "synthesizing matching network");

    let ladder = topology.synthesize(cli.source, rl, quality)?;
    let zin = validate(&ladder, cli.source, rl)?;

    tracing::info!(%zin, "validation passed");

    let ladder = if cli.reverse { ladder.reversed() } else { ladder };

    let design = report::Design {
        name: cli.name,
        zg: cli.source,
        rl,
        quality,
        frequency,
        zin,
        ladder,
    };

    match cli.format {
        OutputFormat::Text => report::print_text(&design)?,
        OutputFormat::Json => report::print_json(&design)?,
    }

    Ok(())
}
