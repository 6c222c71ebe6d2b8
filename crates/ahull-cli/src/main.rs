use ahull::api::{
    compute_ahull, draw_disks, ClipMode, Complement, DiskCount, HullCfg, PairwiseUnion,
    ReplayToken, SampleCfg,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "ahull-cli")]
#[command(about = "Alpha-hull boundary arcs from complement tables")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the boundary arcs of a complement table (CSV or Parquet)
    Run {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Alpha the complement was built for; recorded in the outputs
        #[arg(long)]
        alpha: f64,
        #[arg(long, value_enum, default_value_t = Clip::Midpoint)]
        clip: Clip,
    },
    /// Write a random disk-only complement table
    Sample {
        #[arg(long, default_value_t = 8)]
        disks: usize,
        /// Centers are drawn from [-spread, spread]^2
        #[arg(long, default_value_t = 2.0)]
        spread: f64,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Clip {
    Midpoint,
    Split,
}

impl From<Clip> for ClipMode {
    fn from(c: Clip) -> Self {
        match c {
            Clip::Midpoint => ClipMode::Midpoint,
            Clip::Split => ClipMode::Split,
        }
    }
}

#[derive(Debug, Serialize)]
struct RunSummary {
    rows: usize,
    arcs: usize,
    length: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            alpha,
            clip,
        } => run(&input, &out, alpha, clip).map(|_| ()),
        Action::Sample {
            disks,
            spread,
            seed,
            index,
            out,
        } => sample(disks, spread, ReplayToken { seed, index }, &out),
        Action::Report => report(),
    }
}

fn run(input: &str, out: &str, alpha: f64, clip: Clip) -> Result<RunSummary> {
    tracing::info!(input, out, alpha, clip = ?clip, "run");
    let complement = table::read_complement(Path::new(input))?;
    let hull = compute_ahull(
        input.to_string(),
        complement,
        alpha,
        &PairwiseUnion,
        HullCfg { clip: clip.into() },
    )
    .with_context(|| format!("computing alpha-hull of {input}"))?;
    table::write_arcs(Path::new(out), &hull.arcs)?;

    let summary = RunSummary {
        rows: hull.complement.len(),
        arcs: hull.arcs.len(),
        length: hull.length,
    };
    tracing::info!(arcs = summary.arcs, length = summary.length, "boundary");
    let mut payload = Payload::new(json!({
        "input": hull.source,
        "alpha": hull.alpha,
        "clip": format!("{clip:?}"),
    }));
    payload.summary = serde_json::to_value(&summary)?;
    provenance::write_sidecar(out, payload)?;
    Ok(summary)
}

fn sample(disks: usize, spread: f64, tok: ReplayToken, out: &str) -> Result<()> {
    tracing::info!(disks, spread, seed = tok.seed, index = tok.index, out, "sample");
    let cfg = SampleCfg {
        disk_count: DiskCount::Fixed(disks),
        spread,
        ..SampleCfg::default()
    };
    let complement = Complement::from_disks(&draw_disks(cfg, tok));
    table::write_complement(Path::new(out), &complement)?;
    provenance::write_sidecar(
        out,
        Payload::new(json!({
            "disks": disks,
            "spread": spread,
            "seed": tok.seed,
            "index": tok.index,
        })),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": ahull::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
