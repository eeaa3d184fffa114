use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use strokeplay::{Millis, PreparedFigure, StrokeDocument};

#[derive(Parser, Debug)]
#[command(name = "strokeplay", version)]
struct Cli {
    /// Log sequencer transitions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the frame plan (JSON) at a simulated time after start.
    Plan(PlanArgs),
    /// Print one sequencer snapshot (JSON) per sampled tick until completion.
    Timeline(TimelineArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input stroke document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Milliseconds since start.
    #[arg(long)]
    at: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Input stroke document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Sampling interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    step: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> anyhow::Result<PreparedFigure> {
    let doc = StrokeDocument::from_path(path)
        .with_context(|| format!("load stroke document '{}'", path.display()))?;
    doc.prepare()
        .with_context(|| format!("prepare stroke document '{}'", path.display()))
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let fig = load(&args.in_path)?;
    let at = Millis(args.at);
    let snapshot = strokeplay::snapshot_at(&fig.strokes, &fig.animated, fig.sequencer, at)?;
    let plan = strokeplay::compile_frame(&fig.scene(), &snapshot)?;
    let json = serde_json::to_string_pretty(&plan).context("serialize frame plan")?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write frame plan '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let fig = load(&args.in_path)?;
    let rows = strokeplay::simulate_run(
        &fig.strokes,
        &fig.animated,
        fig.sequencer,
        Millis(args.step),
    )?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for row in &rows {
        serde_json::to_writer(&mut out, row).context("serialize snapshot")?;
        writeln!(out).context("write snapshot")?;
    }
    Ok(())
}
