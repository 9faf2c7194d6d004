use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use focused_proofreading::io::{load_adjacency, load_body_sizes, load_paths};
use focused_proofreading::{
    Body, BodySimulator, BodySize, Cadence, CandidatePath, FragmentSimulator, GroundTruth,
    MergeSimulator, MergeStats, Mode, OrphanCheck, PrintReporter, SegToGt, SimulationConfig,
    rank_body_paths, rank_fragment_paths, remove_orphans, select_working_set, split_fragments,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fp_eval")]
#[command(about = "Score greedy confidence-ordered merges against ground truth")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge large segmentation bodies with each other
    #[command(name = "bodies")]
    Bodies(BodiesArgs),
    /// Merge leftover synapse fragments onto resolved bodies
    #[command(name = "fragments")]
    Fragments(FragmentArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// Big-body size list, `[[body, size], ...]`, largest first
    #[arg(long, required = true)]
    big: PathBuf,
    /// Synapse-body size list, same shape
    #[arg(long, required = true)]
    synapses: PathBuf,
    /// Candidate paths, `[[a, b, confidence], ...]`
    #[arg(long, required = true)]
    paths: PathBuf,
    /// Ground-truth adjacency, `[[seg, gt], ...]`
    #[arg(long, required = true)]
    truth: PathBuf,
    #[arg(long, required = true)]
    body_threshold: f64,
    #[arg(long, required = true)]
    syn_threshold: f64,
    /// Progress period in ranked edges
    #[arg(long, default_value_t = 10)]
    report_every: usize,
    #[arg(long, default_value_t = false)]
    no_progress: bool,
    /// Write final stats as JSON
    #[arg(long)]
    summary: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct BodiesArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
struct FragmentArgs {
    #[command(flatten)]
    common: CommonArgs,
    /// Examinations allowed per fragment
    #[arg(long, default_value_t = 2)]
    depth: usize,
    /// Treat a mismatch as orphaned when either endpoint's ground-truth body
    /// is unreachable, not just the first
    #[arg(long, default_value_t = false)]
    check_both_endpoints: bool,
}

struct Inputs {
    big: Vec<BodySize>,
    syn: Vec<BodySize>,
    paths: Vec<CandidatePath>,
    adjacency: Vec<SegToGt>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Bodies(args) => run_bodies(args),
        Command::Fragments(args) => run_fragments(args),
    }
}

fn run_bodies(args: BodiesArgs) -> Result<()> {
    let common = &args.common;
    validate_common(common)?;
    let inputs = load_inputs(common)?;

    let mut working: HashSet<Body> = select_working_set(
        &inputs.big,
        &inputs.syn,
        common.body_threshold,
        common.syn_threshold,
    );
    let gt = GroundTruth::for_bodies(&working, &inputs.adjacency);
    remove_orphans(&mut working, &gt);

    let ranked = rank_body_paths(&inputs.paths, &working);
    let cfg = SimulationConfig {
        cadence: cadence(common, Mode::Bodies),
        ..SimulationConfig::for_mode(Mode::Bodies)
    };

    let mut reporter = PrintReporter::stdout();
    let mut sim = BodySimulator::new(&working, &gt, &cfg);
    let stats = sim.run(&ranked, &mut reporter);
    reporter.into_inner().context("writing report to stdout")?;

    write_summary(common.summary.as_deref(), &stats)
}

fn run_fragments(args: FragmentArgs) -> Result<()> {
    let common = &args.common;
    validate_common(common)?;
    if args.depth == 0 {
        bail!("--depth must be at least 1.");
    }
    let inputs = load_inputs(common)?;

    let split = split_fragments(
        &inputs.big,
        &inputs.syn,
        common.body_threshold,
        common.syn_threshold,
    );
    let ranked = rank_fragment_paths(&inputs.paths, &split.working_set, &split.fragments);
    let gt = GroundTruth::for_fragments(&split.working_set, &split.fragments, &inputs.adjacency);

    let cfg = SimulationConfig {
        depth: args.depth,
        cadence: cadence(common, Mode::Fragments),
        orphan_check: if args.check_both_endpoints {
            OrphanCheck::BothEndpoints
        } else {
            OrphanCheck::Legacy
        },
    };

    let mut reporter = PrintReporter::stdout();
    let mut sim = FragmentSimulator::new(&split.working_set, &split.fragments, &gt, &cfg);
    let stats = sim.run(&ranked, &mut reporter);
    reporter.into_inner().context("writing report to stdout")?;

    write_summary(common.summary.as_deref(), &stats)
}

fn validate_common(common: &CommonArgs) -> Result<()> {
    for (name, v) in [
        ("--body-threshold", common.body_threshold),
        ("--syn-threshold", common.syn_threshold),
    ] {
        if !v.is_finite() || v < 0.0 {
            bail!("{name} must be a finite, non-negative number, got {v}.");
        }
    }
    for (what, path) in [
        ("big-body", &common.big),
        ("synapse-body", &common.synapses),
        ("paths", &common.paths),
        ("truth", &common.truth),
    ] {
        ensure_file_exists(path, what)?;
    }
    Ok(())
}

fn load_inputs(common: &CommonArgs) -> Result<Inputs> {
    let big = load_body_sizes(&common.big).context("loading big-body sizes")?;
    let syn = load_body_sizes(&common.synapses).context("loading synapse-body sizes")?;
    let paths = load_paths(&common.paths).context("loading candidate paths")?;
    let adjacency = load_adjacency(&common.truth).context("loading ground-truth adjacency")?;
    info!(
        big = big.len(),
        synapses = syn.len(),
        paths = paths.len(),
        adjacency = adjacency.len(),
        "opened all files"
    );
    Ok(Inputs {
        big,
        syn,
        paths,
        adjacency,
    })
}

fn cadence(common: &CommonArgs, mode: Mode) -> Cadence {
    if common.no_progress || common.report_every == 0 {
        return Cadence::Never;
    }
    match mode {
        Mode::Bodies => Cadence::SkipEvery(common.report_every),
        Mode::Fragments => Cadence::Every(common.report_every),
    }
}

fn write_summary(path: Option<&Path>, stats: &MergeStats) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let bytes = serde_json::to_vec_pretty(stats).context("serializing summary")?;
    fs::write(path, bytes).with_context(|| format!("writing summary {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
