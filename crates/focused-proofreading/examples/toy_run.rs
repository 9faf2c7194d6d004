//! Example: whole-body and fragment evaluation on a small in-memory volume.
//!
//! Run from the workspace root:
//!   cargo run -p focused-proofreading --example toy_run
//!   cargo run -p focused-proofreading --example toy_run -- --depth 1

use anyhow::Result;
use clap::Parser;
use focused_proofreading::{
    BodySimulator, BodySize, CandidatePath, FragmentSimulator, GroundTruth, MergeSimulator, Mode,
    PrintReporter, SegToGt, SimulationConfig, rank_body_paths, rank_fragment_paths,
    remove_orphans, select_working_set, split_fragments,
};

#[derive(Parser, Debug)]
#[command(about = "Score greedy merges on a toy segmentation")]
struct Args {
    /// Examinations allowed per synapse fragment
    #[arg(long, default_value_t = 2)]
    depth: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let big = vec![
        BodySize::new(1, 900.0),
        BodySize::new(2, 700.0),
        BodySize::new(3, 400.0),
        BodySize::new(4, 50.0),
    ];
    let syn = vec![
        BodySize::new(3, 12.0),
        BodySize::new(10, 6.0),
        BodySize::new(11, 2.0),
        BodySize::new(12, 1.0),
    ];
    let paths = vec![
        CandidatePath::new(1, 2, 0.92),
        CandidatePath::new(2, 3, 0.61),
        CandidatePath::new(1, 3, 0.40),
        CandidatePath::new(1, 11, 0.88),
        CandidatePath::new(3, 11, 0.70),
        CandidatePath::new(2, 11, 0.65),
        CandidatePath::new(2, 12, 0.55),
    ];
    let adjacency = vec![
        SegToGt::new(1, 500),
        SegToGt::new(2, 500),
        SegToGt::new(3, 501),
        SegToGt::new(10, 501),
        SegToGt::new(11, 500),
        SegToGt::new(12, 777),
    ];

    println!("== bodies");
    let mut working = select_working_set(&big, &syn, 1500.0, 15.0);
    let gt = GroundTruth::for_bodies(&working, &adjacency);
    remove_orphans(&mut working, &gt);
    let ranked = rank_body_paths(&paths, &working);
    let mut sim = BodySimulator::new(&working, &gt, &SimulationConfig::for_mode(Mode::Bodies));
    sim.run(&ranked, &mut PrintReporter::stdout());

    println!("== fragments");
    let split = split_fragments(&big, &syn, 1500.0, 15.0);
    let gt = GroundTruth::for_fragments(&split.working_set, &split.fragments, &adjacency);
    let ranked = rank_fragment_paths(&paths, &split.working_set, &split.fragments);
    let cfg = SimulationConfig {
        depth: args.depth,
        ..SimulationConfig::for_mode(Mode::Fragments)
    };
    let mut sim = FragmentSimulator::new(&split.working_set, &split.fragments, &gt, &cfg);
    sim.run(&ranked, &mut PrintReporter::stdout());

    Ok(())
}
