use std::collections::{HashMap, HashSet};

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fp_core::{CandidatePath, SegToGt};
use fp_merge::{BodySimulator, Cadence, FragmentSimulator, MergeSimulator, SimulationConfig};
use fp_select::{GroundTruth, rank_body_paths, rank_fragment_paths};

// Bodies 0..n, grouped ten to a ground-truth body, with a sparse ring of
// candidate edges.
fn synthetic(n: u64) -> (HashSet<u64>, Vec<SegToGt>, Vec<CandidatePath>) {
    let bodies: HashSet<u64> = (0..n).collect();
    let adjacency = (0..n).map(|b| SegToGt::new(b, b / 10)).collect();

    let mut paths = Vec::with_capacity(n as usize * 3);
    for b in 0..n {
        for step in [1, 7, 31] {
            let other = (b + step) % n;
            let (a, c) = if b < other { (b, other) } else { (other, b) };
            let confidence = ((b * 2_654_435_761 + step) % 1000) as f64 / 1000.0;
            paths.push(CandidatePath::new(a, c, confidence));
        }
    }
    (bodies, adjacency, paths)
}

fn bench_bodies(c: &mut Criterion) {
    let (bodies, adjacency, paths) = synthetic(100_000);
    let gt = GroundTruth::for_bodies(&bodies, &adjacency);
    let ranked = rank_body_paths(&paths, &bodies);
    let cfg = SimulationConfig {
        cadence: Cadence::Never,
        ..SimulationConfig::default()
    };

    c.bench_function("fp_merge_bodies_300k_edges", |b| {
        b.iter(|| {
            let mut sim = BodySimulator::new(&bodies, &gt, &cfg);
            let stats = sim.run(black_box(&ranked), &mut ());
            black_box(stats.correct.count);
        });
    });
}

fn bench_fragments(c: &mut Criterion) {
    let (bodies, adjacency, paths) = synthetic(100_000);
    let working: HashSet<u64> = bodies.iter().copied().filter(|b| b % 4 != 0).collect();
    let fragments: HashMap<u64, f64> = bodies
        .iter()
        .copied()
        .filter(|b| b % 4 == 0)
        .map(|b| (b, (b % 17) as f64))
        .collect();
    let gt = GroundTruth::for_fragments(&working, &fragments, &adjacency);
    let ranked = rank_fragment_paths(&paths, &working, &fragments);
    let cfg = SimulationConfig {
        cadence: Cadence::Never,
        ..SimulationConfig::default()
    };

    c.bench_function("fp_merge_fragments", |b| {
        b.iter(|| {
            let mut sim = FragmentSimulator::new(&working, &fragments, &gt, &cfg);
            let stats = sim.run(black_box(&ranked), &mut ());
            black_box(stats.correct.size);
        });
    });
}

criterion_group!(benches, bench_bodies, bench_fragments);
criterion_main!(benches);
