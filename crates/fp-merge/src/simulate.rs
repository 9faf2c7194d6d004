use std::collections::{HashMap, HashSet};

use fp_core::{Body, RankedPath};
use fp_select::GroundTruth;
use tracing::{debug, info};

use crate::partition::Partition;
use crate::report::{Cadence, MergeStats, Mode, Progress, ProgressObserver};

/// How fragment mode decides that a ground-truth mismatch has no valid
/// target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanCheck {
    /// Tests only the lower endpoint's ground-truth body against the
    /// reachable set. Matches historical outputs.
    #[default]
    Legacy,
    /// Orphan if either endpoint's ground-truth body is unreachable.
    BothEndpoints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Maximum number of edges examined per fragment.
    pub depth: usize,
    pub cadence: Cadence,
    pub orphan_check: OrphanCheck,
}

impl SimulationConfig {
    pub fn for_mode(mode: Mode) -> Self {
        let cadence = match mode {
            Mode::Bodies => Cadence::SkipEvery(10),
            Mode::Fragments => Cadence::Every(10),
        };
        Self {
            cadence,
            ..Self::default()
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            cadence: Cadence::Every(10),
            orphan_check: OrphanCheck::Legacy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    Redundant,
    Orphan,
    /// Fragment already examined `depth` times.
    Throttled,
    /// An endpoint has no ground-truth mapping.
    Unmapped,
}

impl Outcome {
    pub fn is_skip(self) -> bool {
        matches!(self, Self::Throttled | Self::Unmapped)
    }
}

/// Greedy merge simulation over a ranked path list.
pub trait MergeSimulator {
    fn step(&mut self, path: &RankedPath) -> Outcome;

    fn stats(&self) -> &MergeStats;

    fn cadence(&self) -> Cadence;

    /// Processes `paths` in order. Skipped edges are never reported.
    fn run<O: ProgressObserver + ?Sized>(
        &mut self,
        paths: &[RankedPath],
        observer: &mut O,
    ) -> MergeStats
    where
        Self: Sized,
    {
        let cadence = self.cadence();
        for (index, path) in paths.iter().enumerate() {
            if self.step(path).is_skip() {
                continue;
            }
            if cadence.admits(index) {
                observer.on_progress(&Progress {
                    index,
                    confidence: path.confidence,
                    stats: self.stats().clone(),
                });
            }
        }

        let stats = self.stats().clone();
        info!(
            correct = stats.correct.count,
            incorrect = stats.incorrect.count,
            redundant = stats.redundant.count,
            orphan = stats.orphan.count,
            remaining = stats.remaining,
            "simulation finished"
        );
        observer.finish(&stats);
        stats
    }
}

struct Core<'a> {
    gt: &'a GroundTruth,
    partition: Partition,
    stats: MergeStats,
}

impl Core<'_> {
    fn decide(&mut self, path: &RankedPath, weight: f64, orphans: Option<OrphanCheck>) -> Outcome {
        let (a, b) = (path.a, path.b);
        let (Some(ga), Some(gb)) = (self.gt.get(a), self.gt.get(b)) else {
            debug!(a, b, "unmapped endpoint");
            return Outcome::Unmapped;
        };
        if !self.partition.contains(a) || !self.partition.contains(b) {
            debug!(a, b, "endpoint outside partition");
            return Outcome::Unmapped;
        }

        if ga != gb {
            let orphaned = match orphans {
                None => false,
                Some(OrphanCheck::Legacy) => !self.gt.is_reachable(ga),
                Some(OrphanCheck::BothEndpoints) => {
                    !self.gt.is_reachable(ga) || !self.gt.is_reachable(gb)
                }
            };
            return if orphaned {
                self.stats.orphan.add(weight);
                Outcome::Orphan
            } else {
                self.stats.incorrect.add(weight);
                Outcome::Incorrect
            };
        }

        match self.partition.absorb(a, b) {
            Some(_) => {
                self.stats.remaining = self.stats.remaining.saturating_sub(1);
                self.stats.correct.add(weight);
                Outcome::Correct
            }
            None => {
                self.stats.redundant.add(0.0);
                Outcome::Redundant
            }
        }
    }
}

/// Whole-body evaluation over a working set with orphans already removed.
pub struct BodySimulator<'a> {
    core: Core<'a>,
    cadence: Cadence,
}

impl<'a> BodySimulator<'a> {
    pub fn new(working_set: &HashSet<Body>, gt: &'a GroundTruth, cfg: &SimulationConfig) -> Self {
        info!(
            seg_bodies = working_set.len(),
            gt_bodies = gt.num_gt_bodies(),
            "body simulation"
        );
        Self {
            core: Core {
                gt,
                partition: Partition::new(working_set.iter().copied()),
                stats: MergeStats::new(Mode::Bodies, working_set.len(), gt.num_gt_bodies()),
            },
            cadence: cfg.cadence,
        }
    }

    pub fn partition(&self) -> &Partition {
        &self.core.partition
    }

    pub fn partition_mut(&mut self) -> &mut Partition {
        &mut self.core.partition
    }
}

impl MergeSimulator for BodySimulator<'_> {
    fn step(&mut self, path: &RankedPath) -> Outcome {
        self.core.decide(path, 0.0, None)
    }

    fn stats(&self) -> &MergeStats {
        &self.core.stats
    }

    fn cadence(&self) -> Cadence {
        self.cadence
    }
}

/// Per-fragment examination limit.
#[derive(Debug, Clone)]
pub struct FragmentGate {
    depth: usize,
    examined: HashMap<Body, usize>,
}

impl FragmentGate {
    pub fn new(depth: usize, capacity: usize) -> Self {
        Self {
            depth,
            examined: HashMap::with_capacity(capacity),
        }
    }

    /// Counts one examination of `fragment`, or returns `false` once it has
    /// reached the cap.
    pub fn admit(&mut self, fragment: Body) -> bool {
        let n = self.examined.entry(fragment).or_insert(0);
        if *n >= self.depth {
            return false;
        }
        *n += 1;
        true
    }

    pub fn examined(&self, fragment: Body) -> usize {
        self.examined.get(&fragment).copied().unwrap_or(0)
    }
}

/// Fragment evaluation: merges remaining synapse fragments onto the working
/// set, weighting each decision by the fragment's size.
pub struct FragmentSimulator<'a> {
    core: Core<'a>,
    fragments: &'a HashMap<Body, f64>,
    gate: FragmentGate,
    cadence: Cadence,
    orphan_check: OrphanCheck,
}

impl<'a> FragmentSimulator<'a> {
    pub fn new(
        working_set: &HashSet<Body>,
        fragments: &'a HashMap<Body, f64>,
        gt: &'a GroundTruth,
        cfg: &SimulationConfig,
    ) -> Self {
        info!(
            fragments = fragments.len(),
            gt_bodies = gt.num_gt_bodies(),
            depth = cfg.depth,
            "fragment simulation"
        );
        let bodies = working_set.iter().chain(fragments.keys()).copied();
        Self {
            core: Core {
                gt,
                partition: Partition::new(bodies),
                stats: MergeStats::new(Mode::Fragments, fragments.len(), gt.num_gt_bodies()),
            },
            fragments,
            gate: FragmentGate::new(cfg.depth, fragments.len()),
            cadence: cfg.cadence,
            orphan_check: cfg.orphan_check,
        }
    }

    pub fn gate(&self) -> &FragmentGate {
        &self.gate
    }

    pub fn partition_mut(&mut self) -> &mut Partition {
        &mut self.core.partition
    }
}

impl MergeSimulator for FragmentSimulator<'_> {
    fn step(&mut self, path: &RankedPath) -> Outcome {
        let fragment = if self.fragments.contains_key(&path.a) {
            path.a
        } else {
            path.b
        };
        if !self.gate.admit(fragment) {
            debug!(fragment, "examination depth reached");
            return Outcome::Throttled;
        }

        let weight = self.fragments.get(&fragment).copied().unwrap_or(0.0);
        self.core.decide(path, weight, Some(self.orphan_check))
    }

    fn stats(&self) -> &MergeStats {
        &self.core.stats
    }

    fn cadence(&self) -> Cadence {
        self.cadence
    }
}
