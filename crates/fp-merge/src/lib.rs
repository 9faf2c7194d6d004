//! Confidence-ordered merge simulation.
//!
//! Edges are consumed highest confidence first. Each one is scored against
//! the ground-truth oracle:
//! - different ground-truth bodies: incorrect (or orphan in fragment mode
//!   when the target is unreachable);
//! - same ground-truth body, already in one class: redundant;
//! - same ground-truth body, different classes: correct, and the classes
//!   merge.
//!
//! Merging always folds the second endpoint's class into the first's. The
//! first endpoint's current representative stays the representative.
//!
//! Two modes share the decision core:
//! - [`BodySimulator`]: every edge is scored, and tallies are plain counts.
//! - [`FragmentSimulator`]: each remaining synapse fragment is examined at
//!   most `depth` times, and tallies are weighted by fragment size.

mod partition;
mod report;
mod simulate;

pub use partition::Partition;
pub use report::{Cadence, MergeStats, Mode, PrintReporter, Progress, ProgressObserver, Tally};
pub use simulate::{
    BodySimulator, FragmentGate, FragmentSimulator, MergeSimulator, OrphanCheck, Outcome,
    SimulationConfig,
};
