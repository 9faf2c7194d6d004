//! Input preparation for merge simulation.
//!
//! Stages, in pipeline order:
//! - [`threshold`]: pick the working set by cumulative size.
//! - [`ground_truth`]: restrict the seg→gt adjacency to the bodies in play and
//!   find orphans.
//! - [`rank`]: keep the candidate paths relevant to the mode and sort them by
//!   descending confidence.
//!
//! [`extract`] sits in front of all of these. It turns nearby-body queries
//! against an external graph into the candidate path list.

pub mod extract;
pub mod ground_truth;
pub mod rank;
pub mod threshold;

pub use extract::{ExtractedPaths, NearbyBodies, PathExtractConfig, extract_paths};
pub use ground_truth::{GroundTruth, remove_orphans};
pub use rank::{rank_body_paths, rank_fragment_paths};
pub use threshold::{FragmentSplit, select_by_cumulative_size, select_working_set, split_fragments};
