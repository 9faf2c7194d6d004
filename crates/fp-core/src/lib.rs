//! Foundational types for focused proofreading evaluation.
//!
//! ## Bodies
//! A [`Body`] is the integer id of a segmentation region. Sizes (voxel or
//! synapse counts) travel alongside ids as `f64` so both integer and
//! fractional inputs are accepted.
//!
//! ## Paths
//! A [`CandidatePath`] is a scored potential merge `(a, b, confidence)` as
//! produced by the graph-search collaborator. Ranking converts it into a
//! [`RankedPath`], whose ordering is the full `(confidence, a, b)` tuple with
//! IEEE total ordering on the confidence.
//!
//! ## Input Files
//! All inputs are JSON arrays of arrays:
//! - size lists: `[[body, size], ...]`, largest first
//! - paths: `[[a, b, confidence], ...]`
//! - ground-truth adjacency: `[[seg, gt], ...]`

mod body;
mod error;
pub mod io;
mod path;

pub use body::{Body, BodySize, SegToGt};
pub use error::{Error, Result};
pub use path::{CandidatePath, RankedPath};
