//! Umbrella crate for the `focused-proofreading` workspace.
//!
//! Re-exports input types and loaders (`fp-core`), working-set selection,
//! ground-truth mapping and path ranking (`fp-select`), and the merge
//! simulators (`fp-merge`).

pub use fp_core::*;
pub use fp_merge::*;
pub use fp_select::*;
