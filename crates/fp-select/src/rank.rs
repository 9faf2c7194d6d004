use std::collections::{HashMap, HashSet};

use fp_core::{Body, CandidatePath, RankedPath};
use tracing::info;

/// Paths with both endpoints in the working set, highest confidence first.
pub fn rank_body_paths(paths: &[CandidatePath], working_set: &HashSet<Body>) -> Vec<RankedPath> {
    let ranked = rank_where(paths, |p| {
        working_set.contains(&p.a) && working_set.contains(&p.b)
    });
    info!(paths = ranked.len(), "ranked body paths");
    ranked
}

/// Paths that touch the working set and a remaining fragment, highest
/// confidence first.
pub fn rank_fragment_paths(
    paths: &[CandidatePath],
    working_set: &HashSet<Body>,
    fragments: &HashMap<Body, f64>,
) -> Vec<RankedPath> {
    let ranked = rank_where(paths, |p| {
        (working_set.contains(&p.a) || working_set.contains(&p.b))
            && (fragments.contains_key(&p.a) || fragments.contains_key(&p.b))
    });
    info!(paths = ranked.len(), "ranked paths to merged bodies");
    ranked
}

fn rank_where(paths: &[CandidatePath], keep: impl Fn(&CandidatePath) -> bool) -> Vec<RankedPath> {
    let mut out: Vec<RankedPath> = paths
        .iter()
        .filter(|p| keep(*p))
        .map(CandidatePath::ranked)
        .collect();
    out.sort_unstable_by(|x, y| y.cmp(x));
    out
}
