//! Candidate path extraction against an external region-adjacency graph.
//!
//! The graph itself (construction, affinities, the hop-bounded search) lives
//! outside this workspace. [`NearbyBodies`] is the seam it plugs into.

use std::collections::HashSet;

use fp_core::{Body, CandidatePath};
use tracing::{debug, info};

/// Bounded nearby-body search over a region-adjacency graph.
pub trait NearbyBodies {
    /// Bodies reachable from `body` within `max_hops` whose path confidence is
    /// at least `min_confidence`, paired with that confidence. `None` when the
    /// search finds nothing within bounds.
    fn find_close_bodies(
        &self,
        body: Body,
        max_hops: usize,
        min_confidence: f64,
    ) -> Option<Vec<(Body, f64)>>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathExtractConfig {
    pub max_hops: usize,
    pub min_confidence: f64,
}

impl Default for PathExtractConfig {
    fn default() -> Self {
        Self {
            max_hops: 3,
            min_confidence: 0.1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedPaths {
    pub paths: Vec<CandidatePath>,
    /// Bodies for which the search returned nothing.
    pub unmatched: Vec<Body>,
}

/// Queries every body and keeps each undirected pair once (`a < b`), with
/// both endpoints drawn from `bodies`.
pub fn extract_paths<G: NearbyBodies + ?Sized>(
    graph: &G,
    bodies: &HashSet<Body>,
    cfg: &PathExtractConfig,
) -> ExtractedPaths {
    let mut order: Vec<Body> = bodies.iter().copied().collect();
    order.sort_unstable();

    let mut out = ExtractedPaths::default();
    for (i, &body) in order.iter().enumerate() {
        let Some(near) = graph.find_close_bodies(body, cfg.max_hops, cfg.min_confidence) else {
            out.unmatched.push(body);
            continue;
        };

        debug!(i, total = order.len(), body, found = near.len(), "searched");
        for (other, confidence) in near {
            if body < other && bodies.contains(&other) {
                out.paths.push(CandidatePath::new(body, other, confidence));
            }
        }
    }

    info!(
        paths = out.paths.len(),
        unmatched = out.unmatched.len(),
        "extracted paths"
    );
    out
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use fp_core::{Body, CandidatePath};

    use super::{NearbyBodies, PathExtractConfig, extract_paths};

    struct Table(HashMap<Body, Vec<(Body, f64)>>);

    impl NearbyBodies for Table {
        fn find_close_bodies(
            &self,
            body: Body,
            _max_hops: usize,
            min_confidence: f64,
        ) -> Option<Vec<(Body, f64)>> {
            let near: Vec<(Body, f64)> = self
                .0
                .get(&body)?
                .iter()
                .copied()
                .filter(|&(_, c)| c >= min_confidence)
                .collect();
            if near.is_empty() { None } else { Some(near) }
        }
    }

    #[test]
    fn keeps_each_pair_once_inside_the_set() {
        let graph = Table(HashMap::from([
            (1, vec![(2, 0.9), (5, 0.7)]),
            (2, vec![(1, 0.9), (3, 0.4)]),
            (3, vec![(2, 0.4)]),
        ]));
        let bodies = HashSet::from([1, 2, 3, 4]);

        let got = extract_paths(&graph, &bodies, &PathExtractConfig::default());
        assert_eq!(
            got.paths,
            vec![CandidatePath::new(1, 2, 0.9), CandidatePath::new(2, 3, 0.4)]
        );
        assert_eq!(got.unmatched, vec![4]);
    }

    #[test]
    fn confidence_floor_is_forwarded() {
        let graph = Table(HashMap::from([(1, vec![(2, 0.05)]), (2, vec![(1, 0.05)])]));
        let bodies = HashSet::from([1, 2]);

        let got = extract_paths(&graph, &bodies, &PathExtractConfig::default());
        assert!(got.paths.is_empty());
        assert_eq!(got.unmatched, vec![1, 2]);

        let cfg = PathExtractConfig {
            min_confidence: 0.0,
            ..PathExtractConfig::default()
        };
        let got = extract_paths(&graph, &bodies, &cfg);
        assert_eq!(got.paths, vec![CandidatePath::new(1, 2, 0.05)]);
    }
}
