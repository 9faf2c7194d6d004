use std::collections::{HashMap, HashSet};

use fp_core::{Body, SegToGt};
use tracing::{info, warn};

/// Ground-truth oracle restricted to the bodies under evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundTruth {
    mapping: HashMap<Body, Body>,
    gt_bodies: HashSet<Body>,
}

impl GroundTruth {
    /// Maps every working-set body that appears in `adjacency`. A later entry
    /// for the same segment replaces an earlier one.
    pub fn for_bodies(working_set: &HashSet<Body>, adjacency: &[SegToGt]) -> Self {
        let mut gt = Self {
            mapping: HashMap::with_capacity(working_set.len()),
            gt_bodies: HashSet::new(),
        };
        for e in adjacency {
            if working_set.contains(&e.seg) {
                gt.gt_bodies.insert(e.gt);
                gt.mapping.insert(e.seg, e.gt);
            }
        }
        gt
    }

    /// Like [`GroundTruth::for_bodies`], but fragment bodies are mapped too.
    /// Their targets do not count as reachable ground-truth bodies.
    pub fn for_fragments(
        working_set: &HashSet<Body>,
        fragments: &HashMap<Body, f64>,
        adjacency: &[SegToGt],
    ) -> Self {
        let mut gt = Self {
            mapping: HashMap::with_capacity(working_set.len() + fragments.len()),
            gt_bodies: HashSet::new(),
        };
        for e in adjacency {
            if working_set.contains(&e.seg) {
                gt.gt_bodies.insert(e.gt);
                gt.mapping.insert(e.seg, e.gt);
            }
            if fragments.contains_key(&e.seg) {
                gt.mapping.insert(e.seg, e.gt);
            }
        }
        gt
    }

    pub fn get(&self, body: Body) -> Option<Body> {
        self.mapping.get(&body).copied()
    }

    /// Whether `gt` was reached from a working-set body.
    pub fn is_reachable(&self, gt: Body) -> bool {
        self.gt_bodies.contains(&gt)
    }

    pub fn num_gt_bodies(&self) -> usize {
        self.gt_bodies.len()
    }

    pub fn num_mapped(&self) -> usize {
        self.mapping.len()
    }

    /// Bodies without a mapping, in ascending order.
    pub fn orphans<'a>(&self, bodies: impl IntoIterator<Item = &'a Body>) -> Vec<Body> {
        let mut out: Vec<Body> = bodies
            .into_iter()
            .copied()
            .filter(|b| !self.mapping.contains_key(b))
            .collect();
        out.sort_unstable();
        out
    }
}

/// Drops unmapped bodies from the working set and returns them.
pub fn remove_orphans(working_set: &mut HashSet<Body>, gt: &GroundTruth) -> Vec<Body> {
    let orphans = gt.orphans(working_set.iter());
    for body in &orphans {
        warn!(body, "Orphan");
        working_set.remove(body);
    }
    info!(
        seg_bodies = working_set.len(),
        gt_bodies = gt.num_gt_bodies(),
        orphans = orphans.len(),
        "ground truth mapped"
    );
    orphans
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use fp_core::SegToGt;

    use super::{GroundTruth, remove_orphans};

    fn adjacency(v: &[(u64, u64)]) -> Vec<SegToGt> {
        v.iter().map(|&(s, g)| SegToGt::new(s, g)).collect()
    }

    #[test]
    fn restricts_to_working_set() {
        let ws = HashSet::from([1, 2, 3]);
        let adj = adjacency(&[(1, 10), (2, 10), (3, 20), (4, 30)]);
        let gt = GroundTruth::for_bodies(&ws, &adj);

        assert_eq!(gt.get(1), Some(10));
        assert_eq!(gt.get(3), Some(20));
        assert_eq!(gt.get(4), None);
        assert_eq!(gt.num_gt_bodies(), 2);
        assert!(!gt.is_reachable(30));
    }

    #[test]
    fn fragments_are_mapped_but_not_reachable() {
        let ws = HashSet::from([1]);
        let frags = HashMap::from([(5, 2.0), (6, 1.0)]);
        let adj = adjacency(&[(1, 10), (5, 10), (6, 77)]);
        let gt = GroundTruth::for_fragments(&ws, &frags, &adj);

        assert_eq!(gt.get(5), Some(10));
        assert_eq!(gt.get(6), Some(77));
        assert!(gt.is_reachable(10));
        assert!(!gt.is_reachable(77));
        assert_eq!(gt.num_gt_bodies(), 1);
        assert_eq!(gt.num_mapped(), 3);
    }

    #[test]
    fn orphans_are_removed_from_working_set() {
        let mut ws = HashSet::from([1, 2, 3, 4]);
        let adj = adjacency(&[(1, 10), (3, 10)]);
        let gt = GroundTruth::for_bodies(&ws, &adj);

        let removed = remove_orphans(&mut ws, &gt);
        assert_eq!(removed, vec![2, 4]);
        assert_eq!(ws, HashSet::from([1, 3]));
    }
}
