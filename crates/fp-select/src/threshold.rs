use std::collections::{HashMap, HashSet};

use fp_core::{Body, BodySize};

/// Selects bodies from a size-sorted list until the running total passes
/// `threshold`.
///
/// The total is checked before each entry is added, so the entry that first
/// pushes it past the threshold is still included; the next one is not.
pub fn select_by_cumulative_size(sizes: &[BodySize], threshold: f64) -> HashSet<Body> {
    let mut out = HashSet::with_capacity(sizes.len());
    let mut cum = 0.0;
    for s in sizes {
        if cum > threshold {
            break;
        }
        out.insert(s.body);
        cum += s.size;
    }
    out
}

/// Whole-body working set: union of the big-body and synapse selections.
pub fn select_working_set(
    big: &[BodySize],
    syn: &[BodySize],
    body_threshold: f64,
    syn_threshold: f64,
) -> HashSet<Body> {
    let mut set = select_by_cumulative_size(big, body_threshold);
    set.extend(select_by_cumulative_size(syn, syn_threshold));
    set
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragmentSplit {
    pub working_set: HashSet<Body>,
    /// Synapse bodies past the threshold that are not in the working set,
    /// keyed to their size.
    pub fragments: HashMap<Body, f64>,
}

/// Fragment-mode selection.
///
/// Big bodies are selected as in [`select_working_set`]. Synapse bodies are
/// walked to the end: those seen while the running total is within
/// `syn_threshold` join the working set, and the rest become fragments unless
/// they are already part of it.
pub fn split_fragments(
    big: &[BodySize],
    syn: &[BodySize],
    body_threshold: f64,
    syn_threshold: f64,
) -> FragmentSplit {
    let mut working_set = select_by_cumulative_size(big, body_threshold);
    let mut fragments = HashMap::new();

    let mut cum = 0.0;
    for s in syn {
        if cum > syn_threshold {
            if !working_set.contains(&s.body) {
                fragments.insert(s.body, s.size);
            }
        } else {
            working_set.insert(s.body);
        }
        cum += s.size;
    }

    FragmentSplit {
        working_set,
        fragments,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use fp_core::BodySize;

    use super::{select_by_cumulative_size, select_working_set, split_fragments};

    fn sizes(v: &[(u64, f64)]) -> Vec<BodySize> {
        v.iter().map(|&(b, s)| BodySize::new(b, s)).collect()
    }

    #[test]
    fn boundary_includes_entry_that_crosses_threshold() {
        let list = sizes(&[(1, 100.0), (2, 50.0), (3, 30.0)]);
        let got = select_by_cumulative_size(&list, 120.0);
        assert_eq!(got, HashSet::from([1, 2]));
    }

    #[test]
    fn exact_threshold_keeps_going() {
        let list = sizes(&[(1, 60.0), (2, 60.0), (3, 1.0), (4, 1.0)]);
        let got = select_by_cumulative_size(&list, 120.0);
        assert_eq!(got, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn zero_threshold_still_takes_first() {
        let list = sizes(&[(9, 5.0), (8, 5.0)]);
        assert_eq!(select_by_cumulative_size(&list, 0.0), HashSet::from([9]));
        assert!(select_by_cumulative_size(&[], 10.0).is_empty());
    }

    #[test]
    fn working_set_unions_both_lists() {
        let big = sizes(&[(1, 10.0), (2, 10.0), (3, 10.0)]);
        let syn = sizes(&[(3, 4.0), (7, 4.0), (8, 4.0)]);
        let got = select_working_set(&big, &syn, 5.0, 4.0);
        assert_eq!(got, HashSet::from([1, 3, 7]));
    }

    #[test]
    fn split_partitions_synapse_bodies() {
        let big = sizes(&[(1, 100.0), (2, 100.0)]);
        let syn = sizes(&[(5, 10.0), (6, 10.0), (1, 5.0), (7, 3.0), (8, 2.0)]);
        let split = split_fragments(&big, &syn, 50.0, 5.0);

        assert_eq!(split.working_set, HashSet::from([1, 5]));
        assert_eq!(split.fragments.len(), 3);
        assert_eq!(split.fragments.get(&6), Some(&10.0));
        assert_eq!(split.fragments.get(&7), Some(&3.0));
        assert_eq!(split.fragments.get(&8), Some(&2.0));
        assert!(!split.fragments.contains_key(&1));
    }
}
