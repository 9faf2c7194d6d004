use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::Body;

/// Scored potential merge between two bodies, `a < b` by upstream convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(Body, Body, f64)", into = "(Body, Body, f64)")]
pub struct CandidatePath {
    pub a: Body,
    pub b: Body,
    pub confidence: f64,
}

impl CandidatePath {
    pub fn new(a: Body, b: Body, confidence: f64) -> Self {
        Self { a, b, confidence }
    }

    pub fn ranked(&self) -> RankedPath {
        RankedPath {
            confidence: self.confidence,
            a: self.a,
            b: self.b,
        }
    }
}

impl From<(Body, Body, f64)> for CandidatePath {
    fn from((a, b, confidence): (Body, Body, f64)) -> Self {
        Self { a, b, confidence }
    }
}

impl From<CandidatePath> for (Body, Body, f64) {
    fn from(p: CandidatePath) -> Self {
        (p.a, p.b, p.confidence)
    }
}

/// A path in simulation order. Ordered by `(confidence, a, b)`.
#[derive(Debug, Clone, Copy)]
pub struct RankedPath {
    pub confidence: f64,
    pub a: Body,
    pub b: Body,
}

impl RankedPath {
    pub fn new(confidence: f64, a: Body, b: Body) -> Self {
        Self { confidence, a, b }
    }
}

impl PartialEq for RankedPath {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedPath {}

impl PartialOrd for RankedPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.confidence
            .total_cmp(&other.confidence)
            .then(self.a.cmp(&other.a))
            .then(self.b.cmp(&other.b))
    }
}

#[cfg(test)]
mod tests {
    use super::{CandidatePath, RankedPath};

    #[test]
    fn candidate_parses_from_triple() {
        let v: Vec<CandidatePath> =
            serde_json::from_str("[[1, 2, 0.75], [3, 8, 1]]").expect("valid json");
        assert_eq!(v[0], CandidatePath::new(1, 2, 0.75));
        assert_eq!(v[1].ranked(), RankedPath::new(1.0, 3, 8));
    }

    #[test]
    fn ranked_ties_fall_back_to_body_ids() {
        let mut v = vec![
            RankedPath::new(0.5, 4, 9),
            RankedPath::new(0.5, 2, 7),
            RankedPath::new(0.9, 5, 6),
            RankedPath::new(0.5, 2, 3),
        ];
        v.sort_by(|x, y| y.cmp(x));

        let order: Vec<(u64, u64)> = v.iter().map(|p| (p.a, p.b)).collect();
        assert_eq!(order, vec![(5, 6), (4, 9), (2, 7), (2, 3)]);
    }
}
