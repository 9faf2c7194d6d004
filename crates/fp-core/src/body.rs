use serde::{Deserialize, Serialize};

pub type Body = u64;

/// One entry of a size-sorted body list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(Body, f64)", into = "(Body, f64)")]
pub struct BodySize {
    pub body: Body,
    pub size: f64,
}

impl BodySize {
    pub fn new(body: Body, size: f64) -> Self {
        Self { body, size }
    }
}

impl From<(Body, f64)> for BodySize {
    fn from((body, size): (Body, f64)) -> Self {
        Self { body, size }
    }
}

impl From<BodySize> for (Body, f64) {
    fn from(v: BodySize) -> Self {
        (v.body, v.size)
    }
}

/// Segmentation body to ground-truth body correspondence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Body, Body)", into = "(Body, Body)")]
pub struct SegToGt {
    pub seg: Body,
    pub gt: Body,
}

impl SegToGt {
    pub fn new(seg: Body, gt: Body) -> Self {
        Self { seg, gt }
    }
}

impl From<(Body, Body)> for SegToGt {
    fn from((seg, gt): (Body, Body)) -> Self {
        Self { seg, gt }
    }
}

impl From<SegToGt> for (Body, Body) {
    fn from(v: SegToGt) -> Self {
        (v.seg, v.gt)
    }
}

#[cfg(test)]
mod tests {
    use super::{BodySize, SegToGt};

    #[test]
    fn body_size_accepts_integer_and_float_sizes() {
        let v: Vec<BodySize> = serde_json::from_str("[[7, 120], [9, 3.5]]").expect("valid json");
        assert_eq!(v, vec![BodySize::new(7, 120.0), BodySize::new(9, 3.5)]);
    }

    #[test]
    fn seg_to_gt_serializes_as_pair() {
        let s = serde_json::to_string(&SegToGt::new(4, 11)).expect("serializable");
        assert_eq!(s, "[4,11]");
    }
}
