use std::collections::HashMap;

use fp_core::Body;

/// Disjoint-set partition over a fixed body set, with merge history.
///
/// Internally this is union-by-size with path compression. Each root also
/// carries a label: the body that callers see as the representative. When
/// class B is absorbed into class A, the merged class keeps A's label no
/// matter which tree root survives.
#[derive(Debug, Clone)]
pub struct Partition {
    index: HashMap<Body, usize>,
    bodies: Vec<Body>,
    parent: Vec<usize>,
    // Label → root slot, for history lookups by representative.
    root_of_label: HashMap<Body, usize>,
    label: Vec<Body>,
    members: Vec<Vec<usize>>,
    classes: usize,
}

impl Partition {
    /// Identity partition: every body is a singleton labelled by itself.
    /// Duplicate ids are collapsed.
    pub fn new(bodies: impl IntoIterator<Item = Body>) -> Self {
        let iter = bodies.into_iter();
        let (lo, _) = iter.size_hint();
        let mut p = Self {
            index: HashMap::with_capacity(lo),
            bodies: Vec::with_capacity(lo),
            parent: Vec::with_capacity(lo),
            root_of_label: HashMap::with_capacity(lo),
            label: Vec::with_capacity(lo),
            members: Vec::with_capacity(lo),
            classes: 0,
        };

        for body in iter {
            if p.index.contains_key(&body) {
                continue;
            }
            let i = p.bodies.len();
            p.index.insert(body, i);
            p.root_of_label.insert(body, i);
            p.bodies.push(body);
            p.parent.push(i);
            p.label.push(body);
            p.members.push(vec![i]);
        }
        p.classes = p.bodies.len();
        p
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of live classes.
    pub fn classes(&self) -> usize {
        self.classes
    }

    pub fn contains(&self, body: Body) -> bool {
        self.index.contains_key(&body)
    }

    /// Current representative of `body`'s class.
    pub fn representative(&mut self, body: Body) -> Option<Body> {
        let i = *self.index.get(&body)?;
        let root = self.find(i);
        Some(self.label[root])
    }

    pub fn same_class(&mut self, a: Body, b: Body) -> bool {
        match (self.index.get(&a).copied(), self.index.get(&b).copied()) {
            (Some(ia), Some(ib)) => self.find(ia) == self.find(ib),
            _ => false,
        }
    }

    /// Folds `b`'s class into `a`'s. Returns the label that disappeared, or
    /// `None` when the two already share a class or either is unknown.
    pub fn absorb(&mut self, a: Body, b: Body) -> Option<Body> {
        let ia = *self.index.get(&a)?;
        let ib = *self.index.get(&b)?;
        let ra = self.find(ia);
        let rb = self.find(ib);
        if ra == rb {
            return None;
        }

        let keep_label = self.label[ra];
        let lost_label = self.label[rb];

        let (big, small) = if self.members[ra].len() >= self.members[rb].len() {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        let moved = std::mem::take(&mut self.members[small]);
        self.members[big].extend(moved);

        self.label[big] = keep_label;
        self.root_of_label.remove(&lost_label);
        self.root_of_label.insert(keep_label, big);
        self.classes -= 1;

        Some(lost_label)
    }

    /// Every original body folded into the class labelled `representative`,
    /// sorted ascending. `None` if `representative` is not a live label.
    pub fn history(&self, representative: Body) -> Option<Vec<Body>> {
        let root = *self.root_of_label.get(&representative)?;
        let mut out: Vec<Body> = self.members[root].iter().map(|&i| self.bodies[i]).collect();
        out.sort_unstable();
        Some(out)
    }

    /// Live representatives, sorted ascending.
    pub fn representatives(&self) -> Vec<Body> {
        let mut out: Vec<Body> = self.root_of_label.keys().copied().collect();
        out.sort_unstable();
        out
    }

    fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut cur = i;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }
}
