//! Union-Find (disjoint set) over arbitrary hashable keys.
//!
//! Elements live in an arena indexed by insertion order, which keeps
//! `groups()` deterministic regardless of hash iteration order.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    elements: Vec<T>,
    index: HashMap<T, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl<T: Hash + Eq + Clone> UnionFind<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Add `x` as a singleton set. No-op if already present.
    pub fn make_set(&mut self, x: T) {
        self.slot(x);
    }

    fn slot(&mut self, x: T) -> usize {
        if let Some(&i) = self.index.get(&x) {
            return i;
        }
        let i = self.elements.len();
        self.elements.push(x.clone());
        self.index.insert(x, i);
        self.parent.push(i);
        self.rank.push(0);
        i
    }

    fn root(&mut self, mut i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        while self.parent[i] != root {
            let next = self.parent[i];
            self.parent[i] = root;
            i = next;
        }
        root
    }

    /// Representative of the set containing `x`, inserting `x` if unseen
    pub fn find(&mut self, x: &T) -> T {
        let i = self.slot(x.clone());
        let root = self.root(i);
        self.elements[root].clone()
    }

    pub fn union(&mut self, a: &T, b: &T) {
        let ia = self.slot(a.clone());
        let ib = self.slot(b.clone());
        let ra = self.root(ia);
        let rb = self.root(ib);
        if ra == rb {
            return;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }

    pub fn connected(&mut self, a: &T, b: &T) -> bool {
        match (self.index.get(a).copied(), self.index.get(b).copied()) {
            (Some(ia), Some(ib)) => self.root(ia) == self.root(ib),
            _ => false,
        }
    }

    /// Members of every set.
    ///
    /// Sets are ordered by their earliest-inserted member; members keep
    /// insertion order.
    pub fn groups(&mut self) -> Vec<Vec<T>> {
        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<T>> = Vec::new();

        for i in 0..self.elements.len() {
            let root = self.root(i);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(self.elements[i].clone());
        }

        groups
    }
}

impl<T: Hash + Eq + Clone> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}
