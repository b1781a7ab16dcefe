//! The paths set: a map from "next token position" to the set of path
//! tails currently sitting at that position (spec §3). Grouping by
//! position is what lets `Sequence`/`Alternative`/etc. process several
//! live derivations, possibly sitting at different positions because an
//! earlier `Optional`/`Alternative` let some of them run ahead of
//! others, uniformly in one pass.
use crate::graph::NodeId;
use std::collections::{BTreeMap, BTreeSet};

/// `BTreeMap`/`BTreeSet` rather than the hash-based equivalents: the
/// spec calls out deterministic results as a testable property (spec
/// §8), and iteration order over a paths set leaks into furthest-failure
/// reporting and memoization keys, so it needs to be stable across runs
/// without relying on incidental hasher behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathsSet(BTreeMap<usize, BTreeSet<NodeId>>);

impl PathsSet {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// A paths set with a single tail at `position`.
    pub fn singleton(position: usize, tail: NodeId) -> Self {
        let mut set = BTreeMap::new();
        set.insert(position, BTreeSet::from([tail]));
        Self(set)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, position: usize, tail: NodeId) {
        self.0.entry(position).or_default().insert(tail);
    }

    /// Union `other` into `self`, merging tail sets at shared positions.
    pub fn merge(&mut self, other: PathsSet) {
        for (position, tails) in other.0 {
            self.0.entry(position).or_default().extend(tails);
        }
    }

    /// The set of token positions occupied by at least one live path.
    /// Used by the `Repeat` combinator to detect a non-advancing
    /// iteration (spec §9 open question on termination).
    pub fn positions(&self) -> BTreeSet<usize> {
        self.0.keys().copied().collect()
    }

    pub fn tails_at(&self, position: usize) -> Option<&BTreeSet<NodeId>> {
        self.0.get(&position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<NodeId>)> {
        self.0.iter().map(|(position, tails)| (*position, tails))
    }

    pub fn entries(&self) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        self.0
            .iter()
            .flat_map(|(position, tails)| tails.iter().map(move |tail| (*position, *tail)))
    }

    /// Total number of (position, tail) pairs, the quantity the
    /// ambiguity-overflow ceiling is measured against (spec §5).
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    pub fn max_tails_at_any_position(&self) -> usize {
        self.0.values().map(BTreeSet::len).max().unwrap_or(0)
    }
}
