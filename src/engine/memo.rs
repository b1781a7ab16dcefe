//! Production-call memoization, keyed by the production and the exact
//! input paths set it was invoked with (spec §9 "memoization"). This is
//! what guarantees a grammar with shared sub-structure (the same
//! production reached the same way from two different alternatives, or
//! from successive `Repeat` iterations that happen to land on the same
//! paths set) is only ever evaluated once.
use crate::grammar::ProductionId;
use crate::paths::PathsSet;
use std::collections::HashMap;

pub(crate) struct Memo {
    entries: HashMap<(ProductionId, PathsSet), PathsSet>,
}

impl Memo {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, id: ProductionId, input: &PathsSet) -> Option<&PathsSet> {
        self.entries.get(&(id, input.clone()))
    }

    pub fn insert(&mut self, id: ProductionId, input: PathsSet, output: PathsSet) {
        self.entries.insert((id, input), output);
    }
}
