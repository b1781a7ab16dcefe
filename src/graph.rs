//! The path graph: a DAG of derivation steps, canonicalized so that two
//! paths converging at the same point share a node instead of being
//! stored as separate copies (spec §3, §4.2.1). This is the crate's
//! analogue of the teacher's `ASTNode` tree, except nodes are shared by
//! construction and a node can have more than one incoming edge: each
//! extra edge records an alternative derivation that happens to reach
//! the same point, which is exactly how ambiguity is preserved instead
//! of being collapsed away.
use crate::grammar::ProductionId;
use std::collections::HashMap;

/// A node identity within one [`PathGraph`]. Opaque outside this module;
/// never compared across two different graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// What kind of derivation step a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The empty path at the start of parsing.
    Root,
    /// A single terminal was consumed, landing at `position`.
    TokenConsumed { position: usize },
    /// A production finished matching `[start, end)`.
    ProductionCompleted {
        production: ProductionId,
        start: usize,
        end: usize,
    },
}

struct NodeRecord {
    kind: NodeKind,
    end_position: usize,
    parents: Vec<NodeId>,
}

/// Arena of path-graph nodes for a single parse. Nodes are interned by
/// `NodeKind` so that merging two converging paths is just reusing the
/// same `NodeId` and appending a parent edge, never a separate pass.
pub struct PathGraph {
    nodes: Vec<NodeRecord>,
    index: HashMap<NodeKind, NodeId>,
}

impl PathGraph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The single root node all paths start from, at token position 0.
    pub fn root(&mut self) -> NodeId {
        self.intern(NodeKind::Root, None, 0)
    }

    /// Record that `parent`'s path consumed a token, landing at
    /// `position` (the index of the token just consumed, plus one, i.e.
    /// the position of the *next* token to consume).
    pub fn token_consumed(&mut self, parent: NodeId, position: usize) -> NodeId {
        self.intern(NodeKind::TokenConsumed { position }, Some(parent), position)
    }

    /// Record that `production` completed over `[start, end)`, with
    /// `parent` being the tail of whichever internal derivation produced
    /// this completion.
    pub fn production_completed(
        &mut self,
        parent: NodeId,
        production: ProductionId,
        start: usize,
        end: usize,
    ) -> NodeId {
        self.intern(
            NodeKind::ProductionCompleted {
                production,
                start,
                end,
            },
            Some(parent),
            end,
        )
    }

    fn intern(&mut self, kind: NodeKind, parent: Option<NodeId>, end_position: usize) -> NodeId {
        if let Some(&id) = self.index.get(&kind) {
            if let Some(parent) = parent {
                let record = &mut self.nodes[id.0];
                if !record.parents.contains(&parent) {
                    record.parents.push(parent);
                }
            }
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeRecord {
            kind,
            end_position,
            parents: parent.into_iter().collect(),
        });
        self.index.insert(kind, id);
        id
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.0].kind
    }

    pub fn end_position(&self, id: NodeId) -> usize {
        self.nodes[id.0].end_position
    }

    /// Every distinct predecessor edge into `id`. More than one entry
    /// means more than one derivation converges here.
    pub fn parents(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].parents
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for PathGraph {
    fn default() -> Self {
        Self::new()
    }
}
