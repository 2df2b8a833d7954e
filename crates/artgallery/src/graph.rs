//! Insertion-ordered planar graph used for both the primal triangulation and its dual.
//!
//! Node ids are positions in the node list: assigned on insertion, never reused,
//! never removed. Neighbor lists keep insertion order and may hold duplicates;
//! `edges()` is where multi-edges collapse into unordered pairs.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Stable node identifier (array position).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unordered node pair, stored with the smaller id first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(NodeId, NodeId);

impl Edge {
    #[inline]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }
    #[inline]
    pub fn lo(&self) -> NodeId {
        self.0
    }
    #[inline]
    pub fn hi(&self) -> NodeId {
        self.1
    }
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.0 == id || self.1 == id
    }
}

/// One node: its point payload and ordered neighbor ids.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub point: Point,
    pub neighbors: Vec<NodeId>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
        }
    }

    /// Append a node and return its id.
    pub fn add_node(&mut self, point: Point) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            point,
            neighbors: Vec::new(),
        });
        id
    }

    /// Record `a-b` in both neighbor lists. Duplicates are kept.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        for id in [a, b] {
            if id.0 >= self.nodes.len() {
                return Err(Error::UnknownNode { id });
            }
        }
        self.nodes[a.0].neighbors.push(b);
        self.nodes[b.0].neighbors.push(a);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Point payload of `id`. Panics on ids not issued by this graph.
    #[inline]
    pub fn point(&self, id: NodeId) -> Point {
        self.nodes[id.0].point
    }

    /// Neighbor list of `id` in insertion order. Panics on ids not issued by this graph.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].neighbors
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.node(a).is_some_and(|n| n.neighbors.contains(&b))
    }

    /// Deduplicated unordered edges, sorted by `(lo, hi)`.
    pub fn edges(&self) -> Vec<Edge> {
        let set: BTreeSet<Edge> = self
            .nodes()
            .flat_map(|(id, n)| n.neighbors.iter().map(move |&m| Edge::new(id, m)))
            .collect();
        set.into_iter().collect()
    }

    /// Nodes adjacent to both `a` and `b` (excluding the two themselves), sorted.
    pub fn common_neighbors(&self, a: NodeId, b: NodeId) -> Vec<NodeId> {
        let na: BTreeSet<NodeId> = self.neighbors(a).iter().copied().collect();
        let nb: BTreeSet<NodeId> = self.neighbors(b).iter().copied().collect();
        na.intersection(&nb)
            .copied()
            .filter(|&w| w != a && w != b)
            .collect()
    }
}
