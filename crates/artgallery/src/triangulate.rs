//! Ear-clipping triangulation into a primal graph.
//!
//! The emitted graph has one node per input vertex (same order) joined by the
//! boundary cycle, plus one diagonal per clipped ear. The polygon itself is a
//! working copy that loses one vertex per ear; graph ids are unaffected.
//!
//! Precondition: a simple polygon in counter-clockwise order. Anything else
//! eventually fails the ear scan and reports `Error::NoEar`.

use crate::error::{Error, Result};
use crate::geometry::{orientation, point_in_triangle, Orientation};
use crate::graph::{Edge, Graph, NodeId};
use crate::polygon::Polygon;

/// One clipped ear: scan position, removed vertex, and the inserted diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ear {
    pub pos: usize,
    pub removed: NodeId,
    pub diagonal: Edge,
}

/// Finished triangulation.
#[derive(Clone, Debug)]
pub struct Triangulation {
    pub graph: Graph,
    /// Diagonals in insertion order.
    pub diagonals: Vec<Edge>,
    /// Clipped ears followed by the last remaining triangle, each counter-clockwise.
    pub triangles: Vec<[NodeId; 3]>,
    /// The three-point ring left over after the last ear.
    pub remaining: Polygon,
}

/// Stepwise ear clipper; `clip_ear` advances by one ear.
#[derive(Clone, Debug)]
pub struct Triangulator {
    polygon: Polygon,
    ring: Vec<NodeId>, // graph id of each remaining polygon point
    graph: Graph,
    diagonals: Vec<Edge>,
    triangles: Vec<[NodeId; 3]>,
}

impl Triangulator {
    /// Seed the graph with the polygon's vertices and boundary cycle.
    pub fn new(polygon: Polygon) -> Result<Self> {
        let n = polygon.len();
        if n < 3 {
            return Err(Error::TooFewPoints { got: n });
        }
        let mut graph = Graph::with_capacity(n);
        let ring: Vec<NodeId> = polygon.points().iter().map(|&p| graph.add_node(p)).collect();
        for i in 0..n {
            graph.add_edge(ring[i], ring[(i + 1) % n])?;
        }
        Ok(Self {
            polygon,
            ring,
            graph,
            diagonals: Vec::with_capacity(n - 3),
            triangles: Vec::with_capacity(n - 2),
        })
    }

    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.polygon.len() <= 3
    }

    /// `pos, pos+1, pos+2` (mod length) turn counter-clockwise and no other
    /// remaining point lies inside their triangle.
    pub fn is_ear(&self, pos: usize) -> bool {
        let k = self.polygon.len();
        let (a, b, c) = (pos % k, (pos + 1) % k, (pos + 2) % k);
        let (pa, pb, pc) = (self.polygon.at(a), self.polygon.at(b), self.polygon.at(c));
        if orientation(pa, pb, pc) != Orientation::CounterClockwise {
            return false;
        }
        !self
            .polygon
            .points()
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != a && j != b && j != c)
            .any(|(_, &p)| point_in_triangle(pa, pb, pc, p))
    }

    /// Clip the first ear found scanning from position 0.
    ///
    /// Returns `Ok(None)` once three points remain.
    pub fn clip_ear(&mut self) -> Result<Option<Ear>> {
        if self.is_done() {
            return Ok(None);
        }
        let k = self.polygon.len();
        let pos = (0..k)
            .find(|&pos| self.is_ear(pos))
            .ok_or(Error::NoEar { remaining: k })?;
        let (a, b, c) = (self.ring[pos], self.ring[(pos + 1) % k], self.ring[(pos + 2) % k]);
        self.graph.add_edge(a, c)?;
        let diagonal = Edge::new(a, c);
        self.diagonals.push(diagonal);
        self.triangles.push([a, b, c]);
        self.polygon.remove_wrapping(pos + 1);
        self.ring.remove((pos + 1) % k);
        tracing::trace!(pos, removed = b.0, lo = diagonal.lo().0, hi = diagonal.hi().0, "ear");
        Ok(Some(Ear {
            pos,
            removed: b,
            diagonal,
        }))
    }

    /// Clip every remaining ear and hand out the result.
    pub fn run(mut self) -> Result<Triangulation> {
        while self.clip_ear()?.is_some() {}
        if let [a, b, c] = self.ring[..] {
            self.triangles.push([a, b, c]);
        }
        tracing::debug!(
            vertices = self.graph.len(),
            diagonals = self.diagonals.len(),
            "triangulated"
        );
        Ok(Triangulation {
            graph: self.graph,
            diagonals: self.diagonals,
            triangles: self.triangles,
            remaining: self.polygon,
        })
    }
}

/// Triangulate `polygon` and return the primal graph.
pub fn triangulate(polygon: Polygon) -> Result<Graph> {
    Ok(Triangulator::new(polygon)?.run()?.graph)
}
