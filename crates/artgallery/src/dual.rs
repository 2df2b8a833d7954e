//! Dual graph over diagonal faces.
//!
//! One dual node per face, placed at the centroid of the face's four points.
//! Two faces are adjacent when both contain the endpoints of a common primal
//! edge; an edge inside a single face (polygon boundary) adds nothing.

use crate::error::{Error, Result};
use crate::faces::Face;
use crate::geometry::Point;
use crate::graph::{Graph, NodeId};

/// Dual node id (position in `Dual::graph`).
pub type DualId = NodeId;

/// Dual graph plus the face behind each dual node.
#[derive(Clone, Debug, Default)]
pub struct Dual {
    pub graph: Graph,
    /// Indexed by `DualId`.
    pub dual_to_primal: Vec<Face>,
}

impl Dual {
    #[inline]
    pub fn face(&self, id: DualId) -> Option<&Face> {
        self.dual_to_primal.get(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}

/// Build the dual of `faces` over the primal triangulation `graph`.
pub fn build_dual(graph: &Graph, faces: &[Face]) -> Result<Dual> {
    let mut dual = Graph::with_capacity(faces.len());
    for face in faces {
        let mut sum = Point::zeros();
        for id in face.vertices() {
            sum += graph.node(id).ok_or(Error::UnknownNode { id })?.point;
        }
        dual.add_node(sum / 4.0);
    }
    for edge in graph.edges() {
        let sharing: Vec<DualId> = faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.contains(edge.lo()) && f.contains(edge.hi()))
            .map(|(i, _)| NodeId(i))
            .collect();
        for (k, &a) in sharing.iter().enumerate() {
            for &b in &sharing[k + 1..] {
                dual.add_edge(a, b)?;
            }
        }
    }
    tracing::debug!(
        nodes = dual.len(),
        edges = dual.edges().len(),
        "dual built"
    );
    Ok(Dual {
        graph: dual,
        dual_to_primal: faces.to_vec(),
    })
}
