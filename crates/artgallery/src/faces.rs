//! Diagonal faces of a triangulated polygon.
//!
//! Each diagonal of the triangulation borders exactly two triangles; the union
//! of their vertices is a quad face. Triangles are recovered from adjacency
//! alone: the apexes of the triangles on edge `u-v` are the common neighbors
//! of `u` and `v` (outerplanar triangulations have no separating triangles).
//! Boundary edges have one apex and yield no face.

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, NodeId};

/// Two triangles sharing `diagonal`, with apexes on either side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    pub diagonal: Edge,
    pub apexes: [NodeId; 2],
}

impl Face {
    /// The four distinct vertices, sorted.
    pub fn vertices(&self) -> [NodeId; 4] {
        let mut v = [
            self.diagonal.lo(),
            self.diagonal.hi(),
            self.apexes[0],
            self.apexes[1],
        ];
        v.sort();
        v
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.diagonal.contains(id) || self.apexes.contains(&id)
    }

    /// The two triangles, diagonal endpoints first.
    pub fn triangles(&self) -> [[NodeId; 3]; 2] {
        let (a, b) = (self.diagonal.lo(), self.diagonal.hi());
        [[a, b, self.apexes[0]], [a, b, self.apexes[1]]]
    }
}

/// Enumerate one face per diagonal, in `(lo, hi)` edge order.
///
/// Fails with `FaceArity` on an edge bordering other than one or two triangles,
/// and with `FaceCount` unless exactly `n - 3` faces come out.
pub fn extract_faces(graph: &Graph) -> Result<Vec<Face>> {
    let mut faces = Vec::new();
    for edge in graph.edges() {
        let apexes = graph.common_neighbors(edge.lo(), edge.hi());
        match apexes[..] {
            [_] => {}
            [w1, w2] => faces.push(Face {
                diagonal: edge,
                apexes: [w1, w2],
            }),
            _ => {
                return Err(Error::FaceArity {
                    edge,
                    arity: apexes.len(),
                })
            }
        }
    }
    let expected = graph.len().saturating_sub(3);
    if faces.len() != expected {
        return Err(Error::FaceCount {
            expected,
            got: faces.len(),
        });
    }
    tracing::debug!(faces = faces.len(), "faces extracted");
    Ok(faces)
}
