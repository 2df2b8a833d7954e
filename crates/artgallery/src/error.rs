//! Error type shared by every pipeline stage.

use thiserror::Error;

use crate::graph::{Edge, NodeId};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fatal pipeline conditions. Each variant names the stage and the offending ids.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("triangulate: polygon needs at least 3 points, got {got}")]
    TooFewPoints { got: usize },

    #[error("triangulate: no ear found in a full scan with {remaining} points remaining")]
    NoEar { remaining: usize },

    #[error("faces: expected {expected} faces, extracted {got}")]
    FaceCount { expected: usize, got: usize },

    #[error("faces: edge {edge:?} borders {arity} triangles, expected 1 or 2")]
    FaceArity { edge: Edge, arity: usize },

    /// Structural guard; a three-vertex triangle never empties its palette.
    #[error("color: candidate colors exhausted at face {face} for vertex {vertex}")]
    ColorExhausted { face: usize, vertex: NodeId },

    #[error("color: triangle {triangle:?} of face {face} repeats a color")]
    ColorConflict { face: usize, triangle: [NodeId; 3] },

    #[error("color: dual graph does not reach vertices {vertices:?}")]
    Uncolored { vertices: Vec<NodeId> },

    #[error("graph: unknown node {id}")]
    UnknownNode { id: NodeId },
}
