//! Guard selection: the least-populated color class.
//!
//! Every triangle carries each color exactly once, so any single class sees
//! every triangle; the smallest class has at most ⌊n/3⌋ vertices.

use crate::color::{Color, ColorMap};
use crate::geometry::Point;
use crate::graph::{Graph, NodeId};

/// Chosen color class and its vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct GuardSet {
    pub color: Color,
    pub vertices: Vec<NodeId>,
    pub points: Vec<Point>,
}

impl GuardSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Pick the color with the fewest vertices (ties go to the smaller color).
pub fn select_guards(graph: &Graph, colors: &ColorMap) -> GuardSet {
    let color = Color::ALL
        .into_iter()
        .min_by_key(|&c| (colors.count(c), c))
        .unwrap_or(Color::One);
    let vertices: Vec<NodeId> = colors
        .iter()
        .filter(|&(id, c)| c == Some(color) && graph.node(id).is_some())
        .map(|(id, _)| id)
        .collect();
    let points = vertices.iter().map(|&id| graph.point(id)).collect();
    tracing::debug!(color = color.value(), guards = vertices.len(), "guards selected");
    GuardSet {
        color,
        vertices,
        points,
    }
}
