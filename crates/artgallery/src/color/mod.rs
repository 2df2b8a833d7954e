//! Depth-first 3-coloring of the primal vertices, driven by the dual graph.
//!
//! Traversal
//! - Explicit stack, preorder identical to the recursive formulation: a dual
//!   node is colored when popped, and its unvisited neighbors are pushed in
//!   reverse insertion order so the first neighbor is visited next.
//! - At each face the triangle with more colored vertices goes first. Per
//!   triangle, colors already present are removed from {1,2,3} and the
//!   uncolored vertices take the smallest remaining color in turn.
//!
//! Every face after the start face is entered through a shared primal edge, so
//! each triangle is colored with at least two of its vertices fixed, which
//! keeps every triangle proper. Vertices the traversal never reaches stay
//! uncolored; `ColorMap::ensure_complete` reports them.

use std::fmt;

use crate::dual::{Dual, DualId};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::One, Color::Two, Color::Three];

    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Candidate colors left for one triangle.
#[derive(Clone, Copy, Debug)]
struct Palette(u8);

impl Palette {
    fn full() -> Self {
        Palette(0b111)
    }
    fn remove(&mut self, c: Color) {
        self.0 &= !(1 << (c.value() - 1));
    }
    /// Take the smallest remaining color.
    fn pop(&mut self) -> Option<Color> {
        let c = Color::ALL.into_iter().find(|c| self.0 & (1 << (c.value() - 1)) != 0)?;
        self.remove(c);
        Some(c)
    }
}

/// Color per primal vertex; `None` until assigned. Each vertex is assigned once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorMap {
    colors: Vec<Option<Color>>,
}

impl ColorMap {
    pub fn uncolored(n: usize) -> Self {
        Self {
            colors: vec![None; n],
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<Color> {
        self.colors.get(id.0).copied().flatten()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<Color>] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Option<Color>)> + '_ {
        self.colors.iter().enumerate().map(|(i, &c)| (NodeId(i), c))
    }

    pub fn count(&self, color: Color) -> usize {
        self.colors.iter().filter(|&&c| c == Some(color)).count()
    }

    /// Vertices still without a color.
    pub fn missing(&self) -> Vec<NodeId> {
        self.iter().filter(|(_, c)| c.is_none()).map(|(id, _)| id).collect()
    }

    /// `Err(Uncolored)` listing every vertex the traversal did not reach.
    pub fn ensure_complete(&self) -> Result<()> {
        let vertices = self.missing();
        if vertices.is_empty() {
            Ok(())
        } else {
            Err(Error::Uncolored { vertices })
        }
    }

    /// Color `id` unless it already has a color. Returns whether it was assigned.
    pub fn assign(&mut self, id: NodeId, color: Color) -> bool {
        match self.colors.get_mut(id.0) {
            Some(slot) if slot.is_none() => {
                *slot = Some(color);
                true
            }
            _ => false,
        }
    }
}

/// Colorer configuration.
#[derive(Clone, Copy, Debug)]
pub struct ColorCfg {
    /// Dual node the traversal starts from.
    pub start: DualId,
}

impl Default for ColorCfg {
    fn default() -> Self {
        Self { start: NodeId(0) }
    }
}

/// Color `primal` from dual node 0.
pub fn color(primal: &Graph, dual: &Dual) -> Result<ColorMap> {
    color_with(primal, dual, ColorCfg::default(), |_, _, _| {})
}

/// Color with an explicit config; `on_assign` sees every assignment as it happens.
///
/// An empty dual leaves every vertex uncolored.
pub fn color_with<F>(
    primal: &Graph,
    dual: &Dual,
    cfg: ColorCfg,
    mut on_assign: F,
) -> Result<ColorMap>
where
    F: FnMut(NodeId, Color, &ColorMap),
{
    let mut colors = ColorMap::uncolored(primal.len());
    if dual.is_empty() {
        tracing::warn!(vertices = primal.len(), "empty dual graph, nothing colored");
        return Ok(colors);
    }
    if dual.face(cfg.start).is_none() {
        return Err(Error::UnknownNode { id: cfg.start });
    }
    let mut visited = vec![false; dual.len()];
    let mut stack: Vec<DualId> = vec![cfg.start];
    while let Some(d) = stack.pop() {
        if visited[d.0] {
            continue;
        }
        visited[d.0] = true;
        let face = dual.face(d).ok_or(Error::UnknownNode { id: d })?;
        let mut triangles = face.triangles();
        triangles.sort_by_key(|t| {
            std::cmp::Reverse(t.iter().filter(|&&v| colors.get(v).is_some()).count())
        });
        for tri in triangles {
            for &v in &tri {
                if primal.node(v).is_none() {
                    return Err(Error::UnknownNode { id: v });
                }
            }
            let mut palette = Palette::full();
            for &v in &tri {
                if let Some(c) = colors.get(v) {
                    palette.remove(c);
                }
            }
            for &v in &tri {
                if colors.get(v).is_none() {
                    // Structural guard: each colored vertex of the triangle
                    // removes at most one color, so three vertices never empty
                    // the palette.
                    let c = palette
                        .pop()
                        .ok_or(Error::ColorExhausted { face: d.0, vertex: v })?;
                    let fresh = colors.assign(v, c);
                    debug_assert!(fresh);
                    tracing::trace!(face = d.0, vertex = v.0, color = c.value(), "colored");
                    on_assign(v, c, &colors);
                }
            }
            let [a, b, c] = tri.map(|v| colors.get(v));
            if a == b || b == c || a == c {
                return Err(Error::ColorConflict {
                    face: d.0,
                    triangle: tri,
                });
            }
        }
        for &next in dual.graph.neighbors(d).iter().rev() {
            if !visited[next.0] {
                stack.push(next);
            }
        }
    }
    let reached = visited.iter().filter(|&&v| v).count();
    tracing::debug!(faces = reached, missing = colors.missing().len(), "colored");
    Ok(colors)
}
