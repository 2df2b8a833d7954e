//! Art-gallery guard placement for simple polygons.
//!
//! Pipeline
//! - `triangulate`: ear clipping into a primal graph (boundary cycle + diagonals).
//! - `faces`: one quad face per diagonal (the two triangles sharing it).
//! - `dual`: graph over those faces, adjacent when they share a primal edge.
//! - `color`: depth-first proper 3-coloring of the primal vertices over the dual.
//! - `guards`: the least-populated color class as guard positions.
//!
//! `pipeline` runs the stages in order and exposes read-only snapshots for
//! renderers after every structural step.

pub mod color;
pub mod dual;
pub mod error;
pub mod faces;
pub mod geometry;
pub mod graph;
pub mod guards;
pub mod pipeline;
pub mod polygon;
pub mod triangulate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use geometry::Point;

/// Common exports for callers driving the whole pipeline.
pub mod prelude {
    pub use crate::color::{color, color_with, Color, ColorCfg, ColorMap};
    pub use crate::dual::{build_dual, Dual, DualId};
    pub use crate::faces::{extract_faces, Face};
    pub use crate::geometry::{orientation, point_in_triangle, Orientation, Point};
    pub use crate::graph::{Edge, Graph, NodeId};
    pub use crate::guards::{select_guards, GuardSet};
    pub use crate::pipeline::{
        solve, solve_observed, solve_with, Frame, Observer, Recorder, Snapshot, Solution, Step,
    };
    pub use crate::polygon::rand::{draw_comb, draw_star_polygon, draw_zigzag, Shape, StarCfg};
    pub use crate::polygon::Polygon;
    pub use crate::triangulate::{triangulate, Ear, Triangulation, Triangulator};
    pub use crate::{Error, Result};
}
