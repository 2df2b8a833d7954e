//! JSON shapes written by the CLI.

use artgallery::graph::Edge;
use artgallery::pipeline::{Frame, Solution, Step};
use artgallery::Point;
use serde::Serialize;

fn xy(p: &Point) -> [f64; 2] {
    [p.x, p.y]
}

fn pair(e: &Edge) -> [usize; 2] {
    [e.lo().0, e.hi().0]
}

#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub reoriented: bool,
    pub vertices: Vec<[f64; 2]>,
    pub diagonals: Vec<[usize; 2]>,
    pub faces: Vec<[usize; 4]>,
    pub dual_edges: Vec<[usize; 2]>,
    pub colors: Vec<u8>,
    pub guard_color: u8,
    pub guards: Vec<[f64; 2]>,
}

impl SolveReport {
    pub fn new(s: &Solution, reoriented: bool) -> Self {
        let graph = &s.triangulation.graph;
        Self {
            reoriented,
            vertices: graph.nodes().map(|(_, n)| xy(&n.point)).collect(),
            diagonals: s.triangulation.diagonals.iter().map(pair).collect(),
            faces: s
                .faces
                .iter()
                .map(|f| f.vertices().map(|v| v.0))
                .collect(),
            dual_edges: s.dual.graph.edges().iter().map(pair).collect(),
            colors: s
                .colors
                .as_slice()
                .iter()
                .map(|c| c.map_or(0, |c| c.value()))
                .collect(),
            guard_color: s.guards.color.value(),
            guards: s.guards.points.iter().map(xy).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FrameReport {
    pub step: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagonal: Option<[usize; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertex: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u8>,
    pub polygon: Vec<[f64; 2]>,
    pub primal_points: Vec<[f64; 2]>,
    pub primal_edges: Vec<[usize; 2]>,
    pub dual_points: Vec<[f64; 2]>,
    pub dual_edges: Vec<[usize; 2]>,
    pub colors: Vec<Option<u8>>,
    pub guards: Vec<[f64; 2]>,
}

impl From<&Frame> for FrameReport {
    fn from(f: &Frame) -> Self {
        let (removed, diagonal) = match f.step {
            Step::EarClipped(ear) => (Some(ear.removed.0), Some(pair(&ear.diagonal))),
            _ => (None, None),
        };
        let (vertex, color) = match f.step {
            Step::Colored { vertex, color } => (Some(vertex.0), Some(color.value())),
            _ => (None, None),
        };
        Self {
            step: f.step.label(),
            removed,
            diagonal,
            vertex,
            color,
            polygon: f.polygon.iter().map(xy).collect(),
            primal_points: f.primal_points.iter().map(xy).collect(),
            primal_edges: f.primal_edges.iter().map(pair).collect(),
            dual_points: f.dual_points.iter().map(xy).collect(),
            dual_edges: f.dual_edges.iter().map(pair).collect(),
            colors: f.colors.iter().map(|c| c.map(|c| c.value())).collect(),
            guards: f.guards.iter().map(xy).collect(),
        }
    }
}
