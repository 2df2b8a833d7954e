//! Stage orchestration and read-only snapshots for renderers.
//!
//! `solve_with` runs triangulation, face extraction, the dual build, coloring
//! and guard selection in order, passing owned outputs from stage to stage.
//! An `Observer` sees a `Snapshot` after every structural step: the initial
//! load, each clipped ear, the finished dual, each color assignment, and the
//! final guard set. Any stage error aborts the run; partial results are dropped.

use crate::color::{color_with, Color, ColorCfg, ColorMap};
use crate::dual::{build_dual, Dual};
use crate::error::Result;
use crate::faces::{extract_faces, Face};
use crate::geometry::Point;
use crate::graph::{Edge, Graph, NodeId};
use crate::guards::{select_guards, GuardSet};
use crate::polygon::Polygon;
use crate::triangulate::{Ear, Triangulation, Triangulator};

/// Which step a snapshot follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Loaded,
    EarClipped(Ear),
    DualBuilt,
    Colored { vertex: NodeId, color: Color },
    GuardsSelected,
}

impl Step {
    pub fn label(&self) -> &'static str {
        match self {
            Step::Loaded => "loaded",
            Step::EarClipped(_) => "ear_clipped",
            Step::DualBuilt => "dual_built",
            Step::Colored { .. } => "colored",
            Step::GuardsSelected => "guards_selected",
        }
    }
}

/// Borrowed view of the pipeline state right after `step`.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub step: Step,
    /// Remaining polygon ring (shrinks while ears are clipped).
    pub polygon: &'a Polygon,
    pub primal: &'a Graph,
    pub dual: Option<&'a Dual>,
    pub colors: Option<&'a ColorMap>,
    pub guards: &'a [Point],
}

pub trait Observer {
    fn observe(&mut self, snapshot: &Snapshot<'_>);
}

impl Observer for () {
    fn observe(&mut self, _snapshot: &Snapshot<'_>) {}
}

/// Owned copy of a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub step: Step,
    pub polygon: Vec<Point>,
    pub primal_points: Vec<Point>,
    pub primal_edges: Vec<Edge>,
    pub dual_points: Vec<Point>,
    pub dual_edges: Vec<Edge>,
    pub colors: Vec<Option<Color>>,
    pub guards: Vec<Point>,
}

impl Frame {
    pub fn capture(s: &Snapshot<'_>) -> Self {
        let points = |g: &Graph| g.nodes().map(|(_, n)| n.point).collect::<Vec<_>>();
        Self {
            step: s.step,
            polygon: s.polygon.points().to_vec(),
            primal_points: points(s.primal),
            primal_edges: s.primal.edges(),
            dual_points: s.dual.map(|d| points(&d.graph)).unwrap_or_default(),
            dual_edges: s.dual.map(|d| d.graph.edges()).unwrap_or_default(),
            colors: s
                .colors
                .map(|c| c.as_slice().to_vec())
                .unwrap_or_else(|| vec![None; s.primal.len()]),
            guards: s.guards.to_vec(),
        }
    }
}

/// Observer that keeps every frame.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub frames: Vec<Frame>,
}

impl Observer for Recorder {
    fn observe(&mut self, snapshot: &Snapshot<'_>) {
        self.frames.push(Frame::capture(snapshot));
    }
}

/// Every intermediate product of a successful run.
#[derive(Clone, Debug)]
pub struct Solution {
    pub triangulation: Triangulation,
    pub faces: Vec<Face>,
    pub dual: Dual,
    pub colors: ColorMap,
    pub guards: GuardSet,
}

pub fn solve(polygon: Polygon) -> Result<Solution> {
    solve_with(polygon, ColorCfg::default(), &mut ())
}

pub fn solve_observed<O: Observer + ?Sized>(polygon: Polygon, observer: &mut O) -> Result<Solution> {
    solve_with(polygon, ColorCfg::default(), observer)
}

/// Run all stages. Fails with `Uncolored` when the dual does not reach every vertex.
pub fn solve_with<O: Observer + ?Sized>(
    polygon: Polygon,
    cfg: ColorCfg,
    observer: &mut O,
) -> Result<Solution> {
    let _span = tracing::debug_span!("solve", vertices = polygon.len()).entered();
    let mut tri = Triangulator::new(polygon)?;
    observer.observe(&Snapshot {
        step: Step::Loaded,
        polygon: tri.polygon(),
        primal: tri.graph(),
        dual: None,
        colors: None,
        guards: &[],
    });
    while let Some(ear) = tri.clip_ear()? {
        observer.observe(&Snapshot {
            step: Step::EarClipped(ear),
            polygon: tri.polygon(),
            primal: tri.graph(),
            dual: None,
            colors: None,
            guards: &[],
        });
    }
    let triangulation = tri.run()?;
    let primal = &triangulation.graph;
    let remaining = &triangulation.remaining;

    let faces = extract_faces(primal)?;
    let dual = build_dual(primal, &faces)?;
    observer.observe(&Snapshot {
        step: Step::DualBuilt,
        polygon: remaining,
        primal,
        dual: Some(&dual),
        colors: None,
        guards: &[],
    });

    let colors = color_with(primal, &dual, cfg, |vertex, color, map| {
        observer.observe(&Snapshot {
            step: Step::Colored { vertex, color },
            polygon: remaining,
            primal,
            dual: Some(&dual),
            colors: Some(map),
            guards: &[],
        });
    })?;
    colors.ensure_complete()?;

    let guards = select_guards(primal, &colors);
    observer.observe(&Snapshot {
        step: Step::GuardsSelected,
        polygon: remaining,
        primal,
        dual: Some(&dual),
        colors: Some(&colors),
        guards: &guards.points,
    });
    tracing::debug!(guards = guards.len(), color = guards.color.value(), "solved");
    Ok(Solution {
        triangulation,
        faces,
        dual,
        colors,
        guards,
    })
}

#[cfg(test)]
mod tests;
