//! End-to-end scenarios over the whole pipeline.

use super::*;
use crate::error::Error;
use crate::polygon::rand::shapes;
use nalgebra::vector;
use proptest::prelude::*;

fn poly(points: &[(f64, f64)]) -> Polygon {
    points.iter().map(|&(x, y)| vector![x, y]).collect()
}

fn unit_square() -> Polygon {
    poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

fn comb() -> Polygon {
    poly(&[
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 4.0),
        (5.0, 4.0),
        (4.0, 1.0),
        (2.0, 1.0),
        (1.0, 4.0),
        (0.0, 4.0),
    ])
}

#[test]
fn unit_square_end_to_end() {
    let s = solve(unit_square()).unwrap();
    assert_eq!(s.triangulation.graph.len(), 4);
    assert_eq!(s.triangulation.diagonals.len(), 1);
    assert_eq!(s.triangulation.triangles.len(), 2);
    assert_eq!(s.faces.len(), 1);
    assert_eq!(s.dual.len(), 1);
    assert!(s.dual.graph.edges().is_empty());
    assert!(s.colors.missing().is_empty());
    for tri in &s.triangulation.triangles {
        let [a, b, c] = tri.map(|v| s.colors.get(v));
        assert!(a != b && b != c && a != c);
    }
    assert_eq!(s.guards.color, Color::One);
    assert_eq!(s.guards.points, vec![vector![0.0, 0.0]]);
    assert!((1..=2).contains(&s.guards.len()));
}

#[test]
fn comb_end_to_end() {
    let s = solve(comb()).unwrap();
    assert_eq!(s.triangulation.diagonals.len(), 5);
    assert_eq!(s.faces.len(), 5);
    assert_eq!(s.dual.len(), 5);
    assert!(s.colors.missing().is_empty());
    assert_eq!(s.guards.color, Color::One);
    assert_eq!(s.guards.vertices, vec![NodeId(0), NodeId(3)]);
    assert_eq!(
        s.guards.points,
        vec![vector![0.0, 0.0], vector![5.0, 4.0]]
    );
}

#[test]
fn lone_triangle_is_flagged_uncolored() {
    let err = solve(poly(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])).unwrap_err();
    assert_eq!(
        err,
        Error::Uncolored {
            vertices: vec![NodeId(0), NodeId(1), NodeId(2)]
        }
    );
}

#[test]
fn malformed_inputs_fail_fast() {
    assert_eq!(
        solve(poly(&[(0.0, 0.0), (1.0, 0.0)])).unwrap_err(),
        Error::TooFewPoints { got: 2 }
    );
    // Clockwise comb: the two notches turn left and get clipped before the scan runs dry.
    assert_eq!(
        solve(comb().reversed()).unwrap_err(),
        Error::NoEar { remaining: 6 }
    );
}

#[test]
fn recorder_sees_every_step() {
    let mut rec = Recorder::default();
    let s = solve_observed(unit_square(), &mut rec).unwrap();
    let labels: Vec<&str> = rec.frames.iter().map(|f| f.step.label()).collect();
    assert_eq!(
        labels,
        vec![
            "loaded",
            "ear_clipped",
            "dual_built",
            "colored",
            "colored",
            "colored",
            "colored",
            "guards_selected"
        ]
    );
    let first = &rec.frames[0];
    assert_eq!(first.polygon.len(), 4);
    assert_eq!(first.primal_edges.len(), 4);
    assert!(first.dual_points.is_empty());
    assert_eq!(first.colors, vec![None; 4]);

    let clipped = &rec.frames[1];
    assert_eq!(clipped.polygon.len(), 3);
    assert_eq!(clipped.primal_edges.len(), 5);

    let dual = &rec.frames[2];
    assert_eq!(dual.dual_points, vec![vector![0.5, 0.5]]);

    let first_color = &rec.frames[3];
    assert_eq!(
        first_color.step,
        Step::Colored {
            vertex: NodeId(0),
            color: Color::One
        }
    );
    assert_eq!(first_color.colors.iter().filter(|c| c.is_some()).count(), 1);

    let last = rec.frames.last().unwrap();
    assert_eq!(last.guards, s.guards.points);
    assert_eq!(last.colors, s.colors.as_slice().to_vec());
}

#[test]
fn frames_stop_at_the_failing_stage() {
    let mut rec = Recorder::default();
    let err = solve_observed(unit_square().reversed(), &mut rec).unwrap_err();
    assert!(matches!(err, Error::NoEar { .. }));
    assert_eq!(rec.frames.len(), 1);
    assert_eq!(rec.frames[0].step, Step::Loaded);
}

#[test]
fn dyn_observer_is_accepted() {
    let mut rec = Recorder::default();
    let obs: &mut dyn Observer = &mut rec;
    solve_observed(comb(), obs).unwrap();
    // loaded + 5 ears + dual + 8 colors + guards
    assert_eq!(rec.frames.len(), 16);
}

proptest! {
    #[test]
    fn random_polygons_solve_with_at_most_a_third_guards(shape in shapes(), seed in 0u64..500, n in 4usize..80) {
        let poly = shape.draw(n, seed);
        let n = poly.len();
        let s = solve(poly).unwrap();
        prop_assert_eq!(s.faces.len(), n - 3);
        prop_assert!(s.guards.len() <= n / 3);
        prop_assert!(!s.guards.is_empty());
    }

    #[test]
    fn frame_count_is_twice_the_vertex_count(shape in shapes(), seed in 0u64..200, n in 4usize..40) {
        let poly = shape.draw(n, seed);
        let n = poly.len();
        let mut rec = Recorder::default();
        solve_observed(poly, &mut rec).unwrap();
        prop_assert_eq!(rec.frames.len(), 2 * n);
    }
}
