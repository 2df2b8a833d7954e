//! Planar point type and the two predicates ear clipping relies on.
//!
//! - `orientation`: turn direction of an ordered point triple.
//! - `point_in_triangle`: even-odd vertical-ray crossing test over 3 edges.
//!
//! Both predicates evaluate plain `f64` arithmetic without tolerances; points
//! compare by exact coordinate value.

use nalgebra::Vector2;

/// A point in the plane (y grows upwards).
pub type Point = Vector2<f64>;

/// Turn direction of `p1 → p2 → p3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    /// `1` clockwise, `0` collinear, `-1` counter-clockwise.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Orientation::Clockwise => 1,
            Orientation::Collinear => 0,
            Orientation::CounterClockwise => -1,
        }
    }
}

impl std::ops::Neg for Orientation {
    type Output = Orientation;
    #[inline]
    fn neg(self) -> Self::Output {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

#[inline]
fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Sign of `(p2 - p1) × (p3 - p2)`, reported as a turn direction.
///
/// A positive cross product is a left (counter-clockwise) turn.
#[inline]
pub fn orientation(p1: Point, p2: Point, p3: Point) -> Orientation {
    let c = cross(p2 - p1, p3 - p2);
    if c > 0.0 {
        Orientation::CounterClockwise
    } else if c < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Even-odd crossing test of `p` against triangle `(p1, p2, p3)`.
///
/// An edge counts as crossed when `p.x` lies in its half-open x-range (either
/// direction) and `p` is on or below the edge's supporting line at `p.x`.
/// Vertical edges have an empty half-open x-range and never count.
pub fn point_in_triangle(p1: Point, p2: Point, p3: Point, p: Point) -> bool {
    let tri = [p1, p2, p3];
    let mut crossings = 0usize;
    for i in 0..3 {
        let a = tri[i];
        let b = tri[(i + 1) % 3];
        let spans = (a.x <= p.x && p.x < b.x) || (b.x <= p.x && p.x < a.x);
        if !spans {
            continue;
        }
        let slope = if b.x == a.x {
            f64::INFINITY
        } else {
            (b.y - a.y) / (b.x - a.x)
        };
        let line_y = a.y + slope * (p.x - a.x);
        if p.y <= line_y {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    #[test]
    fn orientation_signs_follow_turn_direction() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert_eq!(orientation(a, b, vector![1.0, 1.0]), Orientation::CounterClockwise);
        assert_eq!(orientation(a, b, vector![1.0, -1.0]), Orientation::Clockwise);
        assert_eq!(orientation(a, b, vector![2.0, 0.0]), Orientation::Collinear);
        assert_eq!(Orientation::CounterClockwise.sign(), -1);
        assert_eq!(Orientation::Clockwise.sign(), 1);
        assert_eq!(Orientation::Collinear.sign(), 0);
    }

    #[test]
    fn point_in_triangle_interior_and_exterior() {
        let a = vector![0.0, 0.0];
        let b = vector![4.0, 0.0];
        let c = vector![0.0, 4.0];
        assert!(point_in_triangle(a, b, c, vector![1.0, 1.0]));
        assert!(!point_in_triangle(a, b, c, vector![3.0, 3.0]));
        assert!(!point_in_triangle(a, b, c, vector![-1.0, 1.0]));
        assert!(!point_in_triangle(a, b, c, vector![1.0, -1.0]));
    }

    #[test]
    fn point_in_triangle_boundary_policy() {
        let a = vector![0.0, 0.0];
        let b = vector![4.0, 0.0];
        let c = vector![0.0, 4.0];
        // On the bottom edge: both the bottom and the hypotenuse count.
        assert!(!point_in_triangle(a, b, c, vector![2.0, 0.0]));
        // On the hypotenuse: only the hypotenuse counts.
        assert!(point_in_triangle(a, b, c, vector![2.0, 2.0]));
        // On the vertical edge x = 0: only the hypotenuse counts.
        assert!(point_in_triangle(a, b, c, vector![0.0, 1.0]));
        // A vertex itself.
        assert!(!point_in_triangle(a, b, c, b));
    }

    proptest! {
        #[test]
        fn orientation_is_antisymmetric(
            ax in -100.0..100.0f64, ay in -100.0..100.0f64,
            bx in -100.0..100.0f64, by in -100.0..100.0f64,
            cx in -100.0..100.0f64, cy in -100.0..100.0f64,
        ) {
            let (a, b, c) = (vector![ax, ay], vector![bx, by], vector![cx, cy]);
            prop_assert_eq!(orientation(a, b, c), -orientation(c, b, a));
            prop_assert_eq!(orientation(a, b, c).sign(), -orientation(c, b, a).sign());
        }

        #[test]
        fn centroid_is_inside_ccw_triangle(
            ax in -10.0..10.0f64, ay in -10.0..10.0f64,
            dx in 0.5..10.0f64, dy in 0.5..10.0f64,
        ) {
            let a = vector![ax, ay];
            let b = vector![ax + dx, ay];
            let c = vector![ax, ay + dy];
            let centroid = (a + b + c) / 3.0;
            prop_assert!(point_in_triangle(a, b, c, centroid));
        }
    }
}
