//! Polygon ring: an ordered, closed sequence of points (last adjacent to first).
//!
//! The ring shrinks only by removing vertices; removal indices wrap modulo the
//! current length.

pub mod rand;

use crate::geometry::Point;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index` modulo the current length. Panics on an empty ring.
    #[inline]
    pub fn at(&self, index: usize) -> Point {
        self.points[index % self.points.len()]
    }

    /// Remove the point at `index` modulo the current length. Panics on an empty ring.
    pub fn remove_wrapping(&mut self, index: usize) -> Point {
        let len = self.points.len();
        self.points.remove(index % len)
    }

    /// Shoelace signed area; positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let p = self.points[i];
                let q = self.points[(i + 1) % n];
                p.x * q.y - p.y * q.x
            })
            .sum();
        0.5 * twice
    }

    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Same ring traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
