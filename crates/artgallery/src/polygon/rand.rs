//! Seeded simple polygons for property tests and benchmarks.
//!
//! All shapes come out counter-clockwise with no three collinear vertices
//! (almost surely, since coordinates are drawn from continuous ranges).
//! - `Star`: sorted jittered angles with jittered radii; consecutive angles stay
//!   less than π apart, so the ring is star-shaped about the origin.
//! - `Comb`: a base bar with teeth of random height; every valley vertex is reflex.
//! - `Zigzag`: x-monotone, with deep alternating spikes on both chains.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Polygon;
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Star,
    Comb,
    Zigzag,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Star, Shape::Comb, Shape::Zigzag];

    /// Draw a polygon of roughly `n` vertices. Combs round down to a multiple
    /// of four (at least one tooth); the others have exactly `n.max(3)`.
    pub fn draw(self, n: usize, seed: u64) -> Polygon {
        match self {
            Shape::Star => draw_star_polygon(StarCfg::new(n), seed),
            Shape::Comb => draw_comb(n / 4, seed),
            Shape::Zigzag => draw_zigzag(n, seed),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertices: usize,
    /// Fraction of the base angular spacing; clamped below 0.49.
    pub angle_jitter: f64,
    /// Radii are `1 + u` with `|u| <= radial_jitter`; clamped to [0, 0.95].
    pub radial_jitter: f64,
}

impl StarCfg {
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            angle_jitter: 0.3,
            radial_jitter: 0.6,
        }
    }
}

pub fn draw_star_polygon(cfg: StarCfg, seed: u64) -> Polygon {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = cfg.vertices.max(3);
    let half_turn_limit = 0.99 * ((n as f64) / 2.0 - 1.0) / 2.0;
    let aj = cfg.angle_jitter.clamp(0.0, 0.49).min(half_turn_limit);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut angles: Vec<f64> = (0..n)
        .map(|k| phase + (k as f64 + rng.gen_range(-aj..=aj)) * delta)
        .collect();
    angles.sort_by(f64::total_cmp);
    angles
        .into_iter()
        .map(|th| {
            let r = 1.0 + rng.gen_range(-rj..=rj);
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Comb with `teeth.max(1)` teeth and `4 * teeth` vertices. Tooth `i` spans
/// x in [2i, 2i+1]; the valley between teeth sits at a random height below
/// both neighbours.
pub fn draw_comb(teeth: usize, seed: u64) -> Polygon {
    let mut rng = StdRng::seed_from_u64(seed);
    let t = teeth.max(1);
    let right = (2 * t - 1) as f64;
    let mut points = Vec::with_capacity(4 * t);
    points.push(Vector2::new(0.0, 0.0));
    points.push(Vector2::new(right, 0.0));
    for i in (0..t).rev() {
        let x = (2 * i) as f64;
        let h = rng.gen_range(2.5..5.0);
        points.push(Vector2::new(x + 1.0, h));
        points.push(Vector2::new(x, h));
        if i > 0 {
            let v = rng.gen_range(0.5..1.5);
            points.push(Vector2::new(x, v));
            points.push(Vector2::new(x - 1.0, v));
        }
    }
    Polygon::new(points)
}

/// x-monotone polygon between tips (0, 0) and (w, 0): a lower chain below the
/// axis left to right, then an upper chain above it right to left. Every other
/// vertex on each chain is a deep spike.
pub fn draw_zigzag(n: usize, seed: u64) -> Polygon {
    let mut rng = StdRng::seed_from_u64(seed);
    let inner = n.max(3) - 2;
    let lower = (inner + 1) / 2;
    let upper = inner - lower;
    let width = (inner + 1) as f64;
    let mut chain = |count: usize, sign: f64| -> Vec<Point> {
        (0..count)
            .map(|i| {
                let depth = if i % 2 == 0 {
                    rng.gen_range(0.0..0.3)
                } else {
                    rng.gen_range(1.5..3.0)
                };
                let x = (i + 1) as f64 * width / (count + 1) as f64;
                Vector2::new(x, sign * (0.1 + depth))
            })
            .collect()
    };
    let below = chain(lower, -1.0);
    let above = chain(upper, 1.0);
    let mut points = Vec::with_capacity(inner + 2);
    points.push(Vector2::new(0.0, 0.0));
    points.extend(below);
    points.push(Vector2::new(width, 0.0));
    points.extend(above.into_iter().rev());
    Polygon::new(points)
}

#[cfg(test)]
pub(crate) fn shapes() -> impl proptest::strategy::Strategy<Value = Shape> {
    proptest::sample::select(Shape::ALL.to_vec())
}
