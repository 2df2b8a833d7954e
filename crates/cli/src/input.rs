//! Polygon input files.
//!
//! One line: the vertex count `n`, then `2n` coordinates `x1 y1 x2 y2 ...`,
//! each written as a fraction `num/den` (a bare number is read as `num/1`).
//! Tokens are separated by any whitespace.

use anyhow::{bail, ensure, Context, Result};
use artgallery::polygon::Polygon;
use artgallery::Point;
use std::path::Path;

pub fn read_polygon(path: &Path) -> Result<Polygon> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading polygon file {}", path.display()))?;
    parse_polygon(&text).with_context(|| format!("parsing polygon file {}", path.display()))
}

pub fn parse_polygon(text: &str) -> Result<Polygon> {
    let mut tokens = text.split_whitespace();
    let count_tok = tokens.next().context("missing vertex count")?;
    let count: usize = count_tok
        .parse()
        .with_context(|| format!("vertex count {count_tok:?} is not a non-negative integer"))?;
    ensure!(count >= 3, "a polygon needs at least 3 vertices, got {count}");
    let coords = tokens
        .enumerate()
        .map(|(i, tok)| parse_fraction(tok).with_context(|| format!("coordinate #{}", i + 1)))
        .collect::<Result<Vec<f64>>>()?;
    ensure!(
        coords.len() == 2 * count,
        "expected {} coordinates for {count} vertices, found {}",
        2 * count,
        coords.len()
    );
    Ok(coords
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

fn parse_fraction(tok: &str) -> Result<f64> {
    let (num, den) = tok.split_once('/').unwrap_or((tok, "1"));
    let num: f64 = num
        .parse()
        .with_context(|| format!("numerator {num:?} in {tok:?}"))?;
    let den: f64 = den
        .parse()
        .with_context(|| format!("denominator {den:?} in {tok:?}"))?;
    if den == 0.0 {
        bail!("zero denominator in {tok:?}");
    }
    let value = num / den;
    ensure!(value.is_finite(), "{tok:?} is not a finite number");
    Ok(value)
}
