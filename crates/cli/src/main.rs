use anyhow::{Context, Result};
use artgallery::pipeline::{solve, solve_observed, Recorder};
use artgallery::polygon::Polygon;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod report;

use provenance::{Run, Stamp};
use report::{FrameReport, SolveReport};

#[derive(Parser)]
#[command(name = "artgallery")]
#[command(about = "Guard placement for simple polygons (triangulate, 3-color, pick guards)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one polygon file; print the report or write it to --out
    Solve {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Record a snapshot after every pipeline step and write them as JSON frames
    Animate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the code revision and crate version as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { input, out } => run_solve(&input, out.as_deref()),
        Action::Animate { input, out } => run_animate(&input, &out),
        Action::Report => report(),
    }
}

/// Read the polygon and turn clockwise rings around.
fn load(input: &Path) -> Result<(Polygon, bool)> {
    let polygon = input::read_polygon(input)?;
    if polygon.is_counter_clockwise() {
        return Ok((polygon, false));
    }
    tracing::warn!(input = %input.display(), "clockwise polygon, reversing vertex order");
    Ok((polygon.reversed(), true))
}

fn run_solve(input: &Path, out: Option<&Path>) -> Result<()> {
    let (polygon, reoriented) = load(input)?;
    let n = polygon.len();
    tracing::info!(input = %input.display(), vertices = n, reoriented, "solve");
    let solution = solve(polygon).with_context(|| format!("solving {}", input.display()))?;
    tracing::info!(
        guards = solution.guards.len(),
        color = solution.guards.color.value(),
        "guards"
    );
    let doc = SolveReport::new(&solution, reoriented);
    match out {
        Some(out) => {
            write_json(out, &doc)?;
            provenance::write_sidecar(
                out,
                &Run {
                    command: "solve",
                    input,
                    vertices: n,
                    reoriented,
                    guards: solution.guards.len(),
                    frames: None,
                },
            )?;
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn run_animate(input: &Path, out: &Path) -> Result<()> {
    let (polygon, reoriented) = load(input)?;
    let n = polygon.len();
    let mut recorder = Recorder::default();
    let solution = solve_observed(polygon, &mut recorder)
        .with_context(|| format!("solving {}", input.display()))?;
    let frames: Vec<FrameReport> = recorder.frames.iter().map(FrameReport::from).collect();
    tracing::info!(input = %input.display(), frames = frames.len(), out = %out.display(), "animate");
    write_json(out, &frames)?;
    provenance::write_sidecar(
        out,
        &Run {
            command: "animate",
            input,
            vertices: n,
            reoriented,
            guards: solution.guards.len(),
            frames: Some(frames.len()),
        },
    )?;
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Stamp::current())?);
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    const COMB: &str = "8   0/1   0/1   6/1   0/1   6/1   4/1   5/1   4/1   4/1   1/1   2/1   1/1   1/1   4/1   0/1   4/1";

    #[test]
    fn solve_writes_report_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("comb.txt");
        fs::write(&input, COMB).unwrap();
        let out = dir.path().join("out/comb.json");
        run_solve(&input, Some(&out)).unwrap();
        let v: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(v["reoriented"], false);
        assert_eq!(v["diagonals"].as_array().unwrap().len(), 5);
        assert_eq!(v["faces"].as_array().unwrap().len(), 5);
        assert_eq!(v["guards"], serde_json::json!([[0.0, 0.0], [5.0, 4.0]]));
        let sidecar: Value = serde_json::from_slice(
            &fs::read(dir.path().join("out/comb.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(sidecar["run"]["command"], "solve");
        assert_eq!(sidecar["run"]["vertices"], 8);
        assert_eq!(sidecar["run"]["guards"], 2);
    }

    #[test]
    fn clockwise_input_is_reoriented() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("cw.txt");
        fs::write(&input, "4 0/1 0/1 0/1 1/1 1/1 1/1 1/1 0/1").unwrap();
        let out = dir.path().join("cw.json");
        run_solve(&input, Some(&out)).unwrap();
        let v: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(v["reoriented"], true);
        assert_eq!(v["vertices"][0], serde_json::json!([1.0, 0.0]));
    }

    #[test]
    fn animate_writes_one_frame_per_step() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("comb.txt");
        fs::write(&input, COMB).unwrap();
        let out = dir.path().join("frames.json");
        run_animate(&input, &out).unwrap();
        let v: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let frames = v.as_array().unwrap();
        assert_eq!(frames.len(), 16);
        assert_eq!(frames[0]["step"], "loaded");
        assert_eq!(frames[15]["step"], "guards_selected");
        let sidecar: Value =
            serde_json::from_slice(&fs::read(dir.path().join("frames.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(sidecar["run"]["frames"], 16);
        assert_eq!(sidecar["run"]["guards"], 2);
    }

    #[test]
    fn triangle_input_reports_uncolored_vertices() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tri.txt");
        fs::write(&input, "3 0/1 0/1 1/1 0/1 0/1 1/1").unwrap();
        let err = run_solve(&input, None).unwrap_err();
        assert!(format!("{err:#}").contains("does not reach vertices"));
    }
}
