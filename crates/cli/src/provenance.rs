use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Code revision and crate version stamped on every artifact.
#[derive(Debug, Serialize)]
pub struct Stamp {
    pub code_rev: String,
    pub version: &'static str,
}

impl Stamp {
    pub fn current() -> Self {
        Self {
            code_rev: current_git_rev(),
            version: artgallery::VERSION,
        }
    }
}

/// What a `solve` or `animate` invocation did to produce its output.
#[derive(Debug, Serialize)]
pub struct Run<'a> {
    pub command: &'static str,
    pub input: &'a Path,
    pub vertices: usize,
    pub reoriented: bool,
    pub guards: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<usize>,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    #[serde(flatten)]
    stamp: Stamp,
    run: &'a Run<'a>,
    output: &'a Path,
}

/// Write `<stem>.provenance.json` next to `output`, describing `run`.
pub fn write_sidecar(output: &Path, run: &Run<'_>) -> Result<PathBuf> {
    let path = sidecar_path(output);
    let doc = Sidecar {
        stamp: Stamp::current(),
        run,
        output,
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(sidecar = %path.display(), "provenance");
    Ok(path)
}

fn sidecar_path(output: &Path) -> PathBuf {
    output.with_extension("provenance.json")
}

/// `GIT_COMMIT` if set, else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
