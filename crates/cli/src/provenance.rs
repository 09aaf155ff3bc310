//! Sidecar documents describing how a CLI artifact was produced.
//!
//! Every artifact `out/name.ext` gets `out/name.provenance.json` next to it,
//! recording the code revision, the call site, the cloud the run worked on
//! and, for marches, how the hull came out.

use anyhow::{Context, Result};
use jarvis::{JarvisMarcher, Point, PointCloud};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Shape of the cloud an artifact was built from.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CloudInfo {
    pub points: usize,
    pub bounds: Point,
    pub leftmost: Point,
}

impl CloudInfo {
    pub fn of(cloud: &PointCloud) -> Self {
        Self {
            points: cloud.len(),
            bounds: cloud.bounds(),
            leftmost: cloud.leftmost(),
        }
    }
}

/// Outcome of a march: hull size and the number of `iterate()` calls it took.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct MarchInfo {
    pub vertices: usize,
    pub steps: u64,
    pub closed: bool,
}

impl MarchInfo {
    pub fn of(marcher: &JarvisMarcher<'_>) -> Self {
        let hull = marcher.hull();
        Self {
            vertices: hull.map_or(0, |h| h.points().len()),
            steps: marcher.steps(),
            closed: hull.is_some_and(|h| h.is_closed()),
        }
    }
}

/// Replay token of a sampled cloud.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Replay {
    pub seed: u64,
    pub index: u64,
}

/// What a subcommand knows about its run; unset parts are omitted from the sidecar.
#[derive(Debug, Default)]
pub struct Payload {
    pub tag: Option<String>,
    pub input: Option<String>,
    pub replay: Option<Replay>,
    pub distribution: Option<String>,
    pub cloud: Option<CloudInfo>,
    pub march: Option<MarchInfo>,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    jarvis_version: &'static str,
    callsite: Callsite,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    replay: Option<Replay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distribution: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cloud: Option<CloudInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    march: Option<MarchInfo>,
    outputs: Vec<String>,
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        jarvis_version: jarvis::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        tag: payload.tag.as_deref(),
        input: payload.input.as_deref(),
        replay: payload.replay,
        distribution: payload.distribution.as_deref(),
        cloud: payload.cloud,
        march: payload.march,
        outputs: vec![artifact.display().to_string()],
    };

    let path = sidecar_path(artifact);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "sidecar");
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit of the running code: `GIT_COMMIT` at build or run time, else `git rev-parse`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()
                .filter(|out| out.status.success())
                .and_then(|out| String::from_utf8(out.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
