use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jarvis::sample::{fill_model, CloudCfg, Distribution, ReplayToken};
use jarvis::{verify, Angle, JarvisMarcher, Point, PointCloud, Vector};
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;

use provenance::{write_sidecar, CloudInfo, MarchInfo, Payload, Replay};

#[derive(Parser)]
#[command(name = "jarvis-cli")]
#[command(about = "Generate point clouds and march convex hulls over them")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a reproducible point cloud and write it as CSV (columns x,y)
    Gen {
        #[arg(long, default_value_t = 20)]
        count: usize,
        #[arg(long, default_value_t = 600)]
        width: i32,
        #[arg(long, default_value_t = 400)]
        height: i32,
        /// Truncated-normal cloud with this width in standard deviations (uniform if absent)
        #[arg(long)]
        normal: Option<f64>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
    /// Run the march to completion and write the hull as JSON
    Solve {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Emit one JSON frame per march step (stdout unless --out is given)
    Trace {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: Option<String>,
    },
    /// Print the code revision and library version as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Gen {
            count,
            width,
            height,
            normal,
            seed,
            index,
            out,
        } => {
            let distribution = match normal {
                Some(sigma) => Distribution::Normal { sigma },
                None => Distribution::Uniform,
            };
            let cfg = CloudCfg {
                count,
                bounds: Point::new(width, height),
                distribution,
            };
            generate(cfg, ReplayToken { seed, index }, out, cmd.tag)
        }
        Action::Solve { input, out } => solve(input, out, cmd.tag),
        Action::Trace { input, out } => trace(input, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn generate(cfg: CloudCfg, tok: ReplayToken, out: String, tag: Option<String>) -> Result<()> {
    tracing::info!(
        count = cfg.count,
        seed = tok.seed,
        index = tok.index,
        out,
        tag = ?tag,
        "gen"
    );
    let mut cloud = PointCloud::new();
    fill_model(&mut cloud, cfg, tok)?;
    points_io::write_points(&out, cloud.points())?;
    let payload = Payload {
        tag,
        replay: Some(Replay {
            seed: tok.seed,
            index: tok.index,
        }),
        distribution: Some(format!("{:?}", cfg.distribution)),
        cloud: Some(CloudInfo::of(&cloud)),
        ..Payload::default()
    };
    write_sidecar(&out, &payload)?;
    Ok(())
}

fn load_cloud(input: &str) -> Result<PointCloud> {
    let mut cloud = PointCloud::new();
    let points = points_io::read_points(input)?;
    let added = cloud
        .extend(points)
        .with_context(|| format!("loading {input}"))?;
    tracing::info!(
        added,
        bounds = %cloud.bounds(),
        leftmost = %cloud.leftmost(),
        "cloud"
    );
    Ok(cloud)
}

/// Hull document written by `solve`.
#[derive(Serialize)]
struct HullReport<'a> {
    points: usize,
    seed: Point,
    closed: bool,
    vertices: &'a [Point],
    edges: &'a [Vector],
    angles: &'a [Angle],
    steps: u64,
}

fn solve(input: String, out: String, tag: Option<String>) -> Result<()> {
    tracing::info!(input, out, tag = ?tag, "solve");
    let mut cloud = load_cloud(&input)?;
    let march = {
        let mut marcher = JarvisMarcher::new(&mut cloud).context("march failed")?;
        marcher.solve().context("march failed")?;
        MarchInfo::of(&marcher)
    };
    verify::check(&cloud).context("solved hull failed verification")?;
    let hull = cloud.hull().context("solved cloud has no hull")?;
    let report = HullReport {
        points: cloud.len(),
        seed: hull.seed(),
        closed: hull.is_closed(),
        vertices: hull.points(),
        edges: hull.edges(),
        angles: hull.angles(),
        steps: march.steps,
    };
    tracing::info!(vertices = march.vertices, steps = march.steps, "hull");

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {out}"))?;
    let payload = Payload {
        tag,
        cloud: Some(CloudInfo::of(&cloud)),
        march: Some(march),
        input: Some(input),
        ..Payload::default()
    };
    write_sidecar(&out, &payload)?;
    Ok(())
}

fn trace(input: String, out: Option<String>, tag: Option<String>) -> Result<()> {
    tracing::info!(input, out = ?out, tag = ?tag, "trace");
    let mut cloud = load_cloud(&input)?;
    let sink: Box<dyn Write> = match &out {
        Some(path) => Box::new(
            std::fs::File::create(path).with_context(|| format!("creating {path}"))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut sink = BufWriter::new(sink);

    let mut marcher = JarvisMarcher::new(&mut cloud).context("march failed")?;
    loop {
        let more = marcher.iterate().context("march failed")?;
        serde_json::to_writer(&mut sink, &marcher.frame())?;
        sink.write_all(b"\n")?;
        if !more {
            break;
        }
    }
    sink.flush()?;
    let march = MarchInfo::of(&marcher);
    tracing::info!(steps = march.steps, vertices = march.vertices, "trace done");

    if let Some(path) = &out {
        let payload = Payload {
            tag,
            cloud: Some(CloudInfo::of(marcher.model())),
            march: Some(march),
            input: Some(input),
            ..Payload::default()
        };
        write_sidecar(path, &payload)?;
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "jarvis_version": jarvis::VERSION,
        "tag": tag,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
