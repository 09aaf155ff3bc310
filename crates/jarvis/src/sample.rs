//! Random point clouds in quadrant I (uniform or truncated normal + replay tokens).
//!
//! Purpose
//! - Feed the model with reproducible clouds for demos, traces and benches.
//!
//! Model
//! - `Uniform`: each coordinate uniform on `[0, bound)`.
//! - `Normal { sigma }`: each coordinate a standard normal sample rejected
//!   outside `(-sigma, sigma)`, mapped to `[-1, 1]`, scaled to half the bound
//!   and shifted to the middle of the bounds.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `model::PointCloud::extend`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::HullError;
use crate::geom::Point;
use crate::model::PointCloud;

/// Coordinate distribution of a drawn cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distribution {
    Uniform,
    /// Truncated normal centred in the bounds. `sigma` is the truncation width in
    /// standard deviations; clamped to at least 0.5.
    Normal { sigma: f64 },
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Number of draws; duplicates collapse when added to a model.
    pub count: usize,
    /// Exclusive upper-right corner of the sampling box.
    pub bounds: Point,
    pub distribution: Distribution,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 20,
            bounds: Point::new(600, 400),
            distribution: Distribution::Uniform,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points inside `cfg.bounds`.
///
/// Errors with `InvalidArgument` if either bound is not positive.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Result<Vec<Point>, HullError> {
    if cfg.bounds.x <= 0 || cfg.bounds.y <= 0 {
        return Err(HullError::InvalidArgument(format!(
            "sampling bounds must be positive, got {}",
            cfg.bounds
        )));
    }
    let mut rng = tok.to_std_rng();
    let pts = (0..cfg.count)
        .map(|_| match cfg.distribution {
            Distribution::Uniform => Point::new(
                rng.gen_range(0..cfg.bounds.x),
                rng.gen_range(0..cfg.bounds.y),
            ),
            Distribution::Normal { sigma } => {
                let sigma = sigma.max(0.5);
                Point::new(
                    centred(&mut rng, sigma, cfg.bounds.x),
                    centred(&mut rng, sigma, cfg.bounds.y),
                )
            }
        })
        .collect();
    Ok(pts)
}

/// Draw a cloud into `model`; returns how many new points were inserted.
pub fn fill_model(
    model: &mut PointCloud,
    cfg: CloudCfg,
    tok: ReplayToken,
) -> Result<usize, HullError> {
    let pts = draw_cloud(cfg, tok)?;
    let added = model.extend(pts)?;
    tracing::debug!(
        seed = tok.seed,
        index = tok.index,
        drawn = cfg.count,
        added,
        "fill_model"
    );
    Ok(added)
}

fn centred<R: Rng>(rng: &mut R, sigma: f64, bound: i32) -> i32 {
    let half = f64::from(bound) / 2.0;
    let z = loop {
        let z = standard_normal(rng);
        if z > -sigma && z < sigma {
            break z;
        }
    };
    let c = (z / sigma) * half + half;
    // floor keeps the result in [0, bound) since z/sigma is strictly inside (-1, 1)
    (c.floor() as i32).clamp(0, bound - 1)
}

/// Box–Muller transform over two uniforms.
fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>(); // (0, 1]
    let u2: f64 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
