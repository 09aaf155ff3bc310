//! Integer-lattice 2D primitives for the gift-wrapping march.
//!
//! Purpose
//! - `Point`: integer coordinates, hashable, the unit of the point cloud.
//! - `Vector`: directed segment with derived position, magnitude and angle.
//! - `Angle`: an arc record (total, start, end, center) for hull corners and
//!   for renderers showing the candidate under comparison.
//!
//! Numerics
//! - Orientation and codirectionality use exact `i128` cross/dot products.
//! - `Vector::angle_to` feeds those exact products to `atan2`, so colinear
//!   configurations land on exactly `0` or `π`.
//! - All angles are normalized to `[0, 2π)`.
//!
//! Code cross-refs: `hull::ConvexHull`, `march::JarvisMarcher`, `verify`

mod angle;
mod point;
mod vector;

pub use angle::Angle;
pub use point::Point;
pub use vector::{Orientation, Vector};

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(a: f64) -> f64 {
    let x = a.rem_euclid(std::f64::consts::TAU);
    // rem_euclid of a tiny negative value rounds up to exactly 2π
    if x >= std::f64::consts::TAU {
        0.0
    } else {
        x
    }
}
