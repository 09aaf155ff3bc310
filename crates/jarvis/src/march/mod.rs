//! Jarvis' march (gift wrapping) as an explicit, resumable state machine.
//!
//! Purpose
//! - Build a `ConvexHull` over a `PointCloud` one candidate evaluation at a
//!   time, so a caller can render the comparison between any two steps.
//!
//! Selection rule
//! - From the current vertex, every other cloud point is measured with
//!   `Vector::angle_to` against the edge arriving at that vertex.
//! - Only angles `>= π` qualify (points not behind the current edge).
//! - The smallest qualifying angle wins: the tightest clockwise wrap.
//! - Exactly codirectional candidates tie; the nearer one wins.
//!
//! Failure
//! - `DegenerateGeometry` for clouds below 3 points, for a scan where nothing
//!   qualifies (colinear remainder), and for a wrap that does not close.
//!
//! Code cross-refs: `hull::ConvexHull`, `model::PointCloud`, `verify::check`

mod marcher;
mod state;

pub use marcher::JarvisMarcher;
pub use state::{Candidate, Frame, MarchState, Scan};

use crate::error::HullError;
use crate::geom::Point;
use crate::model::PointCloud;

/// Hull vertices of `points`, starting at the leftmost point and wrapping clockwise.
pub fn convex_hull<I>(points: I) -> Result<Vec<Point>, HullError>
where
    I: IntoIterator<Item = Point>,
{
    let mut cloud = PointCloud::new();
    cloud.extend(points)?;
    let mut marcher = JarvisMarcher::new(&mut cloud)?;
    marcher.solve()?;
    marcher
        .hull()
        .map(|h| h.points().to_vec())
        .ok_or_else(|| HullError::IllegalState("solved march left no hull".into()))
}

#[cfg(test)]
mod tests;
