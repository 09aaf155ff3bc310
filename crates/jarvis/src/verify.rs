//! Post-hoc checks for a finished march.
//!
//! The march wraps clockwise, so the hull interior lies to the right of every
//! edge. All checks use exact integer orientation tests.

use std::collections::HashSet;
use std::f64::consts::PI;

use crate::error::HullError;
use crate::geom::{Orientation, Point};
use crate::hull::ConvexHull;
use crate::model::PointCloud;

/// Every recorded corner angle is at least a straight angle.
pub fn is_convex(hull: &ConvexHull) -> bool {
    hull.angles().iter().all(|a| a.angle >= PI)
}

/// `p` is on or inside every edge's half-plane.
pub fn encloses(hull: &ConvexHull, p: Point) -> bool {
    hull.edges()
        .iter()
        .all(|e| e.orientation(p) != Orientation::Left)
}

/// Validate the model's hull against its cloud.
///
/// Checks: a hull exists and is closed, it starts at the leftmost point, its
/// vertices are distinct cloud points, it is convex, and it encloses the cloud.
pub fn check(cloud: &PointCloud) -> Result<(), HullError> {
    let hull = cloud
        .hull()
        .ok_or_else(|| HullError::IllegalState("cloud has no hull".into()))?;
    if !hull.is_closed() {
        return Err(HullError::IllegalState("hull is not closed".into()));
    }
    if hull.seed() != cloud.leftmost() {
        return Err(HullError::IllegalState(format!(
            "hull starts at {} but the leftmost point is {}",
            hull.seed(),
            cloud.leftmost()
        )));
    }
    let mut seen = HashSet::with_capacity(hull.points().len());
    for p in hull.points() {
        if !cloud.contains(p) {
            return Err(HullError::IllegalState(format!(
                "hull vertex {p} is not in the cloud"
            )));
        }
        if !seen.insert(*p) {
            return Err(HullError::IllegalState(format!(
                "hull vertex {p} appears twice"
            )));
        }
    }
    if !is_convex(hull) {
        return Err(HullError::IllegalState("hull has a reflex corner".into()));
    }
    if let Some(p) = cloud.points().iter().find(|p| !encloses(hull, **p)) {
        return Err(HullError::IllegalState(format!(
            "cloud point {p} lies outside the hull"
        )));
    }
    Ok(())
}
