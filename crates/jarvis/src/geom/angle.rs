use serde::Serialize;

use super::{normalize_angle, Point};

/// Arc of `angle` radians starting at direction `start` (anticlockwise from +X),
/// drawn around `center`. `end = (start + angle) mod 2π`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Angle {
    pub angle: f64,
    pub start: f64,
    pub end: f64,
    pub center: Point,
}

impl Angle {
    pub fn new(angle: f64, start: f64, center: Point) -> Self {
        Self {
            angle,
            start,
            end: normalize_angle(start + angle),
            center,
        }
    }
}
