use serde::Serialize;

use super::{normalize_angle, Point};
use crate::error::HullError;

/// Side of a directed line a point falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Left,
    Right,
    Colinear,
}

/// Directed segment `start -> end`. Every other field is derived from the endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Vector {
    pub start: Point,
    pub end: Point,
    /// `end - start`.
    pub position: Point,
    pub magnitude: f64,
    /// Anticlockwise from +X to `position`, in `[0, 2π)`. Zero for a zero vector.
    pub angle: f64,
}

impl Vector {
    pub fn new(start: Point, end: Point) -> Self {
        let position = end.minus(&start);
        let magnitude = position.to_vec2().norm();
        let angle = normalize_angle(f64::from(position.y).atan2(f64::from(position.x)));
        Self {
            start,
            end,
            position,
            magnitude,
            angle,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.position == Point::ORIGIN
    }

    /// Tip-to-tail angle between `self` and `other`, in `[0, 2π)`.
    ///
    /// `other` is placed tail-first at its own tip and reversed, and the result
    /// is the anticlockwise sweep from `self` to that reversed direction. With
    /// `other` the edge arriving at a vertex and `self` the edge leaving it:
    /// - a right (clockwise-wrap convex) turn gives a value in `(π, 2π)`,
    /// - going straight on gives exactly `π`,
    /// - doubling back along `other` gives exactly `0`.
    ///
    /// Errors with `InvalidGeometry` if either vector has zero length.
    pub fn angle_to(&self, other: &Vector) -> Result<f64, HullError> {
        if self.is_zero() || other.is_zero() {
            return Err(HullError::InvalidGeometry(format!(
                "angle between {} -> {} and {} -> {} is undefined for a zero-length vector",
                self.start, self.end, other.start, other.end
            )));
        }
        let back = (-i128::from(other.position.x), -i128::from(other.position.y));
        let own = (i128::from(self.position.x), i128::from(self.position.y));
        let cross = own.0 * back.1 - own.1 * back.0;
        let dot = own.0 * back.0 + own.1 * back.1;
        Ok(normalize_angle((cross as f64).atan2(dot as f64)))
    }

    /// Side of the directed line through this vector that `p` lies on.
    pub fn orientation(&self, p: Point) -> Orientation {
        let rel = p.minus(&self.start);
        match cross(self.position, rel).signum() {
            1 => Orientation::Left,
            -1 => Orientation::Right,
            _ => Orientation::Colinear,
        }
    }

    /// Exact squared length.
    #[inline]
    pub fn norm_squared(&self) -> i128 {
        dot(self.position, self.position)
    }

    /// True if both vectors are non-zero and point in exactly the same direction.
    pub fn is_codirectional(&self, other: &Vector) -> bool {
        !self.is_zero()
            && !other.is_zero()
            && cross(self.position, other.position) == 0
            && dot(self.position, other.position) > 0
    }
}

#[inline]
fn cross(a: Point, b: Point) -> i128 {
    i128::from(a.x) * i128::from(b.y) - i128::from(a.y) * i128::from(b.x)
}

#[inline]
fn dot(a: Point, b: Point) -> i128 {
    i128::from(a.x) * i128::from(b.x) + i128::from(a.y) * i128::from(b.y)
}
