use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A lattice point. The cloud only admits quadrant-I points (`x, y >= 0`), but
/// differences between points (vector positions) may be negative.
///
/// `Ord` is lexicographic on `(x, y)`; it exists for sorted output, the march
/// itself never relies on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };
    /// Upper-right corner of the representable plane; used as the "no leftmost yet" sentinel.
    pub const MAX: Point = Point {
        x: i32::MAX,
        y: i32::MAX,
    };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `self - other`, as a free vector stored in a point.
    ///
    /// Both operands are expected to be non-negative (cloud points), which keeps
    /// the difference inside `i32`.
    #[inline]
    pub fn minus(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.to_vec2() - self.to_vec2()).norm()
    }

    /// True for `x >= 0 && y >= 0`.
    #[inline]
    pub fn in_quadrant_one(&self) -> bool {
        self.x >= 0 && self.y >= 0
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}
