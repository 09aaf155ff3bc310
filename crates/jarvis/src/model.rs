//! Point-cloud model: the input set plus the hull being built over it.
//!
//! Invariants
//! - Points are unique and kept in insertion order (the order the marcher scans).
//! - `bounds` is the componentwise max of every point added since the last clear.
//! - `leftmost` has the minimal x; ties keep the first point that reached it.
//! - The hull is replaced through `new_hull` and only mutated by the marcher.

use std::collections::HashSet;

use crate::error::HullError;
use crate::geom::Point;
use crate::hull::ConvexHull;

#[derive(Clone, Debug)]
pub struct PointCloud {
    order: Vec<Point>,
    members: HashSet<Point>,
    bounds: Point,
    leftmost: Point,
    hull: Option<ConvexHull>,
}

impl Default for PointCloud {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            members: HashSet::new(),
            bounds: Point::ORIGIN,
            leftmost: Point::MAX,
            hull: None,
        }
    }
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quadrant-I point. Duplicates are ignored and leave bounds/leftmost untouched.
    pub fn add_point(&mut self, p: Point) -> Result<(), HullError> {
        if !p.in_quadrant_one() {
            return Err(HullError::InvalidArgument(format!(
                "only quadrant I points (x >= 0, y >= 0) can join the cloud, got {p}"
            )));
        }
        if self.members.insert(p) {
            self.order.push(p);
            self.update_bounds(p);
            self.update_leftmost(p);
        }
        Ok(())
    }

    /// Add every point from `points`, stopping at the first invalid one.
    /// Returns how many points were actually inserted (duplicates excluded).
    pub fn extend<I>(&mut self, points: I) -> Result<usize, HullError>
    where
        I: IntoIterator<Item = Point>,
    {
        let before = self.order.len();
        for p in points {
            self.add_point(p)?;
        }
        Ok(self.order.len() - before)
    }

    fn update_bounds(&mut self, p: Point) {
        self.bounds = Point::new(self.bounds.x.max(p.x), self.bounds.y.max(p.y));
    }

    fn update_leftmost(&mut self, p: Point) {
        if p.x < self.leftmost.x {
            self.leftmost = p;
        }
    }

    /// Drop every point and the hull; bounds and leftmost return to their sentinels.
    pub fn clear_points(&mut self) {
        self.order.clear();
        self.members.clear();
        self.bounds = Point::ORIGIN;
        self.leftmost = Point::MAX;
        self.hull = None;
    }

    /// Replace the current hull with a fresh one seeded at the leftmost point.
    pub fn new_hull(&mut self) -> &ConvexHull {
        tracing::debug!(seed = %self.leftmost, points = self.order.len(), "new_hull");
        self.hull.insert(ConvexHull::seeded(self.leftmost))
    }

    #[inline]
    pub fn hull(&self) -> Option<&ConvexHull> {
        self.hull.as_ref()
    }

    #[inline]
    pub(crate) fn hull_mut(&mut self) -> Option<&mut ConvexHull> {
        self.hull.as_mut()
    }

    /// Points in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.order
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.members.contains(p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn bounds(&self) -> Point {
        self.bounds
    }

    #[inline]
    pub fn leftmost(&self) -> Point {
        self.leftmost
    }
}
