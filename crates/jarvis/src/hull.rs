//! Append-only convex hull under construction.
//!
//! Layout
//! - `points[i]` is the i-th hull vertex, `points[0]` the seed.
//! - `edges[i]` runs from `points[i]` to the next vertex (the last one back to
//!   the seed once closed).
//! - `angles[i]` is the corner at `points[i]`, measured between `edges[i]` and
//!   the edge arriving at `points[i]` (for the seed: the synthetic upward
//!   reference edge).
//!
//! Invariants
//! - Closed once the seed is appended again; the seed is never duplicated.
//! - No mutation after closing.
//! - Every vertex is a quadrant-I point, so edge positions fit in `i32`.

use crate::error::HullError;
use crate::geom::{Angle, Point, Vector};

#[derive(Clone, Debug)]
pub struct ConvexHull {
    points: Vec<Point>,
    edges: Vec<Vector>,
    angles: Vec<Angle>,
    cur_point: Point,
    cur_vector: Vector,
    closed: bool,
}

impl ConvexHull {
    /// Hull holding only `seed`, entered from directly below.
    ///
    /// Errors with `InvalidArgument` if `seed` is outside quadrant I.
    pub fn new(seed: Point) -> Result<Self, HullError> {
        check_vertex(seed)?;
        Ok(Self::seeded(seed))
    }

    /// `seed` must already be a quadrant-I point (or the empty-cloud sentinel).
    pub(crate) fn seeded(seed: Point) -> Self {
        Self {
            points: vec![seed],
            edges: Vec::new(),
            angles: Vec::new(),
            cur_point: seed,
            cur_vector: Self::reference_edge(seed),
            closed: false,
        }
    }

    /// Unit edge pointing along +Y into `seed`; the first corner is measured against it.
    pub fn reference_edge(seed: Point) -> Vector {
        Vector::new(Point::new(seed.x, seed.y - 1), seed)
    }

    /// Append `p` as the next vertex, recording the edge to it and the corner
    /// angle at the vertex being left.
    ///
    /// Appending the seed closes the hull.
    pub fn add_point(&mut self, p: Point) -> Result<(), HullError> {
        check_vertex(p)?;
        if self.closed {
            return Err(HullError::IllegalState(format!(
                "cannot add {p}: the hull is already closed"
            )));
        }
        if p == self.cur_point {
            return Err(HullError::InvalidArgument(format!(
                "cannot add {p}: it is the current hull vertex"
            )));
        }
        let old_point = self.cur_point;
        let old_edge = self.cur_vector;
        let new_edge = Vector::new(old_point, p);
        let corner = new_edge.angle_to(&old_edge)?;

        if p == self.seed() {
            self.closed = true;
        } else {
            self.points.push(p);
        }
        self.edges.push(new_edge);
        self.angles.push(Angle::new(corner, new_edge.angle, old_point));
        self.cur_point = p;
        self.cur_vector = new_edge;
        Ok(())
    }

    #[inline]
    pub fn seed(&self) -> Point {
        self.points[0]
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn edges(&self) -> &[Vector] {
        &self.edges
    }

    #[inline]
    pub fn angles(&self) -> &[Angle] {
        &self.angles
    }

    /// Most recently accepted vertex.
    #[inline]
    pub fn cur_point(&self) -> Point {
        self.cur_point
    }

    /// Edge arriving at `cur_point` (the reference edge before the first append).
    #[inline]
    pub fn cur_vector(&self) -> Vector {
        self.cur_vector
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

fn check_vertex(p: Point) -> Result<(), HullError> {
    if p.in_quadrant_one() {
        Ok(())
    } else {
        Err(HullError::InvalidArgument(format!(
            "hull vertices must lie in quadrant I (x >= 0, y >= 0), got {p}"
        )))
    }
}
