//! Resumable march state and render snapshots.
//!
//! `Scan` is everything that must survive between two `iterate()` calls: the
//! cursor into the cloud and the candidates measured so far for the current
//! vertex. It is plain data, so a caller may pause a march at any step.

use serde::Serialize;

use crate::error::HullError;
use crate::geom::{Angle, Point, Vector};
use crate::hull::ConvexHull;

/// Externally visible phase of a march.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MarchState {
    /// Hull open; candidates for the current vertex are being scanned.
    Seeking,
    /// Every cloud point has been measured; the next step appends the best one.
    Exhausted,
    /// Hull closed.
    Done,
}

/// A point measured against the hull frontier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Candidate {
    pub point: Point,
    /// From the current hull vertex to `point`.
    pub vector: Vector,
    /// Tip-to-tail angle of `vector` against the current hull edge, centred at the current vertex.
    pub angle: Angle,
}

impl Candidate {
    pub(crate) fn measure(hull: &ConvexHull, point: Point) -> Result<Self, HullError> {
        let from = hull.cur_point();
        let vector = Vector::new(from, point);
        let turn = vector.angle_to(&hull.cur_vector())?;
        Ok(Self {
            point,
            vector,
            angle: Angle::new(turn, vector.angle, from),
        })
    }

    /// Whether `self` is a tighter wrap than `best`.
    ///
    /// Codirectional candidates tie exactly; the nearer one wins so colinear
    /// boundary points are walked in order and the seed is reached before
    /// anything beyond it.
    pub(crate) fn beats(&self, best: &Candidate) -> bool {
        if self.vector.is_codirectional(&best.vector) {
            self.vector.norm_squared() < best.vector.norm_squared()
        } else {
            self.angle.angle < best.angle.angle
        }
    }
}

/// Cursor plus best-so-far for the vertex currently being sought.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Scan {
    pub(crate) cursor: Option<usize>,
    pub(crate) next: Option<Candidate>,
    pub(crate) best: Option<Candidate>,
}

impl Scan {
    /// Index of the next cloud point to measure; `None` when no scan is active.
    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[inline]
    pub fn next(&self) -> Option<&Candidate> {
        self.next.as_ref()
    }

    #[inline]
    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.cursor.is_none() && self.next.is_none() && self.best.is_none()
    }
}

/// Owned snapshot of a march for renderers and trace output.
#[derive(Clone, Debug, Serialize)]
pub struct Frame {
    pub step: u64,
    pub state: MarchState,
    /// Index of the next cloud point the scan will measure.
    pub cursor: Option<usize>,
    pub vertices: Vec<Point>,
    pub edges: Vec<Vector>,
    pub angles: Vec<Angle>,
    pub cur_point: Option<Point>,
    pub cur_vector: Option<Vector>,
    pub next: Option<Candidate>,
    pub best: Option<Candidate>,
}
