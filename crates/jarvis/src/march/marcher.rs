use std::f64::consts::PI;

use super::state::{Candidate, Frame, MarchState, Scan};
use crate::error::HullError;
use crate::geom::{Angle, Point, Vector};
use crate::hull::ConvexHull;
use crate::model::PointCloud;

/// Stepwise gift-wrapping solver bound to one point cloud.
///
/// Each `iterate()` either measures one cloud point against the hull frontier
/// or, once every point has been measured, appends the best candidate.
/// Discard the marcher once its hull is closed.
#[derive(Debug)]
pub struct JarvisMarcher<'m> {
    model: &'m mut PointCloud,
    bound: bool,
    scan: Scan,
    steps: u64,
}

impl<'m> JarvisMarcher<'m> {
    /// Bind a marcher to `model`. Fails with `DegenerateGeometry` below 3 points.
    pub fn new(model: &'m mut PointCloud) -> Result<Self, HullError> {
        if model.len() < 3 {
            return Err(HullError::DegenerateGeometry(format!(
                "a closed hull needs at least 3 points, the cloud has {}",
                model.len()
            )));
        }
        Ok(Self {
            model,
            bound: false,
            scan: Scan::default(),
            steps: 0,
        })
    }

    /// One step of the march. Returns whether more work remains.
    pub fn iterate(&mut self) -> Result<bool, HullError> {
        if !self.bound {
            self.model.new_hull();
            self.bound = true;
        }
        if self.bound_hull()?.is_closed() {
            return Ok(false);
        }
        self.steps += 1;

        let cursor = *self.scan.cursor.get_or_insert(0);
        match self.model.points().get(cursor).copied() {
            Some(p) => {
                self.scan.cursor = Some(cursor + 1);
                self.consider(p)?;
            }
            None => self.accept_best()?,
        }
        Ok(!self.bound_hull()?.is_closed())
    }

    /// Run `iterate()` until the hull closes.
    pub fn solve(&mut self) -> Result<(), HullError> {
        while self.iterate()? {}
        let hull = self.bound_hull()?;
        tracing::debug!(
            vertices = hull.points().len(),
            points = self.model.len(),
            steps = self.steps,
            "solved"
        );
        Ok(())
    }

    fn consider(&mut self, p: Point) -> Result<(), HullError> {
        let hull = self.bound_hull()?;
        if p == hull.cur_point() {
            return Ok(());
        }
        let cand = Candidate::measure(hull, p)?;
        let accept = cand.angle.angle >= PI && self.scan.best.map_or(true, |b| cand.beats(&b));
        tracing::trace!(point = %p, angle = cand.angle.angle, accept, "candidate");
        if accept {
            self.scan.best = Some(cand);
        }
        self.scan.next = Some(cand);
        Ok(())
    }

    fn accept_best(&mut self) -> Result<(), HullError> {
        let limit = self.model.len();
        let scan = std::mem::take(&mut self.scan);
        let hull = self
            .model
            .hull_mut()
            .ok_or_else(|| HullError::IllegalState("marcher has no hull".into()))?;
        let best = scan.best.ok_or_else(|| {
            HullError::DegenerateGeometry(format!(
                "no point wraps the edge arriving at {}; the remaining points are colinear",
                hull.cur_point()
            ))
        })?;
        hull.add_point(best.point)?;
        tracing::debug!(
            vertex = %best.point,
            angle = best.angle.angle,
            vertices = hull.points().len(),
            closed = hull.is_closed(),
            "accept"
        );
        if !hull.is_closed() && hull.points().len() > limit {
            return Err(HullError::DegenerateGeometry(format!(
                "hull failed to close after {} vertices over {} points",
                hull.points().len(),
                limit
            )));
        }
        Ok(())
    }

    fn bound_hull(&self) -> Result<&ConvexHull, HullError> {
        self.hull()
            .ok_or_else(|| HullError::IllegalState("marcher has no hull".into()))
    }

    /// The hull being built; `None` until the first `iterate()`.
    pub fn hull(&self) -> Option<&ConvexHull> {
        if self.bound {
            self.model.hull()
        } else {
            None
        }
    }

    pub fn model(&self) -> &PointCloud {
        &*self.model
    }

    pub fn state(&self) -> MarchState {
        match self.hull() {
            Some(h) if h.is_closed() => MarchState::Done,
            _ if self.scan.cursor.is_some_and(|c| c >= self.model.len()) => {
                MarchState::Exhausted
            }
            _ => MarchState::Seeking,
        }
    }

    /// Resumable state for the vertex currently being sought.
    #[inline]
    pub fn scan(&self) -> &Scan {
        &self.scan
    }

    /// Number of `iterate()` calls that did work.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn next_point(&self) -> Option<Point> {
        self.scan.next.map(|c| c.point)
    }
    pub fn next_vector(&self) -> Option<Vector> {
        self.scan.next.map(|c| c.vector)
    }
    pub fn next_angle(&self) -> Option<Angle> {
        self.scan.next.map(|c| c.angle)
    }
    pub fn best_point(&self) -> Option<Point> {
        self.scan.best.map(|c| c.point)
    }
    pub fn best_vector(&self) -> Option<Vector> {
        self.scan.best.map(|c| c.vector)
    }
    pub fn best_angle(&self) -> Option<Angle> {
        self.scan.best.map(|c| c.angle)
    }

    /// Owned snapshot of hull and candidate state.
    pub fn frame(&self) -> Frame {
        let hull = self.hull();
        Frame {
            step: self.steps,
            state: self.state(),
            cursor: self.scan.cursor(),
            vertices: hull.map(|h| h.points().to_vec()).unwrap_or_default(),
            edges: hull.map(|h| h.edges().to_vec()).unwrap_or_default(),
            angles: hull.map(|h| h.angles().to_vec()).unwrap_or_default(),
            cur_point: hull.map(ConvexHull::cur_point),
            cur_vector: hull.map(ConvexHull::cur_vector),
            next: self.scan.next,
            best: self.scan.best,
        }
    }
}
