//! Gift-wrapping (Jarvis' march) convex hulls, one step at a time.
//!
//! Layers, leaves first:
//! - `geom`: integer points, vectors, and angle records.
//! - `model`: the point cloud, its bounds, leftmost point and current hull.
//! - `hull`: the append-only, closeable hull.
//! - `march`: the resumable solver (`iterate` / `solve`).
//! - `sample`, `verify`: seeded clouds and post-hoc hull checks.
//!
//! Callers that animate the construction call `JarvisMarcher::iterate` on
//! their own cadence and read `JarvisMarcher::frame` (or the individual
//! accessors) between calls.

pub mod error;
pub mod geom;
pub mod hull;
pub mod march;
pub mod model;
pub mod sample;
pub mod verify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::HullError;
pub use geom::{Angle, Point, Vector};
pub use hull::ConvexHull;
pub use march::{convex_hull, JarvisMarcher, MarchState};
pub use model::PointCloud;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::HullError;
    pub use crate::geom::{Angle, Orientation, Point, Vector};
    pub use crate::hull::ConvexHull;
    pub use crate::march::{convex_hull, Candidate, Frame, JarvisMarcher, MarchState, Scan};
    pub use crate::model::PointCloud;
    pub use crate::sample::{draw_cloud, fill_model, CloudCfg, Distribution, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
