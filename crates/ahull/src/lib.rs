//! Alpha-hull boundaries from a complement of open disks and half-planes.
//!
//! The complement of an alpha-hull is a union of open disks and open
//! half-planes. Its boundary is a list of circular arcs: the boundary of the
//! union of the disks, clipped against the half-planes.
//!
//! Layout
//! - `geom2`: planar primitives (`Ball`, `HalfPlane`, `Segment`/`Line`) and a
//!   seeded disk sampler.
//! - `arc`: `CircArc` and the interval algebra on a circle (`diff`,
//!   `remove_ball`, `remove_half_plane`).
//! - `hull`: complement parsing, the union-boundary capability, and boundary
//!   assembly into an `AlphaHull`.
//!
//! Numerics
//! - All comparisons in the arc algebra are exact (`==` on `f64`). Tangency
//!   and "same circle" are only detected when the inputs hit them exactly.

pub mod api;
pub mod arc;
pub mod geom2;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arc::{ArcError, CircArc};
    pub use crate::geom2::rand::{draw_disks, DiskCount, ReplayToken, SampleCfg};
    pub use crate::geom2::{Ball, HalfPlane, Intersection, Line, Region, Segment};
    pub use crate::hull::{
        compute_ahull, AlphaHull, ArcRecord, ClipMode, Complement, HullCfg, HullError,
        PairwiseUnion, UnionBoundary,
    };
    pub use nalgebra::Vector2 as Vec2;
}
