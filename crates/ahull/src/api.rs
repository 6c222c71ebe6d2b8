//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI,
//!   benches, and experiments. Breaking changes are allowed and expected.

// Planar primitives
pub use crate::geom2::{Ball, HalfPlane, Intersection, Line, Region, Segment};
// Random disk sets
pub use crate::geom2::rand::{draw_disks, DiskCount, ReplayToken, SampleCfg};
// Arc algebra
pub use crate::arc::{ArcError, CircArc};
// Assembly
pub use crate::hull::{
    boundary_length, clip_arcs, compute_ahull, AlphaHull, ArcRecord, ClipMode, Complement,
    ComplementError, ComplementRow, HullCfg, HullError, PairwiseUnion, UnionBoundary,
};

/// Pre: `complement` rows use the `(c1, c2, r)` encoding of `hull::complement`.
/// Post: the alpha-hull built with `PairwiseUnion` and the default `HullCfg`.
pub fn ahull_with_defaults(complement: Complement, alpha: f64) -> Result<AlphaHull, HullError> {
    compute_ahull((), complement, alpha, &PairwiseUnion, HullCfg::default())
}
