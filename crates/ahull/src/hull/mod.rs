//! Alpha-hull boundary assembly.
//!
//! Purpose
//! - Parse a complement table into disks and half-planes (`complement`).
//! - Obtain the boundary of the union of the disks from an injected
//!   `UnionBoundary` capability (`union`).
//! - Clip that boundary against the half-planes and package the result as an
//!   `AlphaHull` snapshot with an arc table and total length (`build`).
//!
//! Data flow
//! - complement rows → (disks, half-planes) → union boundary arcs → clipped
//!   arcs → `AlphaHull`.

mod build;
pub mod complement;
mod union;

pub use build::{boundary_length, clip_arcs, compute_ahull, AlphaHull, ArcRecord, ClipMode, HullCfg};
pub use complement::{Complement, ComplementError, ComplementRow};
pub use union::{PairwiseUnion, UnionBoundary};

use thiserror::Error;

use crate::arc::ArcError;

/// Failure of a full boundary computation. No partial result is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    #[error("invalid complement: {0}")]
    Complement(#[from] ComplementError),
    #[error(transparent)]
    Arc(#[from] ArcError),
}
