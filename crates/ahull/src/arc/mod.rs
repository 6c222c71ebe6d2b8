//! Circular arcs and interval arithmetic on a circle.
//!
//! Purpose
//! - `CircArc`: an arc of a `Ball`'s circle, stored as a unit start direction
//!   `v` and a counter-clockwise width `alpha ∈ [0, 2π]`. `alpha == 0` is a
//!   single point (null arc), `alpha == 2π` the full circle.
//! - Set difference of two arcs on the same circle, and the derived
//!   `remove_ball` / `remove_half_plane`.
//!
//! Algorithm (`diff`)
//! - Rotate both arcs so the minuend starts at angle 0, classify the
//!   subtrahend `[θ1, θ2]` against `[0, alpha]` into one of eight orderings
//!   (`Overlap`), and rebuild the remainder in the original frame.
//! - A subtrahend that fits none of the orderings is a defect in the case
//!   split and is reported as `ArcError::Unclassified`.
//!
//! Numerics
//! - "Same circle" is exact equality of `Ball`s; angle comparisons are exact.

mod circ_arc;
mod diff;

pub use circ_arc::CircArc;

use thiserror::Error;

/// Failures of the arc algebra that must not be absorbed.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ArcError {
    /// No ordering of `{0, alpha, θ1, θ2}` matched in `diff`.
    #[error("arc difference matched no case (alpha={alpha}, theta1={theta1}, theta2={theta2})")]
    Unclassified { alpha: f64, theta1: f64, theta2: f64 },
}
