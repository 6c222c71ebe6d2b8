//! Planar primitives for the alpha-hull complement.
//!
//! Purpose
//! - `Ball`: open disk with exact equality, containment, and the two-circle
//!   intersection used to build intersection arcs.
//! - `HalfPlane`: open half-plane, either sloped (`y ≷ a·x + b`) or vertical
//!   (`x ≷ x0`). The two forms stay separate variants; a vertical line has no
//!   finite slope.
//! - `Segment`/`Line`: open segments and their supporting lines, used when
//!   building complements from a triangulation.
//!
//! Numerics
//! - Boundary and tangency tests compare exactly. No tolerance is applied.

mod ball;
mod halfplane;
pub mod rand;
mod segment;
mod util;

pub use ball::{Ball, Intersection};
pub use halfplane::HalfPlane;
pub use segment::{Line, Segment};
pub use util::{angle_of, ccw_angle, orthogonal, rotate};
pub(crate) use util::normalize;

use nalgebra::Vector2;

/// Open planar region.
pub trait Region {
    /// True if `p` lies in the open interior.
    fn contains(&self, p: Vector2<f64>) -> bool;
}

#[cfg(test)]
mod tests;
