use std::f64::consts::TAU;

use nalgebra::Vector2;

use super::ArcError;
use crate::geom2::{angle_of, normalize, rotate, Ball, HalfPlane};

/// Arc of the circle of `ball`, sweeping counter-clockwise from the unit
/// direction `v` by `alpha`.
///
/// Invariants:
/// - `v` is unit length.
/// - `alpha ∈ [0, 2π]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircArc {
    pub(super) ball: Ball,
    pub(super) v: Vector2<f64>,
    pub(super) alpha: f64,
}

impl CircArc {
    /// Normalizes `v` and keeps `alpha` in `[0, 2π]`.
    ///
    /// A zero (or non-finite) direction falls back to `(1, 0)`; an out-of-range
    /// width is clamped. Both log a warning.
    pub fn new(ball: Ball, v: Vector2<f64>, alpha: f64) -> Self {
        let v = normalize(v).unwrap_or_else(|| {
            tracing::warn!(v = ?v, "arc direction has null norm; using (1, 0)");
            Vector2::x()
        });
        let alpha = if (0.0..=TAU).contains(&alpha) {
            alpha
        } else {
            tracing::warn!(alpha, "arc width not in [0, 2pi]; clamping");
            if alpha.is_nan() {
                0.0
            } else {
                alpha.clamp(0.0, TAU)
            }
        };
        Self { ball, v, alpha }
    }

    /// Whole circle, starting at `(1, 0)`.
    #[inline]
    pub fn full(ball: Ball) -> Self {
        Self {
            ball,
            v: Vector2::x(),
            alpha: TAU,
        }
    }

    /// Degenerate arc: the single point `c + (r, 0)`.
    #[inline]
    pub fn null(ball: Ball) -> Self {
        Self {
            ball,
            v: Vector2::x(),
            alpha: 0.0,
        }
    }

    #[inline]
    pub fn ball(&self) -> Ball {
        self.ball
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.alpha
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.alpha == 0.0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.alpha == TAU
    }

    // Directions from the center.
    #[inline]
    pub fn vector(&self) -> Vector2<f64> {
        self.v
    }
    #[inline]
    pub fn end_vector(&self) -> Vector2<f64> {
        rotate(self.v, self.alpha)
    }
    #[inline]
    pub fn mid_vector(&self) -> Vector2<f64> {
        rotate(self.v, self.alpha / 2.0)
    }

    // Points in the plane.
    #[inline]
    pub fn point(&self) -> Vector2<f64> {
        self.ball.center + self.v * self.ball.radius
    }
    #[inline]
    pub fn end_point(&self) -> Vector2<f64> {
        self.ball.center + self.end_vector() * self.ball.radius
    }
    #[inline]
    pub fn mid_point(&self) -> Vector2<f64> {
        self.ball.center + self.mid_vector() * self.ball.radius
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.alpha * self.ball.radius
    }

    /// Start angle, in `[0, 2π)`.
    #[inline]
    pub fn theta1(&self) -> f64 {
        angle_of(self.v)
    }

    /// End angle, in `(0, 2π]` for non-null arcs.
    #[inline]
    pub fn theta2(&self) -> f64 {
        let t = self.theta1() + self.alpha;
        if t > TAU {
            t - TAU
        } else {
            t
        }
    }

    /// Same circle and width; start direction rotated counter-clockwise by `theta`.
    #[inline]
    pub fn rotate(&self, theta: f64) -> Self {
        Self::new(self.ball, rotate(self.v, theta), self.alpha)
    }

    /// Part of this arc outside the open disk `other`.
    pub fn remove_ball(&self, other: &Ball) -> Result<Vec<CircArc>, ArcError> {
        if other.contains_ball(&self.ball) {
            return Ok(Vec::new());
        }
        if self.ball.contains_ball(other) {
            return Ok(vec![*self]);
        }
        let cut = self.ball.intersection_arc(other);
        if cut.is_null() {
            Ok(vec![*self])
        } else {
            self.diff(&cut)
        }
    }

    /// Part of this arc outside the open half-plane `hp`.
    pub fn remove_half_plane(&self, hp: &HalfPlane) -> Result<Vec<CircArc>, ArcError> {
        match hp.circle_arc(&self.ball) {
            Some(cut) if !cut.is_null() => self.diff(&cut),
            _ => Ok(vec![*self]),
        }
    }
}
