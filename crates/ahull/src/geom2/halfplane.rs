//! Open half-planes bounded by a sloped or a vertical line.

use nalgebra::Vector2;

use super::util::rotate;
use super::{Ball, Region};
use crate::arc::CircArc;

/// Open half-plane.
///
/// - `Sloped`: `y > slope·x + intercept` if `greater`, else `y < slope·x + intercept`.
/// - `Vertical`: `x > x0` if `greater`, else `x < x0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HalfPlane {
    Sloped {
        slope: f64,
        intercept: f64,
        greater: bool,
    },
    Vertical {
        x0: f64,
        greater: bool,
    },
}

impl HalfPlane {
    #[inline]
    pub fn sloped(slope: f64, intercept: f64, greater: bool) -> Self {
        HalfPlane::Sloped {
            slope,
            intercept,
            greater,
        }
    }

    #[inline]
    pub fn vertical(x0: f64, greater: bool) -> Self {
        HalfPlane::Vertical { x0, greater }
    }

    /// Side flag: true for the `>` form.
    #[inline]
    pub fn greater(&self) -> bool {
        match *self {
            HalfPlane::Sloped { greater, .. } | HalfPlane::Vertical { greater, .. } => greater,
        }
    }

    /// Unit normal `n` pointing into the region and offset `k`, so the region
    /// is `{ p : n·p > k }`.
    fn normal_form(&self) -> (Vector2<f64>, f64) {
        let (n, k) = match *self {
            HalfPlane::Sloped {
                slope, intercept, ..
            } => {
                let s = (1.0 + slope * slope).sqrt();
                (Vector2::new(-slope, 1.0) / s, intercept / s)
            }
            HalfPlane::Vertical { x0, .. } => (Vector2::new(1.0, 0.0), x0),
        };
        if self.greater() {
            (n, k)
        } else {
            (-n, -k)
        }
    }

    /// Part of the circle of `ball` strictly inside the half-plane.
    ///
    /// `None` if the circle misses the open region (disjoint or tangent from
    /// outside); the full circle if it lies entirely inside.
    pub fn circle_arc(&self, ball: &Ball) -> Option<CircArc> {
        let (n, k) = self.normal_form();
        // c + r·u is inside iff n·u > t
        let t = (k - n.dot(&ball.center)) / ball.radius;
        if t >= 1.0 {
            return None;
        }
        if t < -1.0 {
            return Some(CircArc::full(*ball));
        }
        let phi = t.acos();
        Some(CircArc::new(*ball, rotate(n, -phi), 2.0 * phi))
    }
}

impl Region for HalfPlane {
    #[inline]
    fn contains(&self, p: Vector2<f64>) -> bool {
        match *self {
            HalfPlane::Sloped {
                slope,
                intercept,
                greater,
            } => {
                let line = slope * p.x + intercept;
                if greater {
                    p.y > line
                } else {
                    p.y < line
                }
            }
            HalfPlane::Vertical { x0, greater } => {
                if greater {
                    p.x > x0
                } else {
                    p.x < x0
                }
            }
        }
    }
}
