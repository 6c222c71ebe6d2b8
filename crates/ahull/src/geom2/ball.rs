//! Open disk `{ p : |p - c| < r }`.

use std::f64::consts::PI;

use nalgebra::Vector2;

use super::util::{ccw_angle, orthogonal};
use super::Region;
use crate::arc::CircArc;

/// Open disk with center `center` and radius `radius > 0`.
///
/// Equality is exact on `(center, radius)`. Two balls with the same center
/// are `concentric` regardless of radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub center: Vector2<f64>,
    pub radius: f64,
}

/// Intersection points of two circles.
///
/// `Crossing(p, q)` keeps a fixed orientation: walking counter-clockwise on
/// the first circle from `p` to `q` traces the part inside the second disk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    Empty,
    Tangent(Vector2<f64>),
    Crossing(Vector2<f64>, Vector2<f64>),
}

impl Intersection {
    pub fn len(&self) -> usize {
        match self {
            Intersection::Empty => 0,
            Intersection::Tangent(_) => 1,
            Intersection::Crossing(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Intersection::Empty)
    }

    pub fn points(&self) -> Vec<Vector2<f64>> {
        match *self {
            Intersection::Empty => Vec::new(),
            Intersection::Tangent(p) => vec![p],
            Intersection::Crossing(p, q) => vec![p, q],
        }
    }
}

impl Ball {
    #[inline]
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn from_coords(cx: f64, cy: f64, radius: f64) -> Self {
        Self::new(Vector2::new(cx, cy), radius)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Exact test `|p - c|² == r²`.
    #[inline]
    pub fn is_on_bound(&self, p: Vector2<f64>) -> bool {
        (p - self.center).norm_squared() == self.radius * self.radius
    }

    #[inline]
    pub fn concentric(&self, other: &Ball) -> bool {
        self.center == other.center
    }

    /// True if `other` lies entirely inside `self` (`d ≤ |r1 - r2|` and `r1 ≥ r2`).
    #[inline]
    pub fn contains_ball(&self, other: &Ball) -> bool {
        self.center.metric_distance(&other.center) <= (self.radius - other.radius).abs()
            && self.radius >= other.radius
    }

    /// Intersection points of the two circles.
    ///
    /// Concentric balls have no well-defined chord: the call logs a warning
    /// and reports `Empty`.
    pub fn intersections(&self, other: &Ball) -> Intersection {
        if self.concentric(other) {
            tracing::warn!(ball = ?self, other = ?other, "intersection of concentric balls");
            return Intersection::Empty;
        }

        let (r1, r2) = (self.radius, other.radius);
        let d = self.center.metric_distance(&other.center);
        if d > r1 + r2 || d < (r1 - r2).abs() {
            return Intersection::Empty;
        }

        // a: distance from c1 to the chord, h: half chord length
        let a = (d + (r1 * r1 - r2 * r2) / d) / 2.0;
        let h = (r1 * r1 - a * a).max(0.0).sqrt();
        let v = other.center - self.center;
        let v_orth = orthogonal(v);
        let foot = self.center + v * (a / d);
        let p = foot - v_orth * (h / d);
        if h > 0.0 {
            Intersection::Crossing(p, foot + v_orth * (h / d))
        } else {
            Intersection::Tangent(p)
        }
    }

    /// Arc of this circle that lies inside `other`.
    ///
    /// Null (`alpha == 0`) unless the circles cross in two points.
    pub fn intersection_arc(&self, other: &Ball) -> CircArc {
        match self.intersections(other) {
            Intersection::Crossing(p, q) => {
                let u = p - self.center;
                let w = q - self.center;
                CircArc::new(*self, u, ccw_angle(u, w))
            }
            _ => CircArc::null(*self),
        }
    }

    /// Hash key on the bit patterns of `(cx, cy, r)`; `-0.0` folds onto `0.0`.
    #[inline]
    pub(crate) fn key(&self) -> (u64, u64, u64) {
        (
            (self.center.x + 0.0).to_bits(),
            (self.center.y + 0.0).to_bits(),
            (self.radius + 0.0).to_bits(),
        )
    }
}

impl Region for Ball {
    /// Strict interior: `|p - c|² < r²`.
    #[inline]
    fn contains(&self, p: Vector2<f64>) -> bool {
        (p - self.center).norm_squared() < self.radius * self.radius
    }
}
