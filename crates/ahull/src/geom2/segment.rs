//! Open segments and their supporting lines.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// Supporting line of a segment. Vertical lines keep their own variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
    Sloped { slope: f64, intercept: f64 },
    Vertical { x0: f64 },
}

impl Line {
    /// Line through `p` and `q` (`p != q`).
    pub fn through(p: Vector2<f64>, q: Vector2<f64>) -> Self {
        if p.x == q.x {
            Line::Vertical { x0: p.x }
        } else {
            let slope = (q.y - p.y) / (q.x - p.x);
            Line::Sloped {
                slope,
                intercept: q.y - q.x * slope,
            }
        }
    }

    /// Signed evaluation of the line equation at `p`; only the sign is meaningful.
    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        match *self {
            Line::Sloped { slope, intercept } => p.y - (slope * p.x + intercept),
            Line::Vertical { x0 } => p.x - x0,
        }
    }

    /// Side of `p` w.r.t. the line (`Equal` when exactly on it).
    #[inline]
    pub fn side(&self, p: Vector2<f64>) -> Ordering {
        self.eval(p).partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }
}

/// Open segment `(p, q)` with `p != q`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p: Vector2<f64>,
    pub q: Vector2<f64>,
}

impl Segment {
    /// `None` if the endpoints coincide.
    pub fn new(p: Vector2<f64>, q: Vector2<f64>) -> Option<Self> {
        if p == q {
            return None;
        }
        Some(Self { p, q })
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.p.x == self.q.x
    }

    #[inline]
    pub fn line(&self) -> Line {
        Line::through(self.p, self.q)
    }

    /// `None` for vertical segments.
    pub fn slope(&self) -> Option<f64> {
        match self.line() {
            Line::Sloped { slope, .. } => Some(slope),
            Line::Vertical { .. } => None,
        }
    }

    /// `None` for vertical segments.
    pub fn intercept(&self) -> Option<f64> {
        match self.line() {
            Line::Sloped { intercept, .. } => Some(intercept),
            Line::Vertical { .. } => None,
        }
    }

    /// Orientation-test crossing check.
    ///
    /// Each segment's endpoints must fall on different sides of the other's
    /// line. Collinear segments intersect when an endpoint of `other` lies
    /// strictly within this segment's span.
    pub fn intersect(&self, other: &Segment) -> bool {
        let (l1, l2) = (self.line(), other.line());
        let s1 = l1.side(other.p);
        let s2 = l1.side(other.q);
        let s3 = l2.side(self.p);
        let s4 = l2.side(self.q);
        if s1 != s2 && s3 != s4 {
            return true;
        }
        if s1 == Ordering::Equal && s2 == Ordering::Equal {
            return self.in_range(other.p) || self.in_range(other.q);
        }
        false
    }

    /// Strict bounding-box test on both axes.
    ///
    /// The box is open, so endpoints are excluded, and a horizontal or vertical
    /// segment (degenerate span on one axis) contains no point.
    pub fn in_range(&self, point: Vector2<f64>) -> bool {
        let within = |a: f64, b: f64, t: f64| a.min(b) < t && t < a.max(b);
        within(self.p.x, self.q.x, point.x) && within(self.p.y, self.q.y, point.y)
    }

    /// On the supporting line and strictly in range.
    pub fn inside(&self, point: Vector2<f64>) -> bool {
        self.line().eval(point) == 0.0 && self.in_range(point)
    }
}
