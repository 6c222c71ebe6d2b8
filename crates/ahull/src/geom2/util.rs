use nalgebra::Vector2;
use std::f64::consts::TAU;

/// Map an angle from `atan2` range into `[0, 2π)`.
#[inline]
fn wrap_tau(theta: f64) -> f64 {
    let t = if theta < 0.0 { theta + TAU } else { theta };
    // -ε + 2π can round up to exactly 2π
    if t >= TAU {
        0.0
    } else {
        t
    }
}

/// Direction angle of `v`, in `[0, 2π)`.
#[inline]
pub fn angle_of(v: Vector2<f64>) -> f64 {
    wrap_tau(v.y.atan2(v.x))
}

/// Counter-clockwise angle from `u` to `w`, in `[0, 2π)`.
#[inline]
pub fn ccw_angle(u: Vector2<f64>, w: Vector2<f64>) -> f64 {
    let cross = u.x * w.y - u.y * w.x;
    wrap_tau(cross.atan2(u.dot(&w)))
}

/// `v` rotated by +90°.
#[inline]
pub fn orthogonal(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// `v` rotated counter-clockwise by `theta`.
#[inline]
pub fn rotate(v: Vector2<f64>, theta: f64) -> Vector2<f64> {
    let (s, c) = theta.sin_cos();
    Vector2::new(c * v.x - s * v.y, s * v.x + c * v.y)
}

#[inline]
pub(crate) fn normalize(v: Vector2<f64>) -> Option<Vector2<f64>> {
    let norm = v.norm();
    if !(norm.is_finite()) || norm <= 0.0 {
        return None;
    }
    Some(v / norm)
}
