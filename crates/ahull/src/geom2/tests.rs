use std::f64::consts::{PI, TAU};

use nalgebra::{vector, Vector2};
use proptest::prelude::*;

use super::rand::{draw_disks, DiskCount, ReplayToken, SampleCfg};
use super::*;

#[test]
fn ball_measures_and_membership() {
    let b = Ball::from_coords(1.0, 2.0, 2.0);
    assert!((b.area() - 4.0 * PI).abs() < 1e-12);
    assert!((b.perimeter() - 4.0 * PI).abs() < 1e-12);
    assert!(b.contains(vector![1.5, 2.5]));
    // open disk: boundary points are not inside
    assert!(!b.contains(vector![3.0, 2.0]));
    assert!(b.is_on_bound(vector![3.0, 2.0]));
    assert!(!b.is_on_bound(vector![2.0, 2.0]));
}

#[test]
fn ball_equality_and_concentricity() {
    let a = Ball::from_coords(0.0, 0.0, 1.0);
    let b = Ball::from_coords(0.0, 0.0, 2.0);
    assert_ne!(a, b);
    assert!(a.concentric(&b));
    assert_eq!(a, Ball::new(Vector2::zeros(), 1.0));
    assert_eq!(a.key(), Ball::from_coords(-0.0, 0.0, 1.0).key());
}

#[test]
fn contains_ball_cases() {
    let big = Ball::from_coords(0.0, 0.0, 2.0);
    assert!(big.contains_ball(&Ball::from_coords(0.5, 0.0, 1.0)));
    // internally tangent still counts
    assert!(big.contains_ball(&Ball::from_coords(1.0, 0.0, 1.0)));
    assert!(big.contains_ball(&big));
    assert!(!big.contains_ball(&Ball::from_coords(1.5, 0.0, 1.0)));
    assert!(!Ball::from_coords(0.5, 0.0, 1.0).contains_ball(&big));
}

#[test]
fn intersections_orientation_and_tangency() {
    let a = Ball::from_coords(0.0, 0.0, 1.0);
    let h = 0.75f64.sqrt();
    match a.intersections(&Ball::from_coords(1.0, 0.0, 1.0)) {
        Intersection::Crossing(p, q) => {
            assert!((p - vector![0.5, -h]).norm() < 1e-15);
            assert!((q - vector![0.5, h]).norm() < 1e-15);
        }
        other => panic!("expected crossing, got {other:?}"),
    }
    assert_eq!(
        a.intersections(&Ball::from_coords(2.0, 0.0, 1.0)),
        Intersection::Tangent(vector![1.0, 0.0])
    );
    // internal tangency
    assert_eq!(
        Ball::from_coords(0.0, 0.0, 2.0).intersections(&Ball::from_coords(1.0, 0.0, 1.0)),
        Intersection::Tangent(vector![2.0, 0.0])
    );
    assert!(a.intersections(&Ball::from_coords(3.0, 0.0, 1.0)).is_empty());
    assert!(a.intersections(&Ball::from_coords(0.1, 0.0, 0.2)).is_empty());
    // concentric: soft failure
    assert!(a.intersections(&Ball::from_coords(0.0, 0.0, 2.0)).is_empty());
}

#[test]
fn intersection_arc_lies_inside_other() {
    let a = Ball::from_coords(0.0, 0.0, 1.0);
    let other = Ball::from_coords(1.0, 0.0, 1.0);
    let arc = a.intersection_arc(&other);
    assert!((arc.width() - TAU / 3.0).abs() < 1e-12);
    assert!(other.contains(arc.mid_point()));
    assert!(a.intersection_arc(&Ball::from_coords(2.0, 0.0, 1.0)).is_null());
}

#[test]
fn half_plane_membership() {
    let up = HalfPlane::sloped(1.0, 0.0, true);
    assert!(up.contains(vector![0.0, 1.0]));
    assert!(!up.contains(vector![1.0, 1.0]));
    assert!(!up.contains(vector![1.0, 0.0]));
    let down = HalfPlane::sloped(1.0, 0.0, false);
    assert!(down.contains(vector![1.0, 0.0]));
    let right = HalfPlane::vertical(2.0, true);
    assert!(right.contains(vector![3.0, -7.0]));
    assert!(!right.contains(vector![2.0, 0.0]));
    assert!(HalfPlane::vertical(2.0, false).contains(vector![1.0, 0.0]));
    assert!(right.greater() && !down.greater());
}

#[test]
fn half_plane_circle_arc() {
    let b = Ball::from_coords(0.0, 0.0, 1.0);
    // y > 0.5 cuts a third of the circle around (0, 1)
    let arc = HalfPlane::sloped(0.0, 0.5, true).circle_arc(&b).unwrap();
    assert!((arc.width() - TAU / 3.0).abs() < 1e-12);
    assert!((arc.mid_vector() - vector![0.0, 1.0]).norm() < 1e-12);
    // x < -3 misses the circle; x < 3 holds all of it
    assert!(HalfPlane::vertical(-3.0, false).circle_arc(&b).is_none());
    assert!(HalfPlane::vertical(3.0, false).circle_arc(&b).unwrap().is_full());
    // tangent line from outside: nothing strictly inside
    assert!(HalfPlane::vertical(1.0, true).circle_arc(&b).is_none());
}

#[test]
fn segment_lines() {
    let s = Segment::new(vector![0.0, 1.0], vector![2.0, 5.0]).unwrap();
    assert_eq!(s.slope(), Some(2.0));
    assert_eq!(s.intercept(), Some(1.0));
    let v = Segment::new(vector![1.0, 0.0], vector![1.0, 3.0]).unwrap();
    assert!(v.is_vertical());
    assert_eq!(v.slope(), None);
    assert_eq!(v.line(), Line::Vertical { x0: 1.0 });
    assert!(Segment::new(vector![1.0, 1.0], vector![1.0, 1.0]).is_none());
}

#[test]
fn segment_intersections() {
    let s = |a: [f64; 2], b: [f64; 2]| Segment::new(a.into(), b.into()).unwrap();
    // proper crossing
    assert!(s([0.0, 0.0], [2.0, 2.0]).intersect(&s([0.0, 2.0], [2.0, 0.0])));
    // apart
    assert!(!s([0.0, 0.0], [1.0, 0.0]).intersect(&s([2.0, 1.0], [3.0, 5.0])));
    // collinear overlap and collinear touching at an endpoint
    assert!(s([0.0, 0.0], [2.0, 2.0]).intersect(&s([1.0, 1.0], [3.0, 3.0])));
    assert!(!s([0.0, 0.0], [1.0, 1.0]).intersect(&s([1.0, 1.0], [2.0, 2.0])));
    // vertical against sloped
    assert!(s([1.0, -1.0], [1.0, 1.0]).intersect(&s([0.0, 0.0], [2.0, 0.5])));
}

#[test]
fn segment_range_is_open() {
    let s = Segment::new(vector![0.0, 0.0], vector![2.0, 2.0]).unwrap();
    assert!(s.in_range(vector![1.0, 1.5]));
    assert!(!s.in_range(vector![0.0, 0.0]));
    assert!(!s.in_range(vector![2.0, 1.0]));
    assert!(s.inside(vector![1.0, 1.0]));
    assert!(!s.inside(vector![1.0, 1.5]));
    // degenerate span on y
    let flat = Segment::new(vector![0.0, 0.0], vector![2.0, 0.0]).unwrap();
    assert!(!flat.in_range(vector![1.0, 0.0]));
}

#[test]
fn angles() {
    assert_eq!(angle_of(vector![1.0, 0.0]), 0.0);
    assert!((angle_of(vector![0.0, -1.0]) - 1.5 * PI).abs() < 1e-12);
    assert!((ccw_angle(vector![0.0, 1.0], vector![1.0, 0.0]) - 1.5 * PI).abs() < 1e-12);
    assert_eq!(orthogonal(vector![1.0, 2.0]), vector![-2.0, 1.0]);
    assert!((rotate(vector![1.0, 0.0], PI) - vector![-1.0, 0.0]).norm() < 1e-15);
}

#[test]
fn sampler_is_replayable() {
    let cfg = SampleCfg {
        disk_count: DiskCount::Uniform { min: 3, max: 9 },
        ..SampleCfg::default()
    };
    let tok = ReplayToken { seed: 7, index: 3 };
    let a = draw_disks(cfg, tok);
    assert_eq!(a, draw_disks(cfg, tok));
    assert!((3..=9).contains(&a.len()));
    assert!(a
        .iter()
        .all(|b| b.radius >= cfg.radius_min && b.radius <= cfg.radius_max));
    assert_ne!(a, draw_disks(cfg, ReplayToken { seed: 7, index: 4 }));
}

proptest! {
    #[test]
    fn intersection_points_lie_on_both_circles(
        x1 in -5.0f64..5.0, y1 in -5.0f64..5.0, r1 in 0.1f64..3.0,
        x2 in -5.0f64..5.0, y2 in -5.0f64..5.0, r2 in 0.1f64..3.0,
    ) {
        let a = Ball::from_coords(x1, y1, r1);
        let b = Ball::from_coords(x2, y2, r2);
        prop_assume!(!a.concentric(&b));
        let d = a.center.metric_distance(&b.center);
        let found = a.intersections(&b);
        if found.is_empty() {
            prop_assert!(d > r1 + r2 || d < (r1 - r2).abs());
        }
        if d < r1 + r2 - 1e-6 && d > (r1 - r2).abs() + 1e-6 {
            prop_assert_eq!(found.len(), 2);
        }
        for p in found.points() {
            prop_assert!(((p - a.center).norm() - r1).abs() < 1e-9);
            prop_assert!(((p - b.center).norm() - r2).abs() < 1e-9);
        }
    }
}
