//! Clip the union boundary against half-planes and package the result.

use nalgebra::Vector2;

use super::{Complement, HullError, UnionBoundary};
use crate::arc::{ArcError, CircArc};
use crate::geom2::{HalfPlane, Region};

/// How arcs are clipped against half-planes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClipMode {
    /// Drop every arc whose midpoint lies in a half-plane. Arcs are never split;
    /// complements built from a triangulation only produce arcs that end on
    /// the half-plane lines.
    #[default]
    Midpoint,
    /// Subtract the part of each circle inside each half-plane, splitting arcs
    /// that cross a half-plane line.
    Split,
}

/// Assembly configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullCfg {
    pub clip: ClipMode,
}

/// One row of the arc table (`c1, c2, r, vx, vy, theta, end1, end2`).
///
/// `(vx, vy)` is the unit vector from the center to the arc midpoint and
/// `theta` the half-width, so the arc spans `theta` on both sides of `(vx, vy)`.
/// `end1`/`end2` are reserved and always `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcRecord {
    pub c1: f64,
    pub c2: f64,
    pub r: f64,
    pub vx: f64,
    pub vy: f64,
    pub theta: f64,
    pub end1: Option<f64>,
    pub end2: Option<f64>,
}

impl From<&CircArc> for ArcRecord {
    fn from(a: &CircArc) -> Self {
        let b = a.ball();
        let m = a.mid_vector();
        ArcRecord {
            c1: b.center.x,
            c2: b.center.y,
            r: b.radius,
            vx: m.x,
            vy: m.y,
            theta: a.width() / 2.0,
            end1: None,
            end2: None,
        }
    }
}

/// Alpha-hull snapshot, built once per call.
///
/// `source` is an opaque back-reference to whatever the complement was built
/// from; it is passed through untouched.
#[derive(Clone, Debug)]
pub struct AlphaHull<S = ()> {
    pub boundary: Vec<CircArc>,
    pub arcs: Vec<ArcRecord>,
    /// Start point of every boundary arc, in boundary order.
    pub boundary_points: Vec<Vector2<f64>>,
    pub length: f64,
    pub complement: Complement,
    pub alpha: f64,
    pub source: S,
}

/// Sum of arc lengths.
pub fn boundary_length(arcs: &[CircArc]) -> f64 {
    arcs.iter().map(CircArc::length).sum()
}

/// Clip `arcs` against every half-plane in turn.
pub fn clip_arcs(
    arcs: Vec<CircArc>,
    half_planes: &[HalfPlane],
    mode: ClipMode,
) -> Result<Vec<CircArc>, ArcError> {
    let mut arcs = arcs;
    for hp in half_planes {
        arcs = match mode {
            ClipMode::Midpoint => arcs
                .into_iter()
                .filter(|a| !hp.contains(a.mid_point()))
                .collect(),
            ClipMode::Split => {
                let mut next = Vec::with_capacity(arcs.len());
                for a in &arcs {
                    next.extend(a.remove_half_plane(hp)?);
                }
                next
            }
        };
    }
    Ok(arcs)
}

/// Boundary of the alpha-hull described by `complement`.
///
/// `alpha` is recorded in the snapshot; the complement must already have been
/// built for it.
pub fn compute_ahull<S, U: UnionBoundary + ?Sized>(
    source: S,
    complement: Complement,
    alpha: f64,
    union: &U,
    cfg: HullCfg,
) -> Result<AlphaHull<S>, HullError> {
    let (disks, half_planes) = complement.split()?;
    let candidates = union.union_boundary(&disks)?;
    let n_candidates = candidates.len();
    let boundary = clip_arcs(candidates, &half_planes, cfg.clip)?;
    let length = boundary_length(&boundary);
    tracing::debug!(
        rows = complement.len(),
        disks = disks.len(),
        half_planes = half_planes.len(),
        candidates = n_candidates,
        arcs = boundary.len(),
        length,
        "ahull assembled"
    );
    Ok(AlphaHull {
        arcs: boundary.iter().map(ArcRecord::from).collect(),
        boundary_points: boundary.iter().map(CircArc::point).collect(),
        boundary,
        length,
        complement,
        alpha,
        source,
    })
}
