//! Set difference of two arcs on the same circle.

use std::f64::consts::TAU;

use super::{ArcError, CircArc};

/// Position of the subtrahend `[t1, t2]` against the minuend `[0, alpha]`,
/// after rotating the minuend to start at angle 0.
///
/// `t1 ∈ [0, 2π)` and `t2 ∈ (0, 2π]`; `t2 < t1` means the subtrahend wraps
/// through angle 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Overlap {
    /// `alpha ≤ t1 < t2`: no overlap.
    After,
    /// `0 < t1 < alpha ≤ t2`: keep `[0, t1]`.
    Tail,
    /// `0 < t1 < t2 < alpha`: keep `[0, t1]` and `[t2, alpha]`.
    Interior,
    /// `0 = t1 < alpha ≤ t2`: nothing left.
    Covers,
    /// `0 = t1 < t2 < alpha`: keep `[t2, alpha]`.
    Head,
    /// `0 < t2 < alpha ≤ t1`: keep `[t2, alpha]`.
    WrappedHead,
    /// `alpha ≤ t2 < t1`: nothing left.
    WrappedCovers,
    /// `t2 < t1 ≤ alpha`: keep `[t2, t1]`.
    WrappedInterior,
}

impl Overlap {
    /// First matching ordering, in the order listed on the enum.
    pub(crate) fn classify(alpha: f64, t1: f64, t2: f64) -> Option<Overlap> {
        if alpha <= t1 && t1 < t2 {
            Some(Overlap::After)
        } else if 0.0 < t1 && t1 < alpha && alpha <= t2 {
            Some(Overlap::Tail)
        } else if 0.0 < t1 && t1 < t2 && t2 < alpha {
            Some(Overlap::Interior)
        } else if t1 == 0.0 && alpha <= t2 {
            Some(Overlap::Covers)
        } else if t1 == 0.0 && t2 < alpha {
            Some(Overlap::Head)
        } else if 0.0 < t2 && t2 < alpha && alpha <= t1 {
            Some(Overlap::WrappedHead)
        } else if alpha <= t2 && t2 < t1 {
            Some(Overlap::WrappedCovers)
        } else if t2 < t1 && t1 <= alpha {
            Some(Overlap::WrappedInterior)
        } else {
            None
        }
    }
}

/// Where a remaining piece starts.
#[derive(Clone, Copy, Debug)]
enum Anchor {
    /// The minuend's own start.
    Start,
    /// The subtrahend's end.
    OtherEnd,
}

impl CircArc {
    /// `self \ other` for two arcs on the same circle.
    ///
    /// - Arcs on different circles: warning, `self` unchanged.
    /// - `other` full circle: empty. `other` null: `self` unchanged.
    /// - Otherwise zero, one, or two arcs, in counter-clockwise order from
    ///   `self`'s start.
    pub fn diff(&self, other: &CircArc) -> Result<Vec<CircArc>, ArcError> {
        if self.ball != other.ball {
            tracing::warn!(a = ?self, b = ?other, "arc difference on different circles");
            return Ok(vec![*self]);
        }
        if other.alpha == TAU {
            return Ok(Vec::new());
        }
        if other.alpha == 0.0 {
            return Ok(vec![*self]);
        }

        let alpha = self.alpha;
        let shifted = other.rotate(-self.theta1());
        let (t1, t2) = (shifted.theta1(), shifted.theta2());
        let overlap = Overlap::classify(alpha, t1, t2).ok_or_else(|| {
            tracing::error!(alpha, t1, t2, "arc difference matched no case");
            ArcError::Unclassified {
                alpha,
                theta1: t1,
                theta2: t2,
            }
        })?;

        // Pieces are measured in the rotated frame and anchored in the original one.
        let pieces: Vec<(Anchor, f64)> = match overlap {
            Overlap::After => return Ok(vec![*self]),
            Overlap::Tail => vec![(Anchor::Start, t1)],
            // a full circle closes up: the two remainders are one arc
            Overlap::Interior if alpha == TAU => vec![(Anchor::OtherEnd, alpha - t2 + t1)],
            Overlap::Interior => vec![(Anchor::Start, t1), (Anchor::OtherEnd, alpha - t2)],
            Overlap::Covers | Overlap::WrappedCovers => Vec::new(),
            Overlap::Head | Overlap::WrappedHead => vec![(Anchor::OtherEnd, alpha - t2)],
            Overlap::WrappedInterior => vec![(Anchor::OtherEnd, t1 - t2)],
        };
        let other_end = other.end_vector();
        Ok(pieces
            .into_iter()
            .map(|(anchor, width)| match anchor {
                // self.v is already unit; keep it bit-identical
                Anchor::Start => CircArc {
                    ball: self.ball,
                    v: self.v,
                    alpha: width,
                },
                Anchor::OtherEnd => CircArc::new(self.ball, other_end, width),
            })
            .collect())
    }
}
