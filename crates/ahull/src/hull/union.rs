//! Boundary of a union of disks.

use crate::arc::{ArcError, CircArc};
use crate::geom2::Ball;

/// Computes the boundary of the union of a set of open disks as a finite list
/// of arcs, each on exactly one input disk.
///
/// Closures `Fn(&[Ball]) -> Result<Vec<CircArc>, ArcError>` implement it too.
pub trait UnionBoundary {
    fn union_boundary(&self, disks: &[Ball]) -> Result<Vec<CircArc>, ArcError>;
}

impl<F> UnionBoundary for F
where
    F: Fn(&[Ball]) -> Result<Vec<CircArc>, ArcError>,
{
    fn union_boundary(&self, disks: &[Ball]) -> Result<Vec<CircArc>, ArcError> {
        self(disks)
    }
}

/// Each full circle minus every other disk, `O(n²)` `remove_ball` calls.
///
/// Pre: `disks` has no duplicates (an identical pair would erase both).
#[derive(Clone, Copy, Debug, Default)]
pub struct PairwiseUnion;

impl UnionBoundary for PairwiseUnion {
    fn union_boundary(&self, disks: &[Ball]) -> Result<Vec<CircArc>, ArcError> {
        let mut out = Vec::new();
        for (i, b) in disks.iter().enumerate() {
            let mut arcs = vec![CircArc::full(*b)];
            for (j, other) in disks.iter().enumerate() {
                if i == j {
                    continue;
                }
                let mut next = Vec::with_capacity(arcs.len() + 1);
                for a in &arcs {
                    next.extend(a.remove_ball(other)?);
                }
                arcs = next;
                if arcs.is_empty() {
                    break;
                }
            }
            out.extend(arcs);
        }
        Ok(out)
    }
}
