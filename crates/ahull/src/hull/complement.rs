//! Complement tables: rows of open disks and open half-planes.
//!
//! Row encoding `(c1, c2, r)`:
//! - `r > 0`: disk centered at `(c1, c2)` with radius `r`.
//! - `r = -1` / `-2`: `y > c2·x + c1` / `y < c2·x + c1` (`c1` intercept, `c2` slope).
//! - `r = -3` / `-4`: `x > c1` / `x < c1`.
//!
//! The kind of a row comes from `r` alone; the value of `c1` never selects
//! between the vertical and sloped forms.

use std::collections::HashSet;

use thiserror::Error;

use crate::geom2::{Ball, HalfPlane};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComplementError {
    #[error("row {row}: radius code {code} is neither positive nor one of -1, -2, -3, -4")]
    UnknownCode { row: usize, code: f64 },
    #[error("row {row}: non-finite field")]
    NonFinite { row: usize },
    #[error("column lengths differ: c1={c1}, c2={c2}, r={r}")]
    Ragged { c1: usize, c2: usize, r: usize },
}

/// Decoded complement row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ComplementRow {
    Disk(Ball),
    HalfPlane(HalfPlane),
}

impl ComplementRow {
    /// Decode one `(c1, c2, r)` row; `row` is only used in errors.
    pub fn decode(row: usize, [c1, c2, r]: [f64; 3]) -> Result<Self, ComplementError> {
        if !(c1.is_finite() && c2.is_finite() && r.is_finite()) {
            return Err(ComplementError::NonFinite { row });
        }
        if r > 0.0 {
            return Ok(ComplementRow::Disk(Ball::from_coords(c1, c2, r)));
        }
        let hp = match r {
            c if c == -1.0 => HalfPlane::sloped(c2, c1, true),
            c if c == -2.0 => HalfPlane::sloped(c2, c1, false),
            c if c == -3.0 => HalfPlane::vertical(c1, true),
            c if c == -4.0 => HalfPlane::vertical(c1, false),
            code => return Err(ComplementError::UnknownCode { row, code }),
        };
        Ok(ComplementRow::HalfPlane(hp))
    }
}

/// Raw complement table, kept verbatim for the output snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Complement {
    rows: Vec<[f64; 3]>,
}

impl Complement {
    pub fn new(rows: Vec<[f64; 3]>) -> Self {
        Self { rows }
    }

    /// Build from the three columns of a table.
    pub fn from_columns(c1: &[f64], c2: &[f64], r: &[f64]) -> Result<Self, ComplementError> {
        if c1.len() != c2.len() || c1.len() != r.len() {
            return Err(ComplementError::Ragged {
                c1: c1.len(),
                c2: c2.len(),
                r: r.len(),
            });
        }
        let rows = c1
            .iter()
            .zip(c2)
            .zip(r)
            .map(|((&a, &b), &c)| [a, b, c])
            .collect();
        Ok(Self { rows })
    }

    /// Disks only, as `(cx, cy, r)` rows.
    pub fn from_disks(disks: &[Ball]) -> Self {
        Self {
            rows: disks
                .iter()
                .map(|b| [b.center.x, b.center.y, b.radius])
                .collect(),
        }
    }

    pub fn rows(&self) -> &[[f64; 3]] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Decode every row into disks (deduplicated, first occurrence kept) and half-planes.
    pub fn split(&self) -> Result<(Vec<Ball>, Vec<HalfPlane>), ComplementError> {
        let mut seen = HashSet::new();
        let mut disks = Vec::new();
        let mut half_planes = Vec::new();
        for (i, &row) in self.rows.iter().enumerate() {
            match ComplementRow::decode(i, row)? {
                ComplementRow::Disk(b) => {
                    if seen.insert(b.key()) {
                        disks.push(b);
                    }
                }
                ComplementRow::HalfPlane(hp) => half_planes.push(hp),
            }
        }
        Ok((disks, half_planes))
    }
}
