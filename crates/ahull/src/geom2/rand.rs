//! Random disk sets (uniform centers + radii, replay tokens).
//!
//! Purpose
//! - Deterministic disk configurations for benches, property tests, and the
//!   CLI `sample` command.
//!
//! Model
//! - Centers uniform in the square `[-spread, spread]²`, radii uniform in
//!   `[radius_min, radius_max]`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Ball;

/// Disk count distribution.
#[derive(Clone, Copy, Debug)]
pub enum DiskCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl DiskCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            DiskCount::Fixed(n) => n,
            DiskCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub disk_count: DiskCount,
    /// Half side of the square holding the centers.
    pub spread: f64,
    pub radius_min: f64,
    pub radius_max: f64,
}
impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            disk_count: DiskCount::Fixed(8),
            spread: 2.0,
            radius_min: 0.25,
            radius_max: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random disk set. Radii are clamped to be positive.
pub fn draw_disks(cfg: SampleCfg, tok: ReplayToken) -> Vec<Ball> {
    let mut rng = tok.to_std_rng();
    let n = cfg.disk_count.sample(&mut rng);
    let s = cfg.spread.abs();
    let r_lo = cfg.radius_min.max(1e-9);
    let r_hi = cfg.radius_max.max(r_lo);
    (0..n)
        .map(|_| {
            let c = Vector2::new(
                (rng.gen::<f64>() * 2.0 - 1.0) * s,
                (rng.gen::<f64>() * 2.0 - 1.0) * s,
            );
            Ball::new(c, r_lo + rng.gen::<f64>() * (r_hi - r_lo))
        })
        .collect()
}
