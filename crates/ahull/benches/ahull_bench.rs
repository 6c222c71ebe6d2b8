//! Criterion benchmarks for the arc algebra and boundary assembly.
//! Focus sizes: n in {2, 8, 32, 128} disks.
//! Results live under target/criterion.

use ahull::api::{
    compute_ahull, draw_disks, Ball, CircArc, ClipMode, Complement, DiskCount, HullCfg,
    PairwiseUnion, ReplayToken, SampleCfg, UnionBoundary,
};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_arc_pairs(m: usize, seed: u64) -> Vec<(CircArc, CircArc)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let b = Ball::from_coords(0.0, 0.0, 1.0);
    let arc = |rng: &mut StdRng| {
        let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
        let width = rng.gen_range(0.01..std::f64::consts::TAU);
        CircArc::new(b, Vector2::new(theta.cos(), theta.sin()), width)
    };
    (0..m).map(|_| (arc(&mut rng), arc(&mut rng))).collect()
}

fn cfg(n: usize) -> SampleCfg {
    SampleCfg {
        disk_count: DiskCount::Fixed(n),
        spread: (n as f64).sqrt(),
        ..SampleCfg::default()
    }
}

fn bench_diff(c: &mut Criterion) {
    c.bench_function("arc_diff_1k", |b| {
        b.iter_batched(
            || random_arc_pairs(1000, 41),
            |pairs| {
                for (a, cut) in &pairs {
                    let _ = a.diff(cut);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("ahull");
    for &n in &[2usize, 8, 32, 128] {
        group.bench_with_input(BenchmarkId::new("pairwise_union", n), &n, |b, &n| {
            b.iter_batched(
                || draw_disks(cfg(n), ReplayToken { seed: 43, index: 0 }),
                |disks| {
                    let _arcs = PairwiseUnion.union_boundary(&disks).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("compute_split", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let disks = draw_disks(cfg(n), ReplayToken { seed: 44, index: 0 });
                    let mut rows = Complement::from_disks(&disks).rows().to_vec();
                    rows.push([0.0, 0.0, -3.0]); // x > 0
                    rows.push([1.0, 0.5, -1.0]); // y > 0.5x + 1
                    Complement::new(rows)
                },
                |complement| {
                    let _hull = compute_ahull(
                        (),
                        complement,
                        1.0,
                        &PairwiseUnion,
                        HullCfg {
                            clip: ClipMode::Split,
                        },
                    )
                    .unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_diff, bench_assembly);
criterion_main!(benches);
