//! Criterion benchmarks for the convex-hull driver.
//! Focus: small bounded unions in 2-D and 3-D, since the bounded wrap path
//! dominates the component share (see SPEC_FULL.md §2).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use polyhull::prelude::*;

fn row(c0: i64, coeffs: &[i64]) -> Vec<Int> {
    let mut v = vec![BigInt::from(c0)];
    v.extend(coeffs.iter().map(|&c| BigInt::from(c)));
    v
}

fn two_offset_squares(offset: i64) -> UnionSet {
    let a = Polyhedron::from_rows(
        2,
        vec![],
        vec![row(0, &[1, 0]), row(2, &[-1, 0]), row(0, &[0, 1]), row(2, &[0, -1])],
    );
    let b = Polyhedron::from_rows(
        2,
        vec![],
        vec![
            row(-offset, &[1, 0]),
            row(offset + 2, &[-1, 0]),
            row(-offset, &[0, 1]),
            row(offset + 2, &[0, -1]),
        ],
    );
    UnionSet::new(2, vec![a, b])
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_hull_2d");
    for &offset in &[0i64, 1, 2] {
        group.bench_with_input(BenchmarkId::new("two_squares", offset), &offset, |b, &offset| {
            b.iter(|| convex_hull(&two_offset_squares(offset)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
