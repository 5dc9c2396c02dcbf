//! Criterion benchmarks for the exact-rational LP primitive in isolation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use polyhull::arith::Int;
use polyhull::lp::solve_lp;
use polyhull::polyhedron::Polyhedron;

fn row(c0: i64, coeffs: &[i64]) -> Vec<Int> {
    let mut v = vec![BigInt::from(c0)];
    v.extend(coeffs.iter().map(|&c| BigInt::from(c)));
    v
}

fn hypercube(dim: usize) -> Polyhedron {
    let mut p = Polyhedron::universe(dim);
    for i in 0..dim {
        let mut lo = vec![0i64; dim];
        lo[i] = 1;
        p.add_ineq(row(0, &lo));
        let mut hi = vec![0i64; dim];
        hi[i] = -1;
        p.add_ineq(row(1, &hi));
    }
    p
}

fn bench_lp(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_lp");
    for &dim in &[2usize, 4, 6] {
        group.bench_with_input(BenchmarkId::new("hypercube_min_sum", dim), &dim, |b, &dim| {
            let p = hypercube(dim);
            let objective: Vec<Int> = (0..dim).map(|_| BigInt::from(1)).collect();
            b.iter(|| solve_lp(&p, &objective).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lp);
criterion_main!(benches);
