//! Minimal usage demo: the convex hull of two triangles is the square they
//! tile. Run with `cargo run --example square_from_triangles -p polyhull`
//! once this file is wired into a `[[example]]` entry, or read it inline as
//! documentation of the public API shape.

use polyhull::prelude::*;

fn row(c0: i64, coeffs: &[i64]) -> Vec<Int> {
    let mut v = vec![Int::from(c0)];
    v.extend(coeffs.iter().map(|&c| Int::from(c)));
    v
}

fn main() {
    let lower = Polyhedron::from_rows(2, vec![], vec![row(0, &[1, 0]), row(0, &[0, 1]), row(2, &[-1, -1])]);
    let upper = Polyhedron::from_rows(2, vec![], vec![row(2, &[-1, 0]), row(2, &[0, -1]), row(-2, &[1, 1])]);
    let s = UnionSet::new(2, vec![lower, upper]);

    let hull = convex_hull(&s).expect("hull of two compatible triangles is always well-defined");
    println!("facets of the square hull:");
    for ineq in &hull.ineqs {
        println!("  {:?} . (1, x, y) >= 0", ineq);
    }
}
