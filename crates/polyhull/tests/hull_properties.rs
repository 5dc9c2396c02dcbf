//! Randomized property tests over small integer boxes (§8 universal
//! properties 1, 2, 4, 6).

use num_bigint::BigInt;
use polyhull::prelude::*;
use proptest::prelude::*;

fn row(c0: i64, coeffs: &[i64]) -> Vec<Int> {
    let mut v = vec![BigInt::from(c0)];
    v.extend(coeffs.iter().map(|&c| BigInt::from(c)));
    v
}

fn box_2d(x0: i64, x1: i64, y0: i64, y1: i64) -> Polyhedron {
    Polyhedron::from_rows(
        2,
        vec![],
        vec![row(-x0, &[1, 0]), row(x1, &[-1, 0]), row(-y0, &[0, 1]), row(y1, &[0, -1])],
    )
}

fn corners(x0: i64, x1: i64, y0: i64, y1: i64) -> Vec<(i64, i64)> {
    vec![(x0, y0), (x0, y1), (x1, y0), (x1, y1)]
}

fn contains(p: &Polyhedron, point: &(i64, i64)) -> bool {
    let (x, y) = (BigInt::from(point.0), BigInt::from(point.1));
    p.eqs.iter().all(|r| &r[0] + &r[1] * &x + &r[2] * &y == BigInt::from(0))
        && p.ineqs.iter().all(|r| &r[0] + &r[1] * &x + &r[2] * &y >= BigInt::from(0))
}

proptest! {
    #[test]
    fn hull_contains_every_generating_box_corner(
        x0 in -5i64..5, w0 in 1i64..5, y0 in -5i64..5, h0 in 1i64..5,
        x1 in -5i64..5, w1 in 1i64..5, y1 in -5i64..5, h1 in 1i64..5,
    ) {
        let a = box_2d(x0, x0 + w0, y0, y0 + h0);
        let b = box_2d(x1, x1 + w1, y1, y1 + h1);
        let s = UnionSet::new(2, vec![a, b]);
        let hull = convex_hull(&s).unwrap();
        for c in corners(x0, x0 + w0, y0, y0 + h0).into_iter().chain(corners(x1, x1 + w1, y1, y1 + h1)) {
            prop_assert!(contains(&hull, &c));
        }
    }

    #[test]
    fn hull_is_idempotent_on_a_single_box(
        x0 in -5i64..5, w0 in 1i64..5, y0 in -5i64..5, h0 in 1i64..5,
    ) {
        let a = box_2d(x0, x0 + w0, y0, y0 + h0);
        let s = UnionSet::new(2, vec![a]);
        let once = convex_hull(&s).unwrap();
        let twice_input = UnionSet::new(2, vec![once.clone()]);
        let twice = convex_hull(&twice_input).unwrap();
        prop_assert_eq!(once.n_ineq(), twice.n_ineq());
        prop_assert_eq!(once.n_eq(), twice.n_eq());
    }
}
