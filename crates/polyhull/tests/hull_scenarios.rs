//! End-to-end convex-hull scenarios, one per documented case.

use num_bigint::BigInt;
use polyhull::prelude::*;

fn row(c0: i64, coeffs: &[i64]) -> Vec<Int> {
    let mut v = vec![BigInt::from(c0)];
    v.extend(coeffs.iter().map(|&c| BigInt::from(c)));
    v
}

fn poly(dim: usize, eqs: Vec<Vec<Int>>, ineqs: Vec<Vec<Int>>) -> Polyhedron {
    Polyhedron::from_rows(dim, eqs, ineqs)
}

fn has_ineq(h: &Polyhedron, want: &[i64]) -> bool {
    let want: Vec<Int> = want.iter().map(|&c| BigInt::from(c)).collect();
    h.ineqs.iter().any(|r| r == &want) || h.eqs.iter().any(|r| r == &want)
}

#[test]
fn square_from_two_triangles() {
    // {x>=0,y>=0,x+y<=2} u {x<=2,y<=2,x+y>=2} -> {0<=x<=2, 0<=y<=2}
    let t1 = poly(2, vec![], vec![row(0, &[1, 0]), row(0, &[0, 1]), row(2, &[-1, -1])]);
    let t2 = poly(2, vec![], vec![row(2, &[-1, 0]), row(2, &[0, -1]), row(-2, &[1, 1])]);
    let s = UnionSet::new(2, vec![t1, t2]);
    let h = convex_hull(&s).unwrap();
    assert!(!h.empty);
    assert_eq!(h.n_ineq(), 4);
    assert!(has_ineq(&h, &[0, 1, 0]));
    assert!(has_ineq(&h, &[2, -1, 0]));
    assert!(has_ineq(&h, &[0, 0, 1]));
    assert!(has_ineq(&h, &[2, 0, -1]));
}

#[test]
fn collinear_union_1d() {
    let a = poly(1, vec![], vec![row(-1, &[1]), row(3, &[-1])]);
    let b = poly(1, vec![], vec![row(-2, &[1]), row(5, &[-1])]);
    let c = poly(1, vec![], vec![row(-7, &[1]), row(8, &[-1])]);
    let s = UnionSet::new(1, vec![a, b, c]);
    let h = convex_hull(&s).unwrap();
    assert!(has_ineq(&h, &[-1, 1]));
    assert!(has_ineq(&h, &[8, -1]));
}

#[test]
fn unbounded_strip() {
    let left = poly(2, vec![], vec![row(0, &[1, 0]), row(0, &[0, 1]), row(1, &[0, -1])]);
    let right = poly(2, vec![], vec![row(0, &[-1, 0]), row(0, &[0, 1]), row(1, &[0, -1])]);
    let s = UnionSet::new(2, vec![left, right]);
    let h = convex_hull(&s).unwrap();
    assert!(has_ineq(&h, &[0, 0, 1]));
    assert!(has_ineq(&h, &[1, 0, -1]));
    // No finite bound on x: neither +-x row should appear.
    assert!(!h.ineqs.iter().any(|r| r[2] == BigInt::from(0) && r[1] != BigInt::from(0)));
}

#[test]
fn empty_component_is_dropped() {
    let mut contradictory = Polyhedron::universe(1);
    contradictory.add_eq(row(0, &[1]));
    contradictory.add_eq(row(-1, &[1]));
    let fine = poly(1, vec![], vec![row(0, &[1]), row(5, &[-1])]);
    let s = UnionSet::new(1, vec![contradictory, fine]);
    let h = convex_hull(&s).unwrap();
    assert!(has_ineq(&h, &[0, 1]));
    assert!(has_ineq(&h, &[5, -1]));
}

#[test]
fn affine_hull_factoring() {
    let a = poly(2, vec![row(-1, &[1, 1])], vec![row(0, &[1, 0]), row(1, &[-1, 0])]);
    let b = poly(2, vec![row(-1, &[1, 1])], vec![row(-2, &[1, 0]), row(3, &[-1, 0])]);
    let s = UnionSet::new(2, vec![a, b]);
    let h = convex_hull(&s).unwrap();
    assert_eq!(h.n_eq(), 1);
    assert!(has_ineq(&h, &[0, 1, 0]) || has_ineq(&h, &[0, 0, 1]));
}

#[test]
fn tetrahedron_pair_3d() {
    // conv{(0,0,0),(1,0,0),(0,1,0),(0,0,1)}
    let t1 = poly(
        3,
        vec![],
        vec![
            row(0, &[1, 0, 0]),
            row(0, &[0, 1, 0]),
            row(0, &[0, 0, 1]),
            row(1, &[-1, -1, -1]),
        ],
    );
    // conv{(1,1,1),(0,1,0),(1,0,0),(0,0,1)}: x<=1,y<=1,z<=1,x+y+z>=1.
    let t2 = poly(
        3,
        vec![],
        vec![
            row(1, &[-1, 0, 0]),
            row(1, &[0, -1, 0]),
            row(1, &[0, 0, -1]),
            row(-1, &[1, 1, 1]),
        ],
    );
    let s = UnionSet::new(3, vec![t1, t2]);
    let h = convex_hull(&s).unwrap();
    assert!(!h.empty);
    // The union's distinct vertices are {(0,0,0),(1,0,0),(0,1,0),(0,0,1),(1,1,1)}:
    // the two interior facets (t1's x+y+z<=1, t2's x+y+z>=1) are both replaced by
    // wrapping the shared base triangle out to the fifth vertex (1,1,1), giving six
    // facets total: the three original x,y,z>=0 plus three wrapped ones.
    assert_eq!(h.n_ineq(), 6);
    assert!(has_ineq(&h, &[0, 1, 0, 0]));
    assert!(has_ineq(&h, &[0, 0, 1, 0]));
    assert!(has_ineq(&h, &[0, 0, 0, 1]));
    assert!(has_ineq(&h, &[1, -1, -1, 1]));
    assert!(has_ineq(&h, &[1, 1, -1, -1]));
    assert!(has_ineq(&h, &[1, -1, 1, -1]));
}

#[test]
fn simple_hull_gap() {
    let a = poly(2, vec![], vec![row(0, &[1, 0]), row(1, &[-1, 0]), row(0, &[0, 1]), row(1, &[0, -1])]);
    let b = poly(2, vec![], vec![row(-1, &[1, 0]), row(2, &[-1, 0]), row(-2, &[0, 1]), row(3, &[0, -1])]);
    let s = UnionSet::new(2, vec![a, b]);
    let exact = convex_hull(&s).unwrap();
    let simple = simple_hull(&s).unwrap();
    // a = [0,1]x[0,1], b = [1,2]x[2,3]: true hull is the hexagon
    // (0,0)-(1,0)-(2,2)-(2,3)-(1,3)-(0,1), with two non-axis-aligned
    // facets cutting the gap between the squares' near corners (1,1)/(1,2).
    assert_eq!(exact.n_ineq(), 6);
    assert!(has_ineq(&exact, &[0, 1, 0]));
    assert!(has_ineq(&exact, &[0, 0, 1]));
    assert!(has_ineq(&exact, &[2, -1, 0]));
    assert!(has_ineq(&exact, &[3, 0, -1]));
    assert!(has_ineq(&exact, &[2, -2, 1]));
    assert!(has_ineq(&exact, &[1, 2, -1]));

    // The simple hull is just the outer bounding box: [0,2]x[0,3], 4 facets,
    // neither diagonal facet present, so it does not capture the gap.
    assert_eq!(simple.n_ineq(), 4);
    assert!(!has_ineq(&simple, &[2, -2, 1]));
    assert!(!has_ineq(&simple, &[1, 2, -1]));
}
