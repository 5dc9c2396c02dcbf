//! Facet-to-facet recursion (§4.9): slice `S` by a known facet `c`, drop the
//! now-trivial dimension, recursively hull the projection to find its
//! ridges, and embed those ridges back into the ambient space.
//!
//! Ported from `compute_facet` in `isl_convex_hull.c`.

use crate::arith::{self, Int};
use crate::error::HullResult;
use crate::linalg::{self, Matrix};
use crate::polyhedron::Polyhedron;
use crate::union_set::UnionSet;
use num_traits::Zero;

/// Ridges of facet `c` of `conv(s)`, expressed as rows in `s`'s original
/// ambient coordinates.
pub fn compute_facet(s: &UnionSet, c: &[Int]) -> HullResult<Vec<Vec<Int>>> {
    let dim = s.dim;
    let mut e0 = arith::zero_row(dim + 1);
    e0[0] = Int::from(1);
    let seed = Matrix::from_int_rows(&[e0, c.to_vec()]);
    let m = linalg::complete_to_invertible(&seed);
    let q = linalg::invert_square(&m).expect("facet row is nonzero by precondition");

    let mut projected = Vec::new();
    for p in s.non_empty_members() {
        let mut transformed = p.affine_image(&q);
        let mut zero_x1 = arith::zero_row(dim + 1);
        zero_x1[1] = Int::from(1);
        transformed.add_eq(zero_x1);
        transformed.simplify_trivial();
        if transformed.empty {
            continue;
        }
        let mut proj = Polyhedron::universe(dim - 1);
        for eq in &transformed.eqs {
            let mut r = eq.clone();
            r.remove(1);
            proj.add_eq(r);
        }
        for ineq in &transformed.ineqs {
            let mut r = ineq.clone();
            r.remove(1);
            proj.add_ineq(r);
        }
        projected.push(proj);
    }

    if projected.is_empty() {
        return Ok(vec![c.to_vec()]);
    }

    let sub = UnionSet::new(dim - 1, projected);
    let hull_sub = crate::driver::convex_hull(&sub)?;

    let mut ridges = Vec::new();
    for row in hull_sub.ineqs.iter() {
        ridges.push(embed_back(row, &m));
    }
    for row in hull_sub.eqs.iter() {
        ridges.push(embed_back(row, &m));
        ridges.push(embed_back(&arith::negate(row), &m));
    }
    Ok(ridges)
}

fn embed_back(row: &[Int], m: &Matrix) -> Vec<Int> {
    let mut full = row.to_vec();
    full.insert(1, Int::zero());
    let full_mat = Matrix::from_int_rows(&[full]);
    let back = full_mat.mul(m);
    let mut out = back.to_int_rows();
    out.pop().unwrap()
}
