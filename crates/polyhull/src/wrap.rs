//! The wrap primitive (§4.6): given a known facet `F` of `conv(S)` and a
//! ridge `R` of `F`, derive the unique adjacent facet of `conv(S)` sharing
//! that ridge.
//!
//! Ported from `wrap_constraints`/`wrap_facet` in `isl_convex_hull.c`. isl
//! builds the cone-over-dilation-variable LP directly on its internal
//! tableau representation; here the same construction is assembled as one
//! block-diagonal `Polyhedron` (one `(a_j, y_j)` block per union member,
//! linked by a single shared equality) and solved with the crate's own
//! `solve_lp`.

use crate::arith::{self, Int};
use crate::error::{HullError, HullResult};
use crate::linalg::{self, Matrix};
use crate::lp::{solve_lp, LpOutcome};
use crate::polyhedron::Polyhedron;
use crate::union_set::UnionSet;
use num_traits::Zero;

/// Change of coordinates sending `f` to the new variable at index 1 and `r`
/// to the new variable at index 2 (both 1-indexed ambient positions,
/// matching the `[constant, x1, x2, ...]` row convention).
fn facet_ridge_frame(dim: usize, f: &[Int], r: &[Int]) -> Matrix {
    let mut e0 = arith::zero_row(dim + 1);
    e0[0] = Int::from(1);
    let seed = Matrix::from_int_rows(&[e0, f.to_vec(), r.to_vec()]);
    let completed = linalg::complete_to_invertible(&seed);
    linalg::invert_square(&completed).expect("facet/ridge rows are linearly independent by precondition")
}

/// Wrap across ridge `r` of facet `f` of `conv(s)`, returning the adjacent
/// facet. Returns `f` unchanged when the wrap direction is unbounded (the
/// hull's boundary stays closed; see SPEC_FULL.md §4.6/§9).
pub fn wrap_facet(s: &UnionSet, f: &[Int], r: &[Int]) -> HullResult<Vec<Int>> {
    let dim = s.dim;
    let q = facet_ridge_frame(dim, f, r);

    let members: Vec<Polyhedron> = s.non_empty_members().map(|p| p.affine_image(&q)).collect();
    if members.is_empty() {
        return Err(HullError::precondition("wrap_facet called on an empty union"));
    }

    let block = dim + 1; // (a_j, y_j1..y_jd) per member
    let total_vars = block * members.len();
    let mut big = Polyhedron::universe(total_vars);

    for (j, p) in members.iter().enumerate() {
        let off = j * block;
        for eq in &p.eqs {
            big.add_eq(embed_block_row(eq, off, total_vars));
        }
        for ineq in &p.ineqs {
            big.add_ineq(embed_block_row(ineq, off, total_vars));
        }
        // a_j >= 0
        let mut row = arith::zero_row(total_vars + 1);
        row[off + 1] = Int::from(1);
        big.add_ineq(row);
    }

    // sum_j y_j,1 = 1  (y_j,1 lives at global variable index off+1, i.e. row
    // position off+2 once the leading constant slot is accounted for).
    let mut link = arith::zero_row(total_vars + 1);
    link[0] = Int::from(-1);
    for j in 0..members.len() {
        link[j * block + 2] = Int::from(1);
    }
    big.add_eq(link);

    let mut objective = arith::zero_row(total_vars);
    for j in 0..members.len() {
        objective[j * block + 2] = Int::from(1);
    }

    match solve_lp(&big, &objective)? {
        LpOutcome::Unbounded => Ok(f.to_vec()),
        LpOutcome::Empty => Err(HullError::precondition("wrap_facet LP infeasible for a valid facet/ridge pair")),
        LpOutcome::Optimal(theta) => {
            // isl negates the LP numerator before combining (isl_convex_hull.c,
            // wrap_facet: `isl_int_neg(num, num)`) — the adjacent facet is
            // `-numer*f + denom*r`, not `numer*f + denom*r`.
            let numer = -theta.numer().clone();
            let denom = theta.denom().clone();
            let combined = arith::combine(f, &numer, r, &denom);
            Ok(arith::gcd_normalize(&combined))
        }
    }
}

/// Embed a member's transformed row (length `dim+1`, homogeneous coordinate
/// `a_j` in slot 0) into the shared block-diagonal row space at offset
/// `off`, with a zero constant column (the whole big LP is a pure cone, no
/// free constant term).
fn embed_block_row(row: &[Int], off: usize, total_vars: usize) -> Vec<Int> {
    let mut out = arith::zero_row(total_vars + 1);
    out[0] = Int::zero();
    for (k, c) in row.iter().enumerate() {
        out[off + k + 1] = c.clone();
    }
    out
}
