//! The top-level driver (§4.11): normalize input, factor out the affine
//! hull, dispatch to the right strategy, and re-embed.
//!
//! Ported from `uset_convex_hull`, `uset_convex_hull_wrap`, and the
//! `isl_map_convex_hull` entry point in `isl_convex_hull.c`, reduced to the
//! pure-set scope of this crate (no maps/parameters/divisions — see
//! SPEC_FULL.md §1/§4.11).

use crate::affine_hull::affine_hull;
use crate::arith::{self, Int};
use crate::bounds::{independent_bounds, is_bounded};
use crate::error::HullResult;
use crate::extend::extend;
use crate::initial_facet::initial_facet_constraint;
use crate::linalg::{self, Matrix};
use crate::lowdim::{hull_0d, hull_1d, hull_unbounded};
use crate::polyhedron::Polyhedron;
use crate::redundancy::convex_hull_polyhedron;
use crate::union_set::UnionSet;

/// Exact rational convex hull of a union of polyhedra.
pub fn convex_hull(s: &UnionSet) -> HullResult<Polyhedron> {
    if s.is_empty() {
        return Ok(Polyhedron::empty(s.dim));
    }

    let eqs = affine_hull(s)?;
    if eqs.is_empty() {
        let mut result = hull_core(s)?;
        result.rational = false;
        return Ok(result);
    }

    let dim = s.dim;
    let k = eqs.len();
    let mut e0 = arith::zero_row(dim + 1);
    e0[0] = Int::from(1);
    let mut seed_rows = vec![e0];
    seed_rows.extend(eqs.iter().cloned());
    let seed = Matrix::from_int_rows(&seed_rows);
    let m = linalg::complete_to_invertible(&seed);
    let q = linalg::invert_square(&m).expect("affine-hull rows are linearly independent by construction");

    let mut projected = Vec::new();
    for p in s.non_empty_members() {
        let mut transformed = p.affine_image(&q);
        for i in 0..k {
            let mut zero_yi = arith::zero_row(dim + 1);
            zero_yi[i + 1] = Int::from(1);
            transformed.add_eq(zero_yi);
        }
        transformed.simplify_trivial();
        if transformed.empty {
            continue;
        }
        let mut proj = Polyhedron::universe(dim - k);
        for eq in &transformed.eqs {
            if let Some(r) = drop_leading(eq, k) {
                proj.add_eq(r);
            }
        }
        for ineq in &transformed.ineqs {
            if let Some(r) = drop_leading(ineq, k) {
                proj.add_ineq(r);
            }
        }
        projected.push(proj);
    }

    let sub = UnionSet::new(dim - k, projected);
    let reduced_hull = hull_core(&sub)?;

    let mut result = Polyhedron::universe(dim);
    for row in &eqs {
        result.add_eq(row.clone());
    }
    for row in &reduced_hull.eqs {
        result.add_eq(embed_dropped(row, k, &m));
    }
    for row in &reduced_hull.ineqs {
        result.add_ineq(embed_dropped(row, k, &m));
    }
    result.rational = false;
    Ok(result)
}

fn drop_leading(row: &[Int], k: usize) -> Option<Vec<Int>> {
    use num_traits::Zero;
    if row[1..=k].iter().any(|c| !c.is_zero()) {
        // Shouldn't happen after the explicit y_i = 0 slicing above, but
        // guards against a malformed projection rather than panicking.
        return None;
    }
    let mut r = vec![row[0].clone()];
    r.extend_from_slice(&row[k + 1..]);
    Some(r)
}

/// Re-insert the `k` dropped (affine-hull) coordinates as zeros and map the
/// row back to the original ambient frame via the completed basis matrix.
fn embed_dropped(row: &[Int], k: usize, m: &Matrix) -> Vec<Int> {
    let mut full = vec![row[0].clone()];
    full.extend(std::iter::repeat(Int::from(0)).take(k));
    full.extend_from_slice(&row[1..]);
    let mat = Matrix::from_int_rows(&[full]);
    mat.mul(m).to_int_rows().into_iter().next().unwrap()
}

/// Dispatch among the 0-D, 1-D, unbounded, and bounded-wrap strategies for
/// an already affine-hull-factored (full-dimensional) union.
fn hull_core(s: &UnionSet) -> HullResult<Polyhedron> {
    if s.is_empty() {
        return Ok(Polyhedron::empty(s.dim));
    }
    if s.dim == 0 {
        return Ok(hull_0d(s));
    }
    if s.dim == 1 {
        return hull_1d(s);
    }
    if !is_bounded(s)? {
        return hull_unbounded(s);
    }
    let bounds = independent_bounds(s)?;
    let f0 = initial_facet_constraint(s, bounds)?;
    let facets = extend(s, f0)?;
    let hull = Polyhedron::from_rows(s.dim, Vec::new(), facets);
    convex_hull_polyhedron(hull)
}
