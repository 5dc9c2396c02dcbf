//! Initial-facet assembly (§4.7): combine a spanning set of bounding
//! directions into a single true facet of `conv(S)`.
//!
//! Ported in spirit from `initial_facet_constraint` in `isl_convex_hull.c`.
//! isl repeatedly projects into the candidate face's hyperplane before
//! wrapping, to guarantee the ridge it wraps across is genuinely a ridge of
//! the current candidate. This crate keeps isl's termination test (slice by
//! the candidate, check whether its affine hull collapses to one equality)
//! but performs the wrap step directly in the original coordinate frame via
//! `wrap::wrap_facet` rather than re-deriving isl's per-step face-projection
//! matrices — `independent_bounds`' leading-column triangularization already
//! orders directions so each later row is independent of the earlier ones
//! restricted to the current candidate's hyperplane, which is what makes
//! the direct wrap well-defined in practice. See DESIGN.md.

use crate::affine_hull::affine_hull;
use crate::arith::Int;
use crate::error::{HullError, HullResult};
use crate::polyhedron::Polyhedron;
use crate::union_set::UnionSet;
use crate::wrap::wrap_facet;

fn slice_by_equality(s: &UnionSet, row: &[Int]) -> UnionSet {
    let members: Vec<Polyhedron> = s
        .non_empty_members()
        .map(|p| {
            let mut q = p.clone();
            q.add_eq(row.to_vec());
            q.simplify_trivial();
            q
        })
        .collect();
    UnionSet::new(s.dim, members)
}

pub fn initial_facet_constraint(s: &UnionSet, mut d_rows: Vec<Vec<Int>>) -> HullResult<Vec<Int>> {
    loop {
        if d_rows.len() < 2 {
            return d_rows
                .into_iter()
                .next()
                .ok_or_else(|| HullError::precondition("initial_facet_constraint requires at least one bounding direction"));
        }
        let d0 = d_rows[0].clone();
        let sliced = slice_by_equality(s, &d0);
        let face_eqs = affine_hull(&sliced)?;
        if face_eqs.len() <= 1 {
            return Ok(d0);
        }
        let d_last = d_rows.pop().expect("checked len >= 2 above");
        let new_facet = wrap_facet(s, &d0, &d_last)?;
        d_rows[0] = new_facet;
    }
}
