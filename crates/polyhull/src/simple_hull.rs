//! Simple (translate-only) hull (§4.12): a cheap over-approximation whose
//! facets are translates of the input facets.
//!
//! Ported from `isl_map_simple_hull` in `isl_convex_hull.c`.

use crate::bounds::uset_is_bound;
use crate::error::HullResult;
use crate::polyhedron::Polyhedron;
use crate::redundancy::convex_hull_polyhedron;
use crate::union_set::UnionSet;

pub fn simple_hull(s: &UnionSet) -> HullResult<Polyhedron> {
    if s.is_empty() {
        return Ok(Polyhedron::empty(s.dim));
    }
    let mut candidate = Polyhedron::universe(s.dim);
    for p in s.non_empty_members() {
        for ineq in &p.ineqs {
            if let Some(tightened) = uset_is_bound(s, &ineq[1..])? {
                candidate.add_ineq(tightened);
            }
        }
    }
    convex_hull_polyhedron(candidate)
}
