//! Recursive hull extension (§4.8): grow the hull by wrapping each facet's
//! ridges, deduplicating, and recursing into facet dimension via
//! `compute_facet`.
//!
//! Ported from `extend` in `isl_convex_hull.c`. isl walks a `Vec`-like list
//! that grows during iteration; the index-based `while i < hull.len()` loop
//! below is the direct Rust rendering of that pattern (see SPEC_FULL.md §9).

use crate::arith::{self, Int};
use crate::compute_facet::compute_facet;
use crate::error::HullResult;
use crate::union_set::UnionSet;
use crate::wrap::wrap_facet;

/// All facets of `conv(s)`, discovered by walking outward from `f0`.
pub fn extend(s: &UnionSet, f0: Vec<Int>) -> HullResult<Vec<Vec<Int>>> {
    let mut hull: Vec<Vec<Int>> = vec![f0];
    let mut i = 0;
    while i < hull.len() {
        let facet = hull[i].clone();
        let ridges = compute_facet(s, &facet)?;
        for ridge in ridges {
            let candidate = wrap_facet(s, &facet, &ridge)?;
            if !hull.iter().any(|existing| arith::rows_equivalent(existing, &candidate)) {
                hull.push(candidate);
            }
        }
        i += 1;
    }
    Ok(hull)
}
