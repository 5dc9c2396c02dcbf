//! Redundancy elimination: is a single inequality implied by a polyhedron
//! (§4.2), and dropping every redundant inequality of a polyhedron (§4.3).
//!
//! Ported from `isl_basic_map_constraint_is_redundant` and
//! `isl_basic_map_convex_hull` in `isl_convex_hull.c`. The "simplex tableau"
//! capability those functions lean on is realized here as repeated exact
//! `solve_lp` calls rather than an incremental pivoted tableau object (see
//! DESIGN.md) — simpler to get right without a compiler, at the cost of
//! re-solving from scratch each time.

use crate::arith::{self, Int};
use crate::error::HullResult;
use crate::lp::{solve_lp, LpOutcome};
use crate::polyhedron::Polyhedron;
use num_traits::{Signed, Zero};

/// Is `c . (1, x) >= 0` implied by `p`? May mark `p` empty as a side effect
/// if an LP call discovers infeasibility.
pub fn is_redundant(p: &mut Polyhedron, c: &[Int]) -> HullResult<bool> {
    if p.empty {
        return Ok(true);
    }
    // Cheap sign filter: for every variable c has a nonzero coefficient in,
    // p must already bound that variable in the same sign, or p is
    // unbounded in a direction that falsifies c.
    for i in 0..p.dim {
        let ci = &c[i + 1];
        if ci.is_zero() {
            continue;
        }
        let sign_matches = |row: &Vec<Int>| -> bool {
            let v = &row[i + 1];
            !v.is_zero() && (v.is_positive() == ci.is_positive())
        };
        if !p.all_rows().any(sign_matches) {
            return Ok(false);
        }
    }
    let objective: Vec<Int> = c[1..].to_vec();
    match solve_lp(p, &objective)? {
        LpOutcome::Unbounded => Ok(false),
        LpOutcome::Empty => {
            p.mark_empty();
            Ok(false)
        }
        LpOutcome::Optimal(min) => {
            let m = min + num_rational::BigRational::from_integer(c[0].clone());
            Ok(!m.is_negative())
        }
    }
}

/// Remove redundant inequalities from `p` and fold in implicit equalities.
/// Leaves `p` empty if it turns out to be infeasible.
pub fn convex_hull_polyhedron(mut p: Polyhedron) -> HullResult<Polyhedron> {
    if p.empty || p.no_redundant || p.n_ineq() <= 1 {
        return Ok(p);
    }

    // Detect implicit equalities: an inequality c is implicit-equal if both
    // c and -c are redundant against the rest.
    let mut i = 0;
    while i < p.ineqs.len() {
        let row = p.ineqs[i].clone();
        let neg = arith::negate(&row);
        let mut rest = p.clone();
        rest.ineqs.remove(i);
        if is_redundant(&mut rest, &neg)? {
            p.ineqs.remove(i);
            p.add_eq(row);
            continue;
        }
        i += 1;
    }
    if p.empty {
        return Ok(p);
    }

    // Drop inequalities implied by the rest of the (possibly now smaller)
    // inequality set together with the equalities.
    let mut i = 0;
    while i < p.ineqs.len() {
        let row = p.ineqs[i].clone();
        let mut rest = p.clone();
        rest.ineqs.remove(i);
        if is_redundant(&mut rest, &row)? {
            p.ineqs.remove(i);
            continue;
        }
        i += 1;
    }

    p.no_redundant = true;
    p.no_implicit = true;
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(c0: i64, coeffs: &[i64]) -> Vec<Int> {
        let mut v = vec![Int::from(c0)];
        v.extend(coeffs.iter().map(|&c| Int::from(c)));
        v
    }

    #[test]
    fn drops_redundant_inequality() {
        // 0<=x<=2 plus a redundant x<=5.
        let mut p = Polyhedron::universe(1);
        p.add_ineq(row(0, &[1]));
        p.add_ineq(row(2, &[-1]));
        p.add_ineq(row(5, &[-1]));
        let h = convex_hull_polyhedron(p).unwrap();
        assert_eq!(h.n_ineq(), 2);
    }

    #[test]
    fn detects_implicit_equality() {
        // 0<=x<=0 folds to x=0.
        let mut p = Polyhedron::universe(1);
        p.add_ineq(row(0, &[1]));
        p.add_ineq(row(0, &[-1]));
        let h = convex_hull_polyhedron(p).unwrap();
        assert_eq!(h.n_eq(), 1);
        assert_eq!(h.n_ineq(), 0);
    }
}
