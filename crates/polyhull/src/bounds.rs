//! Bounding-direction discovery: is a direction bounded on a union (§4.5),
//! find a maximal independent set of bounding directions (§4.4), and a
//! cheap overall boundedness test (§4.10).
//!
//! Ported from `uset_is_bound`, `is_independent_bound`, and
//! `independent_bounds` in `isl_convex_hull.c`.

use crate::arith::{self, Int};
use crate::error::HullResult;
use crate::lp::{solve_lp, LpOutcome};
use crate::union_set::UnionSet;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// Is `coeffs . x` bounded below on every non-empty member of `s`? If so,
/// return the tight constant `c0` with `c0 + coeffs . x >= 0` valid on `s`
/// and tight for some member (scaled so the row stays integral; the
/// returned row is `[c0, coeffs...]` possibly rescaled by a common integer
/// factor when some member's optimum was fractional).
pub fn uset_is_bound(s: &UnionSet, coeffs: &[Int]) -> HullResult<Option<Vec<Int>>> {
    let mut best: Option<BigRational> = None;
    let mut scale = Int::one();
    for p in s.non_empty_members() {
        match solve_lp(p, coeffs)? {
            LpOutcome::Unbounded => return Ok(None),
            LpOutcome::Empty => continue,
            LpOutcome::Optimal(v) => {
                if v.denom() != &Int::one() {
                    scale = lcm(&scale, v.denom());
                }
                best = Some(match best {
                    None => v,
                    Some(cur) => {
                        if v < cur {
                            v
                        } else {
                            cur
                        }
                    }
                });
            }
        }
    }
    let Some(min) = best else {
        // every member empty: vacuously bounded by the trivial row 0.
        let mut row = vec![Int::zero(); coeffs.len() + 1];
        row[0] = Int::zero();
        return Ok(Some(row));
    };
    let scaled_min = &min * &BigRational::from_integer(scale.clone());
    debug_assert_eq!(scaled_min.denom(), &Int::one());
    let c0 = -scaled_min.to_integer();
    let mut row = Vec::with_capacity(coeffs.len() + 1);
    row.push(c0);
    row.extend(coeffs.iter().map(|c| c * &scale));
    Ok(Some(arith::gcd_normalize(&row)))
}

fn lcm(a: &Int, b: &Int) -> Int {
    use num_traits::Signed;
    let g = gcd(a, b);
    if g.is_zero() {
        return Int::one();
    }
    (a * b).abs() / g
}

fn gcd(a: &Int, b: &Int) -> Int {
    use num_traits::Signed;
    let (mut a, mut b) = (a.abs(), b.abs());
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    if a.is_zero() {
        Int::one()
    } else {
        a
    }
}

/// Find up to `dim` linearly independent bounding directions of `s`,
/// triangularized by leading coefficient column. Rows are `[c0, coeffs...]`.
pub fn independent_bounds(s: &UnionSet) -> HullResult<Vec<Vec<Int>>> {
    let dim = s.dim;
    let mut accepted: Vec<Vec<Int>> = Vec::new();
    let mut leading: Vec<usize> = Vec::new();

    let candidate_rows: Vec<Vec<Int>> =
        s.members.iter().flat_map(|p| p.all_rows().cloned()).collect();

    for cand in candidate_rows {
        if accepted.len() == dim {
            break;
        }
        let mut coeffs = cand[1..].to_vec();
        for (row, &lead) in accepted.iter().zip(leading.iter()) {
            coeffs = arith::eliminate_leading(&coeffs, &row[1..], lead);
        }
        let Some(lead_col) = arith::first_nonzero(&coeffs, 0) else {
            continue;
        };
        let Some(bound) = uset_is_bound(s, &coeffs)? else {
            continue;
        };
        let insert_at = leading.iter().position(|&l| l > lead_col).unwrap_or(leading.len());
        accepted.insert(insert_at, bound);
        leading.insert(insert_at, lead_col);
    }
    Ok(accepted)
}

/// `s` is bounded iff every ambient coordinate has a finite min and max.
/// Substitutes isl's recession-cone tableau check with `2*dim` LP calls over
/// the solver already required for everything else (see DESIGN.md).
pub fn is_bounded(s: &UnionSet) -> HullResult<bool> {
    for i in 0..s.dim {
        let mut e_i = vec![Int::zero(); s.dim];
        e_i[i] = Int::one();
        let mut neg_e_i = e_i.clone();
        neg_e_i[i] = -Int::one();
        for p in s.non_empty_members() {
            if matches!(solve_lp(p, &e_i)?, LpOutcome::Unbounded) {
                return Ok(false);
            }
            if matches!(solve_lp(p, &neg_e_i)?, LpOutcome::Unbounded) {
                return Ok(false);
            }
        }
    }
    Ok(true)
}
