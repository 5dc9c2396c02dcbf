//! Low-dimensional and unbounded hull paths (§4.10).
//!
//! Ported from `convex_hull_0d`, `convex_hull_1d`, `convex_hull_pair`, and
//! `uset_convex_hull_elim` in `isl_convex_hull.c`. The unbounded path here
//! is a from-scratch Fourier–Motzkin eliminator (isl's own FM code lives
//! outside the provided source excerpt) built on the same integer row
//! primitives as the rest of the crate.

use crate::arith::{self, Int};
use crate::error::HullResult;
use crate::polyhedron::Polyhedron;
use crate::redundancy::convex_hull_polyhedron;
use crate::union_set::UnionSet;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

pub fn hull_0d(s: &UnionSet) -> Polyhedron {
    if s.is_empty() {
        Polyhedron::empty(0)
    } else {
        Polyhedron::universe(0)
    }
}

fn one_d_bounds(p: &Polyhedron) -> (Option<BigRational>, Option<BigRational>) {
    if let Some(eq) = p.eqs.first() {
        // c0 + c1*x = 0  =>  x = -c0/c1
        let v = BigRational::new(-eq[0].clone(), eq[1].clone());
        return (Some(v.clone()), Some(v));
    }
    let mut lower: Option<BigRational> = None;
    let mut upper: Option<BigRational> = None;
    for ineq in &p.ineqs {
        let c1 = &ineq[1];
        if c1.is_zero() {
            continue;
        }
        let v = BigRational::new(-ineq[0].clone(), c1.clone());
        if c1.is_positive() {
            lower = Some(match lower {
                None => v,
                Some(cur) => if v > cur { v } else { cur },
            });
        } else {
            upper = Some(match upper {
                None => v,
                Some(cur) => if v < cur { v } else { cur },
            });
        }
    }
    (lower, upper)
}

pub fn hull_1d(s: &UnionSet) -> HullResult<Polyhedron> {
    let mut running_lower: Option<BigRational> = None;
    let mut running_upper: Option<BigRational> = None;
    let mut first = true;

    for p in s.non_empty_members() {
        let (lo, hi) = one_d_bounds(p);
        if first {
            running_lower = lo;
            running_upper = hi;
            first = false;
        } else {
            running_lower = match (running_lower, lo) {
                (Some(a), Some(b)) => Some(if b < a { b } else { a }),
                _ => None,
            };
            running_upper = match (running_upper, hi) {
                (Some(a), Some(b)) => Some(if b > a { b } else { a }),
                _ => None,
            };
        }
    }

    let mut out = Polyhedron::universe(1);
    if s.is_empty() {
        out.mark_empty();
        return Ok(out);
    }
    match (running_lower, running_upper) {
        (Some(lo), Some(hi)) if lo == hi => {
            let row = crate::linalg::clear_denominators(&[-lo.clone(), BigRational::from_integer(Int::from(1))]);
            out.add_eq(row);
        }
        (lo, hi) => {
            if let Some(lo) = lo {
                let row = crate::linalg::clear_denominators(&[-lo, BigRational::from_integer(Int::from(1))]);
                out.add_ineq(row);
            }
            if let Some(hi) = hi {
                let row = crate::linalg::clear_denominators(&[hi, BigRational::from_integer(Int::from(-1))]);
                out.add_ineq(row);
            }
        }
    }
    Ok(out)
}

/// Eliminate ambient variable `col` (1-indexed row position) from `p`,
/// substituting via an equality when one pins the variable, otherwise
/// combining every positive/negative inequality pair (Fourier–Motzkin).
fn eliminate_var(p: &Polyhedron, col: usize) -> Polyhedron {
    if let Some(pos) = p.eqs.iter().position(|r| !r[col].is_zero()) {
        let pivot = p.eqs[pos].clone();
        let mut out = Polyhedron::universe(p.dim - 1);
        for (i, eq) in p.eqs.iter().enumerate() {
            if i == pos {
                continue;
            }
            let reduced = if eq[col].is_zero() { eq.clone() } else { arith::eliminate_leading(eq, &pivot, col) };
            let mut r = reduced;
            r.remove(col);
            if !arith::is_zero_row(&r) {
                out.add_eq(r);
            }
        }
        for ineq in &p.ineqs {
            let reduced = if ineq[col].is_zero() { ineq.clone() } else { arith::eliminate_leading(ineq, &pivot, col) };
            let mut r = reduced;
            r.remove(col);
            out.add_ineq(r);
        }
        out.simplify_trivial();
        return out;
    }

    let mut out = Polyhedron::universe(p.dim - 1);
    for eq in &p.eqs {
        let mut r = eq.clone();
        r.remove(col);
        out.add_eq(r);
    }
    let pos: Vec<&Vec<Int>> = p.ineqs.iter().filter(|r| r[col].is_positive()).collect();
    let neg: Vec<&Vec<Int>> = p.ineqs.iter().filter(|r| r[col].is_negative()).collect();
    let zero: Vec<&Vec<Int>> = p.ineqs.iter().filter(|r| r[col].is_zero()).collect();
    for z in zero {
        let mut r = z.clone();
        r.remove(col);
        out.add_ineq(r);
    }
    for pr in &pos {
        for nr in &neg {
            let ap = pr[col].clone();
            let an = nr[col].clone();
            let mut p_rest = (*pr).clone();
            p_rest.remove(col);
            let mut n_rest = (*nr).clone();
            n_rest.remove(col);
            let combined = arith::combine(&p_rest, &(-&an), &n_rest, &ap);
            out.add_ineq(arith::gcd_normalize(&combined));
        }
    }
    out.simplify_trivial();
    out
}

/// conv(p ∪ q) via a Minkowski-sum homogeneous lift, eliminating the
/// auxiliary `(lambda, mu, y, z)` block with Fourier–Motzkin.
fn convex_hull_pair(p: &Polyhedron, q: &Polyhedron) -> Polyhedron {
    let d = p.dim;
    let total = 3 * d + 2;
    // layout: x[0..d), lambda(d), mu(d+1), y[d+2..2d+2), z[2d+2..3d+2)
    let lambda = d;
    let mu = d + 1;
    let y0 = d + 2;
    let z0 = 2 * d + 2;

    let mut lifted = Polyhedron::universe(total);
    for eq in &p.eqs {
        lifted.add_eq(cone_row(eq, lambda, y0, total));
    }
    for ineq in &p.ineqs {
        lifted.add_ineq(cone_row(ineq, lambda, y0, total));
    }
    let mut lambda_nonneg = arith::zero_row(total + 1);
    lambda_nonneg[lambda + 1] = Int::from(1);
    lifted.add_ineq(lambda_nonneg);

    for eq in &q.eqs {
        lifted.add_eq(cone_row(eq, mu, z0, total));
    }
    for ineq in &q.ineqs {
        lifted.add_ineq(cone_row(ineq, mu, z0, total));
    }
    let mut mu_nonneg = arith::zero_row(total + 1);
    mu_nonneg[mu + 1] = Int::from(1);
    lifted.add_ineq(mu_nonneg);

    let mut sum_one = arith::zero_row(total + 1);
    sum_one[0] = Int::from(-1);
    sum_one[lambda + 1] = Int::from(1);
    sum_one[mu + 1] = Int::from(1);
    lifted.add_eq(sum_one);

    for i in 0..d {
        let mut link = arith::zero_row(total + 1);
        link[i + 1] = Int::from(1);
        link[y0 + i + 1] = Int::from(-1);
        link[z0 + i + 1] = Int::from(-1);
        lifted.add_eq(link);
    }

    let mut current = lifted;
    while current.dim > d {
        current = eliminate_var(&current, current.dim);
    }
    current
}

/// Coefficient row for the cone over `(scale_var, block vars)`: a row
/// `[c0, c1..cd]` becomes `c0 * scale_var + sum ci * block_i`.
fn cone_row(row: &[Int], scale_idx: usize, block0: usize, total: usize) -> Vec<Int> {
    let mut out = arith::zero_row(total + 1);
    out[scale_idx + 1] = row[0].clone();
    for (i, c) in row[1..].iter().enumerate() {
        out[block0 + i + 1] = c.clone();
    }
    out
}

/// Unbounded / general ≥2-D hull via pairwise Fourier–Motzkin combination.
pub fn hull_unbounded(s: &UnionSet) -> HullResult<Polyhedron> {
    let mut members = s.non_empty_members().cloned();
    let Some(mut running) = members.next() else {
        return Ok(Polyhedron::empty(s.dim));
    };
    for m in members {
        running = convex_hull_pair(&running, &m);
    }
    convex_hull_polyhedron(running)
}
