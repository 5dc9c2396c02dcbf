//! Exact rational linear programming: minimize `c . x` over a `Polyhedron`.
//!
//! Two-phase primal simplex over `BigRational`, with Bland's smallest-index
//! rule used throughout (both for the entering and the leaving variable) to
//! guarantee termination without cycling. Unlike a floating-point simplex
//! (e.g. `radevgit-selen`'s `lpsolver`, which pivots by largest-coefficient
//! and tie-breaks with `feasibility_tol`/`optimality_tol`), exact arithmetic
//! has no use for a numeric tolerance — Bland's rule is both necessary and
//! sufficient here, so that's the only pivoting discipline implemented.
//!
//! Free ambient variables are split `x_i = p_i - m_i` (`p_i, m_i >= 0`);
//! each inequality row gets a slack `s_j >= 0`; each row (equality or
//! inequality) gets one artificial variable to seed a phase-1 basic
//! feasible solution.

use crate::arith::Int;
use crate::error::{HullError, HullResult};
use crate::polyhedron::Polyhedron;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

pub type Rat = BigRational;

#[derive(Debug, Clone, PartialEq)]
pub enum LpOutcome {
    Optimal(Rat),
    Empty,
    Unbounded,
}

struct Tableau {
    /// rows x cols, Gauss-Jordan reduced form relative to `basis`.
    a: Vec<Vec<Rat>>,
    rhs: Vec<Rat>,
    basis: Vec<usize>,
    obj: Vec<Rat>,
    obj_val: Rat,
    cols: usize,
}

impl Tableau {
    fn pivot(&mut self, row: usize, col: usize) {
        let pivot_val = self.a[row][col].clone();
        debug_assert!(!pivot_val.is_zero());
        for j in 0..self.cols {
            self.a[row][j] = &self.a[row][j] / &pivot_val;
        }
        self.rhs[row] = &self.rhs[row] / &pivot_val;
        for i in 0..self.a.len() {
            if i == row {
                continue;
            }
            let factor = self.a[i][col].clone();
            if factor.is_zero() {
                continue;
            }
            for j in 0..self.cols {
                let delta = &factor * &self.a[row][j];
                self.a[i][j] = &self.a[i][j] - &delta;
            }
            self.rhs[i] = &self.rhs[i] - &factor * &self.rhs[row];
        }
        let obj_factor = self.obj[col].clone();
        if !obj_factor.is_zero() {
            for j in 0..self.cols {
                let delta = &obj_factor * &self.a[row][j];
                self.obj[j] = &self.obj[j] - &delta;
            }
            self.obj_val = &self.obj_val - &obj_factor * &self.rhs[row];
        }
        self.basis[row] = col;
    }

    /// Runs simplex iterations (Bland's rule) until optimal or unbounded.
    /// `allowed` restricts which columns may enter (phase 2 forbids
    /// re-entering artificial columns).
    fn run(&mut self, allowed: impl Fn(usize) -> bool) -> Result<(), ()> {
        loop {
            let entering = (0..self.cols).find(|&j| allowed(j) && self.obj[j] < Rat::zero());
            let Some(q) = entering else {
                return Ok(());
            };
            let mut leaving: Option<usize> = None;
            let mut best_ratio: Option<Rat> = None;
            for i in 0..self.a.len() {
                let coeff = &self.a[i][q];
                if *coeff <= Rat::zero() {
                    continue;
                }
                let ratio = &self.rhs[i] / coeff;
                let better = match &best_ratio {
                    None => true,
                    Some(r) => ratio < *r || (ratio == *r && self.basis[i] < self.basis[leaving.unwrap()]),
                };
                if better {
                    best_ratio = Some(ratio);
                    leaving = Some(i);
                }
            }
            let Some(row) = leaving else {
                return Err(());
            };
            self.pivot(row, q);
        }
    }
}

/// Minimize `objective . x` over `p`. `objective` has length `p.dim`.
pub fn solve_lp(p: &Polyhedron, objective: &[Int]) -> HullResult<LpOutcome> {
    debug_assert_eq!(objective.len(), p.dim);
    if p.empty {
        return Ok(LpOutcome::Empty);
    }
    let dim = p.dim;
    let n_ineq = p.ineqs.len();
    let n_rows = p.eqs.len() + p.ineqs.len();

    if n_rows == 0 {
        // Unconstrained: bounded only if the objective is identically zero.
        if objective.iter().all(|c| c.is_zero()) {
            return Ok(LpOutcome::Optimal(Rat::zero()));
        }
        return Ok(LpOutcome::Unbounded);
    }

    let real_cols = 2 * dim + n_ineq;
    let total_cols = real_cols + n_rows;

    let mut a = vec![vec![Rat::zero(); total_cols]; n_rows];
    let mut rhs = vec![Rat::zero(); n_rows];
    let mut basis = vec![0usize; n_rows];

    let mut row_idx = 0;
    for eq in &p.eqs {
        fill_row(&mut a[row_idx], dim, None, &eq[1..]);
        let mut r = Rat::from_integer(-eq[0].clone());
        if r < Rat::zero() {
            negate_real_part(&mut a[row_idx], real_cols);
            r = -r;
        }
        rhs[row_idx] = r;
        let art_col = real_cols + row_idx;
        a[row_idx][art_col] = Rat::one();
        basis[row_idx] = art_col;
        row_idx += 1;
    }
    for (j, ineq) in p.ineqs.iter().enumerate() {
        fill_row(&mut a[row_idx], dim, Some(2 * dim + j), &ineq[1..]);
        let mut r = Rat::from_integer(-ineq[0].clone());
        if r < Rat::zero() {
            negate_real_part(&mut a[row_idx], real_cols);
            r = -r;
        }
        rhs[row_idx] = r;
        let art_col = real_cols + row_idx;
        a[row_idx][art_col] = Rat::one();
        basis[row_idx] = art_col;
        row_idx += 1;
    }

    // Phase 1: minimize sum of artificials.
    let mut obj = vec![Rat::zero(); total_cols];
    for j in real_cols..total_cols {
        obj[j] = Rat::one();
    }
    let mut obj_val = Rat::zero();
    let mut tab = Tableau { a, rhs, basis, obj, obj_val: Rat::zero(), cols: total_cols };
    // obj row must reflect reduced costs relative to the initial (all-artificial) basis.
    for (i, &b) in tab.basis.iter().enumerate() {
        let c_b = if b >= real_cols { Rat::one() } else { Rat::zero() };
        if c_b.is_zero() {
            continue;
        }
        for j in 0..total_cols {
            tab.obj[j] = &tab.obj[j] - &tab.a[i][j];
        }
        obj_val = &obj_val - &tab.rhs[i];
    }
    tab.obj_val = obj_val;

    if tab.run(|j| j < total_cols).is_err() {
        // Phase 1 is always bounded below by 0; an "unbounded" signal here
        // means the construction above is internally inconsistent.
        return Err(HullError::lp("phase 1 objective reported unbounded"));
    }

    if !(-&tab.obj_val).is_zero() {
        return Ok(LpOutcome::Empty);
    }

    for row in 0..tab.a.len() {
        if tab.basis[row] >= real_cols {
            if let Some(col) = (0..real_cols).find(|&c| !tab.a[row][c].is_zero()) {
                tab.pivot(row, col);
            }
        }
    }

    // Phase 2: minimize the real objective over p/m, zero elsewhere.
    let mut obj2 = vec![Rat::zero(); total_cols];
    for i in 0..dim {
        obj2[i] = Rat::from_integer(objective[i].clone());
        obj2[dim + i] = -Rat::from_integer(objective[i].clone());
    }
    let mut obj_val2 = Rat::zero();
    for (i, &b) in tab.basis.iter().enumerate() {
        let c_b = obj2[b].clone();
        if c_b.is_zero() {
            continue;
        }
        for j in 0..total_cols {
            let delta = &c_b * &tab.a[i][j];
            obj2[j] = &obj2[j] - &delta;
        }
        obj_val2 = &obj_val2 - &c_b * &tab.rhs[i];
    }
    tab.obj = obj2;
    tab.obj_val = obj_val2;

    if tab.run(|j| j < real_cols).is_err() {
        return Ok(LpOutcome::Unbounded);
    }

    Ok(LpOutcome::Optimal(-&tab.obj_val))
}

fn fill_row(row: &mut [Rat], dim: usize, slack_col: Option<usize>, coeffs: &[Int]) {
    for i in 0..dim {
        row[i] = Rat::from_integer(coeffs[i].clone());
        row[dim + i] = -Rat::from_integer(coeffs[i].clone());
    }
    if let Some(sc) = slack_col {
        row[sc] = -Rat::one();
    }
}

fn negate_real_part(row: &mut [Rat], real_cols: usize) {
    for c in row.iter_mut().take(real_cols) {
        *c = -c.clone();
    }
}
