//! Exact rational matrix algebra: row reduction, nullspace, and the
//! change-of-coordinates matrices used to slice a polyhedron by a facet or
//! ridge (`right_inverse`, via `complete_to_invertible`).
//!
//! isl computes the analogous change-of-coordinates matrices over the
//! integers via Hermite normal form (`isl_mat_right_inverse`). We use exact
//! `BigRational` Gauss-Jordan elimination instead — same change-of-basis
//! semantics, cheaper to get right without a compiler (see DESIGN.md).

use crate::arith::Int;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

pub type Rat = BigRational;

/// Row-major matrix of exact rationals.
#[derive(Clone, Debug)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<Rat>>,
}

impl Matrix {
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![vec![Rat::zero(); cols]; rows] }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zero(n, n);
        for i in 0..n {
            m.data[i][i] = Rat::one();
        }
        m
    }

    pub fn from_int_rows(rows: &[Vec<Int>]) -> Self {
        let r = rows.len();
        let c = rows.first().map(|row| row.len()).unwrap_or(0);
        let mut data = Vec::with_capacity(r);
        for row in rows {
            data.push(row.iter().map(|x| Rat::from_integer(x.clone())).collect());
        }
        Self { rows: r, cols: c, data }
    }

    pub fn row(&self, i: usize) -> &[Rat] {
        &self.data[i]
    }

    /// Multiply `self * other`.
    pub fn mul(&self, other: &Matrix) -> Matrix {
        assert_eq!(self.cols, other.rows);
        let mut out = Matrix::zero(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                if self.data[i][k].is_zero() {
                    continue;
                }
                for j in 0..other.cols {
                    out.data[i][j] = &out.data[i][j] + &self.data[i][k] * &other.data[k][j];
                }
            }
        }
        out
    }

    pub fn drop_col(&self, col: usize) -> Matrix {
        let mut data = Vec::with_capacity(self.rows);
        for row in &self.data {
            let mut r = row.clone();
            r.remove(col);
            data.push(r);
        }
        Matrix { rows: self.rows, cols: self.cols - 1, data }
    }

    pub fn drop_row(&self, row: usize) -> Matrix {
        let mut data = self.data.clone();
        data.remove(row);
        Matrix { rows: self.rows - 1, cols: self.cols, data }
    }

    /// Clear denominators of each row and return integer rows in lowest terms.
    pub fn to_int_rows(&self) -> Vec<Vec<Int>> {
        self.data.iter().map(|row| clear_denominators(row)).collect()
    }
}

/// Scale a rational row by the lcm of its denominators and gcd-normalize,
/// producing an integer row representing the same halfspace/equality.
pub fn clear_denominators(row: &[Rat]) -> Vec<Int> {
    let lcm = row.iter().fold(BigInt::one(), |acc, v| lcm_bigint(&acc, v.denom()));
    let scaled: Vec<Int> = row.iter().map(|v| (v * &BigRational::from_integer(lcm.clone())).to_integer()).collect();
    crate::arith::gcd_normalize(&scaled)
}

fn lcm_bigint(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::one();
    }
    (a * b).abs() / gcd_bigint(a, b)
}

fn gcd_bigint(a: &BigInt, b: &BigInt) -> BigInt {
    use num_traits::Signed;
    let (mut a, mut b) = (a.abs(), b.abs());
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Reduced row echelon form. Returns the RREF matrix and the list of pivot
/// columns, in row order.
pub fn rref(m: &Matrix) -> (Matrix, Vec<usize>) {
    let mut a = m.clone();
    let mut pivots = Vec::new();
    let mut pivot_row = 0;
    for col in 0..a.cols {
        if pivot_row >= a.rows {
            break;
        }
        let Some(sel) = (pivot_row..a.rows).find(|&r| !a.data[r][col].is_zero()) else {
            continue;
        };
        a.data.swap(pivot_row, sel);
        let pivot_val = a.data[pivot_row][col].clone();
        for j in 0..a.cols {
            a.data[pivot_row][j] = &a.data[pivot_row][j] / &pivot_val;
        }
        for r in 0..a.rows {
            if r == pivot_row {
                continue;
            }
            if a.data[r][col].is_zero() {
                continue;
            }
            let factor = a.data[r][col].clone();
            for j in 0..a.cols {
                let delta = &factor * &a.data[pivot_row][j];
                a.data[r][j] = &a.data[r][j] - &delta;
            }
        }
        pivots.push(col);
        pivot_row += 1;
    }
    (a, pivots)
}

pub fn rank(m: &Matrix) -> usize {
    rref(m).1.len()
}

/// Basis of the null space of `m` (solutions `x` with `m*x = 0`), as rows.
pub fn nullspace(m: &Matrix) -> Matrix {
    let (r, pivots) = rref(m);
    let free: Vec<usize> = (0..m.cols).filter(|c| !pivots.contains(c)).collect();
    if free.is_empty() {
        return Matrix::zero(0, m.cols);
    }
    let mut basis = Vec::with_capacity(free.len());
    for &fc in &free {
        let mut v = vec![Rat::zero(); m.cols];
        v[fc] = Rat::one();
        for (pr, &pc) in pivots.iter().enumerate() {
            v[pc] = -r.data[pr][fc].clone();
        }
        basis.push(v);
    }
    Matrix { rows: basis.len(), cols: m.cols, data: basis }
}

/// Solve `m * x = 0` is the only nullspace use here; for affine systems
/// (`m * (1, x) = 0`) callers prepend the homogenizing `1` column and split
/// the solution afterwards (see `affine_hull.rs`).
pub fn invert_square(m: &Matrix) -> Option<Matrix> {
    assert_eq!(m.rows, m.cols);
    let n = m.rows;
    let mut a = m.clone();
    let mut inv = Matrix::identity(n);
    for col in 0..n {
        let sel = (col..n).find(|&r| !a.data[r][col].is_zero())?;
        a.data.swap(col, sel);
        inv.data.swap(col, sel);
        let pivot_val = a.data[col][col].clone();
        for j in 0..n {
            a.data[col][j] = &a.data[col][j] / &pivot_val;
            inv.data[col][j] = &inv.data[col][j] / &pivot_val;
        }
        for r in 0..n {
            if r == col || a.data[r][col].is_zero() {
                continue;
            }
            let factor = a.data[r][col].clone();
            for j in 0..n {
                let da = &factor * &a.data[col][j];
                a.data[r][j] = &a.data[r][j] - &da;
                let di = &factor * &inv.data[col][j];
                inv.data[r][j] = &inv.data[r][j] - &di;
            }
        }
    }
    Some(inv)
}

/// Extend the given `rows` (assumed linearly independent) to a square
/// invertible matrix by appending standard basis rows that are independent
/// of what's already there. Mirrors isl's `isl_mat_complete_to_invertible`.
pub fn complete_to_invertible(rows: &Matrix) -> Matrix {
    let n = rows.cols;
    let mut data = rows.data.clone();
    for i in 0..n {
        let mut candidate = vec![Rat::zero(); n];
        candidate[i] = Rat::one();
        let mut trial = data.clone();
        trial.push(candidate.clone());
        let trial_m = Matrix { rows: trial.len(), cols: n, data: trial };
        if rank(&trial_m) == data.len() + 1 {
            data.push(candidate);
        }
        if data.len() == n {
            break;
        }
    }
    Matrix { rows: data.len(), cols: n, data }
}

/// isl's `right_inverse`: given rows `U` (k independent rows of length n),
/// return the inverse of `complete_to_invertible(U)`, a square matrix `Q`
/// such that `U * Q = [I_k | 0]`. When `U` already has `n` rows this is
/// exactly `invert_square(U)`.
pub fn right_inverse(rows: &Matrix) -> Matrix {
    let completed = complete_to_invertible(rows);
    invert_square(&completed).expect("complete_to_invertible produces a full-rank matrix by construction")
}
