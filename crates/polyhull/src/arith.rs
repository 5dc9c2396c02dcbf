//! Big-integer row vector helpers.
//!
//! Every polyhedron row is a `Vec<Int>` of length `dim + 1`: index 0 is the
//! constant term, indices `1..=dim` are the coefficients of the ambient
//! variables. These helpers operate on that convention directly rather than
//! wrapping it in a newtype, matching the teacher's preference for thin,
//! directly-indexable geometry types (`Poly2` is a bare `Vec<Hs2>`).

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

pub type Int = BigInt;

pub fn zero_row(len: usize) -> Vec<Int> {
    vec![Int::zero(); len]
}

/// Index of the first non-zero coefficient in `row[skip..]`, or `None`.
pub fn first_nonzero(row: &[Int], skip: usize) -> Option<usize> {
    row.iter().skip(skip).position(|c| !c.is_zero()).map(|i| i + skip)
}

pub fn is_zero_row(row: &[Int]) -> bool {
    row.iter().all(|c| c.is_zero())
}

pub fn dot(a: &[Int], b: &[Int]) -> Int {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).fold(Int::zero(), |acc, v| acc + v)
}

pub fn scale(row: &[Int], k: &Int) -> Vec<Int> {
    row.iter().map(|c| c * k).collect()
}

pub fn add(a: &[Int], b: &[Int]) -> Vec<Int> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

/// `a*ka + b*kb`, elementwise.
pub fn combine(a: &[Int], ka: &Int, b: &[Int], kb: &Int) -> Vec<Int> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * ka + y * kb).collect()
}

pub fn negate(row: &[Int]) -> Vec<Int> {
    row.iter().map(|c| -c).collect()
}

fn gcd(a: &Int, b: &Int) -> Int {
    let (mut a, mut b) = (a.abs(), b.abs());
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Divide a row by the gcd of its entries, so the stored integer
/// representative of a halfspace/equality is in lowest terms. A zero row is
/// returned unchanged.
pub fn gcd_normalize(row: &[Int]) -> Vec<Int> {
    let g = row.iter().fold(Int::zero(), |acc, c| gcd(&acc, c));
    if g.is_zero() || g == Int::one() {
        return row.to_vec();
    }
    row.iter().map(|c| c / &g).collect()
}

/// Row-equality after gcd normalization — used by `extend` to dedupe facets
/// discovered from different ridges.
pub fn rows_equivalent(a: &[Int], b: &[Int]) -> bool {
    gcd_normalize(a) == gcd_normalize(b)
}

pub fn eliminate_leading(row: &[Int], pivot: &[Int], col: usize) -> Vec<Int> {
    if pivot[col].is_zero() || row[col].is_zero() {
        return row.to_vec();
    }
    let g = gcd(&row[col], &pivot[col]);
    let ra = &pivot[col] / &g;
    let rb = &row[col] / &g;
    combine(row, &ra, pivot, &-rb)
}
