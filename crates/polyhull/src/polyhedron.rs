//! The `Polyhedron` data structure: a pure, division- and parameter-free
//! rational polyhedron over `dim` ambient variables.
//!
//! Modeled on the teacher's `Poly2` (`crates/viterbo/src/geom2/types.rs`): a
//! thin struct wrapping a `Vec` of rows, with small inherent-impl
//! constructors, generalized from 2-D floating-point half-spaces to
//! `dim`-dimensional exact-integer rows split into equalities and
//! inequalities (isl's `isl_basic_set` distinguishes the two explicitly; a
//! single signed row list would blur the `= 0` / `>= 0` distinction that
//! several algorithms below depend on).

use crate::arith::{self, Int};
use num_traits::Zero;

/// A single polyhedron: `eqs` rows mean `row . (1, x) = 0`, `ineqs` rows mean
/// `row . (1, x) >= 0`. Every row has length `dim + 1`.
#[derive(Clone, Debug)]
pub struct Polyhedron {
    pub dim: usize,
    pub eqs: Vec<Vec<Int>>,
    pub ineqs: Vec<Vec<Int>>,
    pub empty: bool,
    /// No inequality is implied by the others.
    pub no_redundant: bool,
    /// No equality is implied by the inequalities (no implicit equality).
    pub no_implicit: bool,
    /// Coordinates are to be read as a rational polyhedron, with no
    /// integrality constraint implied. `driver::convex_hull` clears this on
    /// its result to mark the coordinates as those of the integer hull.
    pub rational: bool,
}

impl Polyhedron {
    pub fn universe(dim: usize) -> Self {
        Self { dim, eqs: Vec::new(), ineqs: Vec::new(), empty: false, no_redundant: true, no_implicit: true, rational: true }
    }

    pub fn empty(dim: usize) -> Self {
        let mut p = Self::universe(dim);
        p.empty = true;
        p
    }

    pub fn from_rows(dim: usize, eqs: Vec<Vec<Int>>, ineqs: Vec<Vec<Int>>) -> Self {
        debug_assert!(eqs.iter().all(|r| r.len() == dim + 1));
        debug_assert!(ineqs.iter().all(|r| r.len() == dim + 1));
        Self { dim, eqs, ineqs, empty: false, no_redundant: false, no_implicit: false, rational: true }
    }

    pub fn add_eq(&mut self, row: Vec<Int>) {
        debug_assert_eq!(row.len(), self.dim + 1);
        self.no_redundant = false;
        self.no_implicit = false;
        self.eqs.push(row);
    }

    pub fn add_ineq(&mut self, row: Vec<Int>) {
        debug_assert_eq!(row.len(), self.dim + 1);
        self.no_redundant = false;
        self.ineqs.push(row);
    }

    pub fn n_eq(&self) -> usize {
        self.eqs.len()
    }

    pub fn n_ineq(&self) -> usize {
        self.ineqs.len()
    }

    /// All rows (equalities then inequalities), for algorithms that need to
    /// scan every constraint regardless of kind (e.g. `independent_bounds`).
    pub fn all_rows(&self) -> impl Iterator<Item = &Vec<Int>> {
        self.eqs.iter().chain(self.ineqs.iter())
    }

    pub fn mark_empty(&mut self) {
        self.empty = true;
        self.eqs.clear();
        self.ineqs.clear();
    }

    /// Apply an affine change of coordinates `x = U * y` (U is `(dim+1) x
    /// (new_dim+1)`, leading row/col reserved for the constant 1) to every
    /// row: `row' = row . U`. Used to slice into a facet's hyperplane.
    pub fn affine_image(&self, u: &crate::linalg::Matrix) -> Self {
        let new_dim = u.cols - 1;
        let map_row = |row: &[Int]| -> Vec<Int> {
            let r = crate::linalg::Matrix::from_int_rows(&[row.to_vec()]);
            let out = r.mul(u);
            out.to_int_rows().into_iter().next().unwrap_or_else(|| arith::zero_row(new_dim + 1))
        };
        Self {
            dim: new_dim,
            eqs: self.eqs.iter().map(|r| map_row(r)).collect(),
            ineqs: self.ineqs.iter().map(|r| map_row(r)).collect(),
            empty: self.empty,
            no_redundant: false,
            no_implicit: false,
            rational: self.rational,
        }
    }

    /// Drop constraints that are syntactically `0 >= 0` / `0 = 0` after a
    /// projection, and detect a row `c = 0` with `c != 0` as an empty result.
    pub fn simplify_trivial(&mut self) {
        if self.eqs.iter().any(|r| arith::is_zero_row(&r[1..]) && !r[0].is_zero()) {
            self.mark_empty();
            return;
        }
        if self.ineqs.iter().any(|r| arith::is_zero_row(&r[1..]) && r[0] < Int::zero()) {
            self.mark_empty();
            return;
        }
        self.eqs.retain(|r| !arith::is_zero_row(r));
        self.ineqs.retain(|r| !(arith::is_zero_row(&r[1..]) && r[0] >= Int::zero()));
    }

    pub fn is_universe(&self) -> bool {
        !self.empty && self.eqs.is_empty() && self.ineqs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_has_no_constraints() {
        let p = Polyhedron::universe(2);
        assert!(!p.empty);
        assert_eq!(p.n_eq(), 0);
        assert_eq!(p.n_ineq(), 0);
    }

    #[test]
    fn empty_clears_rows() {
        let mut p = Polyhedron::universe(2);
        p.add_ineq(vec![Int::zero(), Int::from(1), Int::zero()]);
        p.mark_empty();
        assert!(p.empty);
        assert_eq!(p.n_ineq(), 0);
    }

    #[test]
    fn simplify_trivial_detects_contradiction() {
        let mut p = Polyhedron::universe(1);
        p.add_eq(vec![Int::from(1), Int::zero()]);
        p.simplify_trivial();
        assert!(p.empty);
    }
}
