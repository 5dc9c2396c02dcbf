//! Affine-hull factoring (§4.13): a from-scratch substitute for isl's
//! undisclosed `isl_set_affine_hull`/`modulo_affine_hull`, which the
//! distilled spec treats as an external collaborator. Builds the affine
//! hull of a union as a running `(point, direction basis)` pair, merged
//! member by member via plain linear-algebra span (no LP), then converts
//! back to an equality system via `nullspace`.

use crate::arith::Int;
use crate::error::HullResult;
use crate::linalg::{self, Matrix, Rat};
use crate::polyhedron::Polyhedron;
use crate::redundancy::convex_hull_polyhedron;
use crate::union_set::UnionSet;
use num_traits::{One, Zero};

struct Affine {
    point: Vec<Rat>,
    /// Row basis of the direction space, `dim` columns.
    directions: Matrix,
}

fn affine_of_polyhedron(p: &Polyhedron) -> Affine {
    let dim = p.dim;
    if p.eqs.is_empty() {
        return Affine { point: vec![Rat::zero(); dim], directions: Matrix::identity(dim) };
    }
    // Move the constant column to the end so nullspace vectors are
    // (direction..., constant-multiplier); a nonzero trailing entry yields a
    // particular point, a zero trailing entry yields a pure direction.
    let reordered: Vec<Vec<Int>> = p
        .eqs
        .iter()
        .map(|row| {
            let mut r = row[1..].to_vec();
            r.push(row[0].clone());
            r
        })
        .collect();
    let m = Matrix::from_int_rows(&reordered);
    let ns = linalg::nullspace(&m);

    let anchor = (0..ns.rows).find(|&i| !ns.data[i][dim].is_zero());
    let Some(anchor) = anchor else {
        // Inconsistent system; shouldn't happen for a non-empty polyhedron.
        // Fall back to the origin — callers only reach here after an
        // emptiness check.
        return Affine { point: vec![Rat::zero(); dim], directions: Matrix::zero(0, dim) };
    };
    let scale = ns.data[anchor][dim].clone();
    let point: Vec<Rat> = (0..dim).map(|j| &ns.data[anchor][j] / &scale).collect();

    let mut dir_rows = Vec::new();
    for i in 0..ns.rows {
        if i == anchor {
            continue;
        }
        // Eliminate the trailing (constant) component against the anchor
        // row so what remains is a pure direction vector.
        let k = &ns.data[i][dim] / &scale;
        let row: Vec<Rat> = (0..dim).map(|j| &ns.data[i][j] - &k * &ns.data[anchor][j]).collect();
        dir_rows.push(row);
    }
    let dir_matrix = Matrix { rows: dir_rows.len(), cols: dim, data: dir_rows };
    let (reduced, pivots) = linalg::rref(&dir_matrix);
    let basis: Vec<Vec<Rat>> = pivots.iter().enumerate().map(|(i, _)| reduced.data[i].clone()).collect();
    Affine { point, directions: Matrix { rows: basis.len(), cols: dim, data: basis } }
}

fn merge(a: Affine, b: Affine) -> Affine {
    let dim = a.point.len();
    let mut rows = a.directions.data.clone();
    rows.extend(b.directions.data.clone());
    let connector: Vec<Rat> = (0..dim).map(|j| &b.point[j] - &a.point[j]).collect();
    rows.push(connector);
    let stacked = Matrix { rows: rows.len(), cols: dim, data: rows };
    let (reduced, pivots) = linalg::rref(&stacked);
    let basis: Vec<Vec<Rat>> = pivots.iter().enumerate().map(|(i, _)| reduced.data[i].clone()).collect();
    Affine { point: a.point, directions: Matrix { rows: basis.len(), cols: dim, data: basis } }
}

/// Compute the affine hull of `s` as an equality system (rows of length
/// `dim + 1`). An all-universe affine hull returns an empty equality list.
pub fn affine_hull(s: &UnionSet) -> HullResult<Vec<Vec<Int>>> {
    let dim = s.dim;
    let mut running: Option<Affine> = None;
    for p in s.non_empty_members() {
        let reduced = convex_hull_polyhedron(p.clone())?;
        let a = affine_of_polyhedron(&reduced);
        running = Some(match running {
            None => a,
            Some(r) => merge(r, a),
        });
    }
    let Some(aff) = running else {
        return Ok(Vec::new());
    };
    if aff.directions.rows == dim {
        return Ok(Vec::new());
    }
    let ns = linalg::nullspace(&aff.directions);
    let mut out = Vec::with_capacity(ns.rows);
    for i in 0..ns.rows {
        let e = &ns.data[i];
        let mut dot = Rat::zero();
        for j in 0..dim {
            dot = &dot + &e[j] * &aff.point[j];
        }
        let mut row = vec![-dot];
        row.extend(e.iter().cloned());
        out.push(linalg::clear_denominators(&row));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyhedron::Polyhedron;

    fn row(c0: i64, coeffs: &[i64]) -> Vec<Int> {
        let mut v = vec![Int::from(c0)];
        v.extend(coeffs.iter().map(|&c| Int::from(c)));
        v
    }

    #[test]
    fn parallel_lines_yield_diagonal() {
        // {x=0,y=0} union {x=1,y=1}: affine hull should be x=y.
        let mut p0 = Polyhedron::universe(2);
        p0.add_eq(row(0, &[1, 0]));
        p0.add_eq(row(0, &[0, 1]));
        let mut p1 = Polyhedron::universe(2);
        p1.add_eq(row(-1, &[1, 0]));
        p1.add_eq(row(-1, &[0, 1]));
        let s = UnionSet::new(2, vec![p0, p1]);
        let hull = affine_hull(&s).unwrap();
        assert_eq!(hull.len(), 1);
        let normalized = linalg::clear_denominators(
            &hull[0].iter().map(|v| Rat::from_integer(v.clone())).collect::<Vec<_>>(),
        );
        assert!(normalized == vec![Int::zero(), Int::from(1), Int::from(-1)] || normalized == vec![Int::zero(), Int::from(-1), Int::from(1)]);
    }
}
