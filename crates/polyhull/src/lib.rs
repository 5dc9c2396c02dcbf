//! Exact rational convex hulls of unions of integer polyhedra.
//!
//! The algorithmic core is a Rust port of isl's facet-wrapping convex hull
//! algorithm: bound-direction search, initial-facet assembly, and recursive
//! hull extension for the bounded general case, with dedicated paths for
//! 0-D, 1-D, and unbounded inputs. Everything is exact — `BigInt` rows,
//! `BigRational` linear programming and linear algebra, no tolerances.

pub mod affine_hull;
pub mod arith;
pub mod bounds;
pub mod compute_facet;
pub mod driver;
pub mod error;
pub mod extend;
pub mod initial_facet;
pub mod linalg;
pub mod lowdim;
pub mod lp;
pub mod polyhedron;
pub mod redundancy;
pub mod simple_hull;
pub mod union_set;
pub mod wrap;

pub use driver::convex_hull;
pub use error::{HullError, HullResult};
pub use polyhedron::Polyhedron;
pub use redundancy::convex_hull_polyhedron;
pub use simple_hull::simple_hull;
pub use union_set::UnionSet;

/// Common imports for callers building unions by hand.
pub mod prelude {
    pub use crate::arith::Int;
    pub use crate::polyhedron::Polyhedron;
    pub use crate::union_set::UnionSet;
    pub use crate::{convex_hull, convex_hull_polyhedron, simple_hull, HullError, HullResult};
}
