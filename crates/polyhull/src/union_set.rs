//! `UnionSet`: an ordered collection of polyhedra sharing one ambient
//! dimension. The set-theoretic union of its members is `S` throughout
//! SPEC_FULL.md.

use crate::polyhedron::Polyhedron;

#[derive(Clone, Debug)]
pub struct UnionSet {
    pub dim: usize,
    pub members: Vec<Polyhedron>,
}

impl UnionSet {
    pub fn new(dim: usize, members: Vec<Polyhedron>) -> Self {
        debug_assert!(members.iter().all(|p| p.dim == dim));
        Self { dim, members }
    }

    pub fn single(p: Polyhedron) -> Self {
        let dim = p.dim;
        Self { dim, members: vec![p] }
    }

    pub fn is_empty(&self) -> bool {
        self.members.iter().all(|p| p.empty)
    }

    pub fn non_empty_members(&self) -> impl Iterator<Item = &Polyhedron> {
        self.members.iter().filter(|p| !p.empty)
    }

    pub fn non_empty_count(&self) -> usize {
        self.non_empty_members().count()
    }
}
