//! Error type for the hull core.
//!
//! A single sentinel covers the two kinds of failure that are actual bugs
//! rather than ordinary outcomes: an LP that misbehaves (arithmetic/internal
//! invariant violation) and a precondition violation in a caller-facing
//! entry point. Empty detection and unboundedness are *not* errors — they
//! are first-class outcomes handled in-band (see `crate::lp::LpOutcome`).

use std::fmt;

#[derive(Debug)]
pub enum HullError {
    /// The LP primitive hit an internal invariant violation (e.g. a pivot
    /// could not find a leaving variable while the tableau claims feasible).
    Lp(String),
    /// A caller- or algorithm-internal precondition was violated.
    Precondition(String),
}

impl HullError {
    pub(crate) fn lp(reason: impl Into<String>) -> Self {
        Self::Lp(reason.into())
    }

    pub(crate) fn precondition(reason: impl Into<String>) -> Self {
        Self::Precondition(reason.into())
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lp(reason) => write!(f, "linear programming error: {reason}"),
            Self::Precondition(reason) => write!(f, "precondition violated: {reason}"),
        }
    }
}

impl std::error::Error for HullError {}

pub type HullResult<T> = Result<T, HullError>;
