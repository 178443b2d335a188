//! Errors raised for malformed path drawings.
//!
//! A drawing that simply lacks a start or end marker is not an error: the
//! traversal reports that as "no path" instead.

use thiserror::Error;

use crate::cell::Pos;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, PathError>;

/// Ways a path drawing can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// More than one `@` in the grid. Raised while scanning for markers,
    /// before any traversal.
    #[error("multiple start characters found at {first} and {second}")]
    DuplicateStartMarker { first: Pos, second: Pos },

    /// More than one `x` in the grid.
    #[error("multiple end characters found at {first} and {second}")]
    DuplicateEndMarker { first: Pos, second: Pos },

    /// The path cannot be continued unambiguously: a fork, a gap or a
    /// dead end.
    #[error("invalid map: {candidates} possible continuations at {at}")]
    AmbiguousPath { at: Pos, candidates: usize },

    /// A `+` the path passes straight through without changing direction.
    #[error("fake turn at {at}")]
    FakeTurn { at: Pos },

    /// The walk exceeded its step bound without reaching the end.
    #[error("path did not terminate within {steps} steps")]
    DidNotTerminate { steps: usize },
}
