//! CollapseError: Unified error type for cube-collapse public APIs
//!
//! Every fallible operation in the crate returns this error. Variants split
//! into two families: construction errors (bad intervals, mixed embedding
//! dimensions, arena exhaustion) and contract violations, which mean a caller
//! or the engine itself broke an incidence invariant. Contract violations are
//! never recovered from; continuing would corrupt the incidence index.

use crate::cubical::cube::Cube;
use thiserror::Error;

/// Unified error type for cube-collapse operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollapseError {
    /// Attempted to construct a CellId with a zero value (invalid).
    #[error("CellId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidCellId,
    /// The cell arena ran out of `u32` ids.
    #[error("cell arena exhausted: cannot intern more than {} cells", u32::MAX - 1)]
    ArenaExhausted,
    /// An interval was neither degenerate nor of unit length.
    #[error("interval [{lo},{hi}] is not elementary (expected hi == lo or hi == lo + 1)")]
    NonElementaryInterval { lo: i64, hi: i64 },
    /// Cells of one complex must share the same embedding dimension.
    #[error("embedding dimension mismatch: expected {expected}, found {found} in {cell}")]
    EmbeddingMismatch {
        expected: usize,
        found: usize,
        cell: Cube,
    },
    /// A cell registered as maximal is a face of another maximal cell.
    #[error("contract violation: {cell} is indexed as maximal but is a face of {cofacet}")]
    MaximalCellIsFace { cell: Cube, cofacet: Cube },
    /// A cell was registered as maximal twice.
    #[error("contract violation: {0} is already indexed as a maximal cell")]
    DuplicateMaximal(Cube),
    /// The face is not a key of the incidence index.
    #[error("contract violation: {0} is not a key of the incidence index")]
    UnknownFace(Cube),
    /// The face does not have exactly one cofacet.
    #[error("contract violation: {face} is not free ({cofacets} cofacets)")]
    NotFree { face: Cube, cofacets: usize },
    /// The face has one cofacet but lies inside a higher-dimensional maximal cell.
    #[error("contract violation: {face} lies in the boundary of {cover}, which is not its cofacet")]
    CoveredFace { face: Cube, cover: Cube },
    /// The face is not a primary face of the claimed cofacet.
    #[error("contract violation: {face} is not a primary face of {cell}")]
    NotPrimaryFace { face: Cube, cell: Cube },
    /// The cube is not a maximal cell of the complex.
    #[error("contract violation: {0} is not a maximal cell of the complex")]
    NotMaximal(Cube),
    /// Output verification found a non-maximal cell in a maximal-cell set.
    #[error("maximality violated: {face} is a proper face of {cell}")]
    MaximalityViolated { face: Cube, cell: Cube },
    /// Full invariant validation of an incidence index failed.
    #[error("incidence invariant violated: {0}")]
    InvariantViolation(String),
}

impl CollapseError {
    /// `true` for errors that signal a broken invariant rather than bad input data.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(
            self,
            CollapseError::InvalidCellId
                | CollapseError::ArenaExhausted
                | CollapseError::NonElementaryInterval { .. }
                | CollapseError::EmbeddingMismatch { .. }
        )
    }
}
