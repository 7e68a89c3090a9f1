#![cfg_attr(docsrs, feature(doc_cfg))]
//! # cube-collapse
//!
//! cube-collapse shrinks finite cubical complexes by elementary collapses
//! before an expensive homology computation. The reduced complex has the same
//! homotopy type as the input, so its homology is the same, but it usually has
//! far fewer cells.
//!
//! ## Features
//! - Elementary intervals, cubes and complexes stored by their maximal cells
//! - An incidence index mapping every primary face to its maximal cofacets,
//!   edited in place by local collapse steps
//! - Fixed-point collapse (`collapse_all`, `collapse_to_fixed_point`), a
//!   step-wise `CollapseEngine`, and a bulk one-round strategy
//! - Optional component-parallel collapse with the `rayon` feature
//!
//! ## Usage
//!
//! ```rust
//! use cube_collapse::prelude::*;
//!
//! let cube = Cube::from_pairs(&[(0, 1), (0, 1), (0, 1)])?;
//! let cx = CubicalComplex::new([cube])?;
//! let reduced = collapse_all(&cx)?;
//! assert_eq!(reduced.len(), 1);
//! assert_eq!(reduced.euler_characteristic(), cx.euler_characteristic());
//! # Ok::<(), cube_collapse::collapse_error::CollapseError>(())
//! ```
//!
//! ## Determinism
//!
//! Free-face selection walks ordered sets, so the surviving cells depend only
//! on the input, never on hash iteration order or enabled features.
//!
//! ## Logging
//!
//! The crate logs through the `log` facade: `debug!` at engine boundaries,
//! `trace!` per collapse. It never installs a logger.

pub mod algs;
pub mod collapse_error;
pub mod cubical;
pub mod debug_invariants;
pub mod incidence;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::collapse::{
        CollapseEngine, CollapseOptions, CollapseStats, collapse_all, collapse_to_fixed_point,
    };
    pub use crate::algs::components::collapse_components;
    pub use crate::algs::elementary::elementary_collapse;
    pub use crate::algs::round::{collapse_one_round, free_faces};
    pub use crate::collapse_error::CollapseError;
    pub use crate::cubical::{Cube, CubicalComplex, Interval};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::incidence::{CellId, CollapseStep, FaceKey, IncidenceIndex};
}
