//! Incidence bookkeeping for elementary collapses.
//!
//! This module provides:
//! - `CellId` handles and the `CellArena` that interns cubes
//! - `FastMap`, the hash map used by both, selected by cargo features
//! - `IncidenceIndex`, the face → maximal-cofacet map the collapse engine edits
//!
//! Most callers never touch this module directly and go through
//! [`crate::algs::collapse`] instead.

mod _debug_invariants;
pub mod arena;
pub mod cell_id;
pub mod index;
pub mod perf;

pub use arena::CellArena;
pub use cell_id::CellId;
pub use index::{CollapseStep, FaceKey, IncidenceIndex};
