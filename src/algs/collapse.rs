//! Fixed-point collapse engine.
//!
//! [`CollapseEngine`] owns an [`IncidenceIndex`] and applies elementary
//! collapses one at a time until no free face is left. Each step removes one
//! free face and its unique cofacet, so the closure of the complex loses
//! exactly two cells per step and the loop always terminates.
//!
//! ```rust
//! use cube_collapse::prelude::*;
//! let square = Cube::from_pairs(&[(0, 1), (0, 1)]).unwrap();
//! let cx = CubicalComplex::new([square]).unwrap();
//! let reduced = collapse_all(&cx).unwrap();
//! assert_eq!(reduced.maximal_cells(), &[Cube::point(&[0, 0])]);
//! ```

use crate::collapse_error::CollapseError;
use crate::cubical::complex::CubicalComplex;
use crate::debug_invariants::DebugInvariants;
use crate::incidence::index::{CollapseStep, IncidenceIndex};

/// Options for [`collapse_to_fixed_point`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollapseOptions {
    /// Re-check on materialization that no surviving cell is a proper face
    /// of another. On by default.
    pub verify_maximality: bool,
}

impl Default for CollapseOptions {
    fn default() -> Self {
        Self {
            verify_maximality: true,
        }
    }
}

impl CollapseOptions {
    /// Skips the output maximality check; for batch use on trusted inputs.
    pub const fn unchecked() -> Self {
        Self {
            verify_maximality: false,
        }
    }
}

/// Counters accumulated by a [`CollapseEngine`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollapseStats {
    /// Elementary collapses performed.
    pub collapses: usize,
    /// Faces that became maximal.
    pub promoted: usize,
    /// Faces left without a cofacet but still inside a higher cell.
    pub absorbed: usize,
}

/// Step-wise driver of the fixed-point collapse.
#[derive(Debug)]
pub struct CollapseEngine {
    index: IncidenceIndex,
    options: CollapseOptions,
    stats: CollapseStats,
}

impl CollapseEngine {
    /// Indexes the maximal cells of `complex`.
    pub fn new(complex: &CubicalComplex, options: CollapseOptions) -> Result<Self, CollapseError> {
        let index = IncidenceIndex::from_complex(complex)?;
        index.debug_assert_invariants();
        log::debug!(
            "collapse engine start: {} maximal cells, {} keys, {} free faces",
            index.maximal_count(),
            index.key_count(),
            index.free_count()
        );
        Ok(Self {
            index,
            options,
            stats: CollapseStats::default(),
        })
    }

    /// Performs one collapse; `Ok(None)` once no free face is left.
    pub fn step(&mut self) -> Result<Option<CollapseStep>, CollapseError> {
        let Some(face) = self.index.select_free_face() else {
            return Ok(None);
        };
        let step = self.index.collapse(face)?;
        self.stats.collapses += 1;
        self.stats.promoted += step.promoted.len();
        self.stats.absorbed += step.absorbed.len();
        Ok(Some(step))
    }

    /// Collapses until no free face is left.
    pub fn run(&mut self) -> Result<CollapseStats, CollapseError> {
        while self.step()?.is_some() {}
        Ok(self.stats)
    }

    #[inline]
    pub fn stats(&self) -> CollapseStats {
        self.stats
    }

    #[inline]
    pub fn options(&self) -> CollapseOptions {
        self.options
    }

    /// The index in its current state.
    #[inline]
    pub fn index(&self) -> &IncidenceIndex {
        &self.index
    }

    /// Materializes the current maximal cells as a complex.
    pub fn finish(self) -> Result<CubicalComplex, CollapseError> {
        crate::debug_invariants!(self.index.validate_invariants(), "CollapseEngine::finish");
        log::debug!(
            "collapse engine done: {} collapses, {} promoted, {} absorbed, {} maximal cells left",
            self.stats.collapses,
            self.stats.promoted,
            self.stats.absorbed,
            self.index.maximal_count()
        );
        self.index.into_complex(self.options.verify_maximality)
    }
}

/// Collapses `complex` until it has no free face.
pub fn collapse_to_fixed_point(
    complex: &CubicalComplex,
    options: CollapseOptions,
) -> Result<CubicalComplex, CollapseError> {
    let mut engine = CollapseEngine::new(complex, options)?;
    engine.run()?;
    engine.finish()
}

/// [`collapse_to_fixed_point`] with default options.
pub fn collapse_all(complex: &CubicalComplex) -> Result<CubicalComplex, CollapseError> {
    collapse_to_fixed_point(complex, CollapseOptions::default())
}
