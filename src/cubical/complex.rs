//! `CubicalComplex`: a finite cubical complex stored by its maximal cells.
//!
//! The complex is the closure under faces of its maximal cells; only the
//! maximal cells are stored. The full closure, grouped by dimension, is
//! computed on first request and cached.
//!
//! # Errors
//! * [`CollapseError::EmbeddingMismatch`]: cells of one complex must share the
//!   same embedding dimension.
//! * [`CollapseError::MaximalityViolated`]: a list passed to
//!   [`CubicalComplex::from_maximal_cells`] with verification on contains a
//!   cell that is a proper face of another.

use crate::collapse_error::CollapseError;
use crate::cubical::cube::Cube;
use itertools::Itertools;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Finite cubical complex represented by its sorted, duplicate-free maximal cells.
///
/// Equality compares maximal-cell sets. Serializes as the list of maximal cells
/// and re-normalizes on deserialization.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cube>", into = "Vec<Cube>")]
pub struct CubicalComplex {
    maximal: Vec<Cube>,
    closure: OnceCell<Vec<Vec<Cube>>>,
}

impl CubicalComplex {
    /// The complex with no cells.
    pub fn empty() -> Self {
        CubicalComplex {
            maximal: Vec::new(),
            closure: OnceCell::new(),
        }
    }

    /// Normalizes `cells` to the maximal cells of the complex they generate:
    /// duplicates are merged and every cell that is a proper face of another
    /// is dropped.
    ///
    /// # Example
    /// ```rust
    /// use cube_collapse::cubical::{cube::Cube, complex::CubicalComplex};
    /// let square = Cube::from_pairs(&[(0, 1), (0, 1)]).unwrap();
    /// let edge = Cube::from_pairs(&[(0, 1), (0, 0)]).unwrap();
    /// let cx = CubicalComplex::new([square.clone(), edge]).unwrap();
    /// assert_eq!(cx.maximal_cells(), &[square]);
    /// ```
    pub fn new(cells: impl IntoIterator<Item = Cube>) -> Result<Self, CollapseError> {
        let cells = check_embedding(cells)?;
        // Highest dimension first: a cell can only be a proper face of a cell
        // of strictly larger dimension, which has already been kept or dropped.
        let by_dim = cells
            .into_iter()
            .sorted_unstable_by(|a, b| b.dimension().cmp(&a.dimension()).then_with(|| a.cmp(b)))
            .dedup();
        let mut kept: Vec<Cube> = Vec::new();
        for cell in by_dim {
            if !kept.iter().any(|k| cell.is_proper_face(k)) {
                kept.push(cell);
            }
        }
        kept.sort_unstable();
        Ok(Self::from_sorted(kept))
    }

    /// Builds a complex from cells claimed to be maximal already.
    ///
    /// With `verify` the claim is checked and a violation is reported as
    /// [`CollapseError::MaximalityViolated`]; without it the cells are trusted
    /// (duplicates are still merged).
    pub fn from_maximal_cells(
        cells: impl IntoIterator<Item = Cube>,
        verify: bool,
    ) -> Result<Self, CollapseError> {
        let mut cells = check_embedding(cells)?;
        cells.sort_unstable();
        cells.dedup();
        if verify {
            verify_maximality(&cells)?;
        }
        Ok(Self::from_sorted(cells))
    }

    pub(crate) fn from_sorted(maximal: Vec<Cube>) -> Self {
        CubicalComplex {
            maximal,
            closure: OnceCell::new(),
        }
    }

    /// The maximal cells, sorted.
    #[inline]
    pub fn maximal_cells(&self) -> &[Cube] {
        &self.maximal
    }

    /// Number of maximal cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.maximal.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.maximal.is_empty()
    }

    /// Common embedding dimension, `None` for the empty complex.
    pub fn embedding_dim(&self) -> Option<usize> {
        self.maximal.first().map(Cube::embedding_dim)
    }

    /// Largest cell dimension, `None` for the empty complex.
    pub fn dimension(&self) -> Option<usize> {
        self.maximal.iter().map(Cube::dimension).max()
    }

    /// `true` iff `cube` is a cell of the complex (a face of some maximal cell).
    pub fn contains(&self, cube: &Cube) -> bool {
        self.maximal.iter().any(|m| cube.is_face(m))
    }

    /// Every cell of the complex, grouped by dimension; each group is sorted.
    ///
    /// Computed on first call and cached. A `d`-cube contributes `3^d` cells,
    /// so this is meant for moderate dimensions.
    pub fn cells_by_dimension(&self) -> &[Vec<Cube>] {
        self.closure.get_or_init(|| {
            let mut all: BTreeSet<Cube> = BTreeSet::new();
            for cell in &self.maximal {
                all.extend(cell.all_faces());
                all.insert(cell.clone());
            }
            let top = all.iter().map(Cube::dimension).max().map_or(0, |d| d + 1);
            let mut strata = vec![Vec::new(); top];
            for cell in all {
                strata[cell.dimension()].push(cell);
            }
            strata
        })
    }

    /// Number of cells per dimension.
    pub fn f_vector(&self) -> Vec<usize> {
        self.cells_by_dimension().iter().map(Vec::len).collect()
    }

    /// Total number of cells of the complex.
    pub fn cell_count(&self) -> usize {
        self.f_vector().iter().sum()
    }

    /// Number of vertices: 0-dimensional cells of positive embedding
    /// dimension. The empty cube is a cell but not a vertex.
    pub fn vertex_count(&self) -> usize {
        if self.embedding_dim() == Some(0) {
            return 0;
        }
        self.f_vector().first().copied().unwrap_or(0)
    }

    /// Alternating sum of the f-vector.
    pub fn euler_characteristic(&self) -> i64 {
        self.f_vector()
            .iter()
            .enumerate()
            .map(|(d, &n)| if d % 2 == 0 { n as i64 } else { -(n as i64) })
            .sum()
    }
}

fn check_embedding(cells: impl IntoIterator<Item = Cube>) -> Result<Vec<Cube>, CollapseError> {
    let cells: Vec<Cube> = cells.into_iter().collect();
    if let Some(first) = cells.first() {
        let expected = first.embedding_dim();
        if let Some(bad) = cells.iter().find(|c| c.embedding_dim() != expected) {
            return Err(CollapseError::EmbeddingMismatch {
                expected,
                found: bad.embedding_dim(),
                cell: bad.clone(),
            });
        }
    }
    Ok(cells)
}

fn verify_maximality(cells: &[Cube]) -> Result<(), CollapseError> {
    for face in cells {
        if let Some(cell) = cells.iter().find(|c| face.is_proper_face(c)) {
            return Err(CollapseError::MaximalityViolated {
                face: face.clone(),
                cell: cell.clone(),
            });
        }
    }
    Ok(())
}

impl Default for CubicalComplex {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for CubicalComplex {
    fn eq(&self, other: &Self) -> bool {
        self.maximal == other.maximal
    }
}

impl Eq for CubicalComplex {}

impl TryFrom<Vec<Cube>> for CubicalComplex {
    type Error = CollapseError;

    fn try_from(cells: Vec<Cube>) -> Result<Self, Self::Error> {
        CubicalComplex::new(cells)
    }
}

impl From<CubicalComplex> for Vec<Cube> {
    fn from(cx: CubicalComplex) -> Self {
        cx.maximal
    }
}

impl fmt::Debug for CubicalComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CubicalComplex").field(&self.maximal).finish()
    }
}

impl fmt::Display for CubicalComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.vertex_count();
        let n = self.len();
        write!(
            f,
            "Cubical complex with {v} {} and {n} {}",
            if v == 1 { "vertex" } else { "vertices" },
            if n == 1 { "cube" } else { "cubes" }
        )
    }
}
