//! A single elementary collapse applied to a complex value.

use crate::collapse_error::CollapseError;
use crate::cubical::complex::CubicalComplex;
use crate::cubical::cube::Cube;

/// Removes `free_face` and `maximal_face` from `complex`.
///
/// # Errors
/// * [`CollapseError::NotMaximal`] if `maximal_face` is not a maximal cell.
/// * [`CollapseError::NotPrimaryFace`] if `free_face` is not one of its
///   primary faces.
/// * [`CollapseError::NotFree`] if another maximal cell has `free_face` as a
///   primary face.
/// * [`CollapseError::CoveredFace`] if a maximal cell of dimension
///   ≥ dim(free_face) + 2 contains it.
pub fn elementary_collapse(
    complex: &CubicalComplex,
    free_face: &Cube,
    maximal_face: &Cube,
) -> Result<CubicalComplex, CollapseError> {
    let maximal = complex.maximal_cells();
    if maximal.binary_search(maximal_face).is_err() {
        return Err(CollapseError::NotMaximal(maximal_face.clone()));
    }
    if !free_face.is_primary_face(maximal_face) {
        return Err(CollapseError::NotPrimaryFace {
            face: free_face.clone(),
            cell: maximal_face.clone(),
        });
    }
    let cofacets = maximal
        .iter()
        .filter(|m| free_face.is_primary_face(m))
        .count();
    if cofacets > 1 {
        return Err(CollapseError::NotFree {
            face: free_face.clone(),
            cofacets,
        });
    }
    let dim = free_face.dimension();
    if let Some(cover) = maximal
        .iter()
        .find(|m| m.dimension() >= dim + 2 && free_face.is_face(m))
    {
        return Err(CollapseError::CoveredFace {
            face: free_face.clone(),
            cover: cover.clone(),
        });
    }

    let cells = maximal
        .iter()
        .filter(|m| *m != maximal_face)
        .cloned()
        .chain(
            maximal_face
                .primary_faces()
                .into_iter()
                .filter(|g| g != free_face),
        );
    log::trace!("elementary collapse of {maximal_face} through {free_face}");
    CubicalComplex::new(cells)
}
