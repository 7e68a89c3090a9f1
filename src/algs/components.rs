//! Collapse of independent connected components.
//!
//! Components share no cell, so each gets its own incidence index. With the
//! `rayon` feature the components are collapsed on the rayon pool; the index
//! of a single component is never shared between threads.

use crate::algs::collapse::{CollapseOptions, collapse_to_fixed_point};
use crate::collapse_error::CollapseError;
use crate::cubical::complex::CubicalComplex;
use crate::cubical::cube::Cube;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Collapses every connected component of `complex` to its fixed point and
/// reassembles the result.
pub fn collapse_components(
    complex: &CubicalComplex,
    options: CollapseOptions,
) -> Result<CubicalComplex, CollapseError> {
    let parts = complex.connected_components();
    log::debug!("collapsing {} connected components", parts.len());

    #[cfg(feature = "rayon")]
    let reduced: Result<Vec<CubicalComplex>, CollapseError> = parts
        .par_iter()
        .map(|part| collapse_to_fixed_point(part, options))
        .collect();
    #[cfg(not(feature = "rayon"))]
    let reduced: Result<Vec<CubicalComplex>, CollapseError> = parts
        .iter()
        .map(|part| collapse_to_fixed_point(part, options))
        .collect();

    let cells = reduced?.into_iter().flat_map(Vec::<Cube>::from);
    CubicalComplex::from_maximal_cells(cells, options.verify_maximality)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_component_reduces_to_a_vertex() {
        let cx = CubicalComplex::new([
            Cube::from_pairs(&[(0, 1), (0, 1)]).unwrap(),
            Cube::from_pairs(&[(5, 6), (5, 6)]).unwrap(),
            Cube::from_pairs(&[(9, 10), (0, 0)]).unwrap(),
        ])
        .unwrap();
        let out = collapse_components(&cx, CollapseOptions::default()).unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.maximal_cells().iter().all(|c| c.dimension() == 0));
    }

    #[test]
    fn empty_input() {
        let out = collapse_components(&CubicalComplex::empty(), CollapseOptions::unchecked()).unwrap();
        assert!(out.is_empty());
    }
}
