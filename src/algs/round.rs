//! Bulk collapse: one sort-based round over all currently free faces.
//!
//! A round does not look for faces exposed by its own collapses, so its
//! output may still have free faces. Iterate it, or use
//! [`collapse_to_fixed_point`](crate::algs::collapse::collapse_to_fixed_point),
//! to reach a fixed point.

use crate::collapse_error::CollapseError;
use crate::cubical::complex::CubicalComplex;
use crate::cubical::cube::Cube;
use std::collections::BTreeMap;

/// Every free face of `complex` with its unique maximal cofacet, sorted by face.
///
/// A primary face is free when exactly one maximal cell has it as a primary
/// face and no maximal cell of dimension ≥ dim(face) + 2 contains it. The
/// second test holds iff no proper coface of the face is itself a primary
/// face of a maximal cell, which is a lookup in the sorted face list.
pub fn free_faces(complex: &CubicalComplex) -> Vec<(Cube, Cube)> {
    let mut pairs: Vec<(Cube, &Cube)> = complex
        .maximal_cells()
        .iter()
        .flat_map(|cell| cell.primary_faces().into_iter().map(move |face| (face, cell)))
        .collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    let is_key = |c: &Cube| pairs.binary_search_by(|(face, _)| face.cmp(c)).is_ok();

    pairs
        .chunk_by(|a, b| a.0 == b.0)
        .filter_map(|run| match run {
            [(face, cell)] => Some((face, *cell)),
            _ => None,
        })
        .filter(|(face, _)| !face.proper_cofaces().iter().any(|c| is_key(c)))
        .map(|(face, cell)| (face.clone(), cell.clone()))
        .collect()
}

/// Collapses at most one free face per maximal cell, all at once, and
/// re-normalizes.
///
/// Free faces are taken in sorted order; a cell whose free face was used is
/// replaced by its remaining primary faces.
pub fn collapse_one_round(complex: &CubicalComplex) -> Result<CubicalComplex, CollapseError> {
    let free = free_faces(complex);
    let mut chosen: BTreeMap<&Cube, &Cube> = BTreeMap::new();
    for (face, cell) in &free {
        chosen.entry(cell).or_insert(face);
    }

    let mut cells = Vec::with_capacity(complex.len() + chosen.len() * 4);
    for cell in complex.maximal_cells() {
        match chosen.get(cell) {
            None => cells.push(cell.clone()),
            Some(&face) => cells.extend(cell.primary_faces().into_iter().filter(|g| g != face)),
        }
    }
    log::debug!(
        "collapse round: {} free faces, {} collapses",
        free.len(),
        chosen.len()
    );
    CubicalComplex::new(cells)
}
