//! Interning arena for cubes.
//!
//! The arena owns every cube the incidence index has ever seen and hands out
//! stable [`CellId`]s. Cells are never evicted: a cell removed from the index
//! keeps its slot, so an id stays valid for the arena's whole lifetime.

use crate::collapse_error::CollapseError;
use crate::cubical::cube::Cube;
use crate::incidence::cell_id::CellId;
use crate::incidence::perf::FastMap;

/// Append-only store of cubes addressed by [`CellId`].
#[derive(Clone, Debug, Default)]
pub struct CellArena {
    cells: Vec<Cube>,
    dims: Vec<usize>,
    ids: FastMap<Cube, CellId>,
}

impl CellArena {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `cube`, interning it first if it is new.
    ///
    /// # Errors
    /// [`CollapseError::ArenaExhausted`] once `u32::MAX - 1` cells are stored.
    pub fn intern(&mut self, cube: Cube) -> Result<CellId, CollapseError> {
        if let Some(&id) = self.ids.get(&cube) {
            return Ok(id);
        }
        let id = CellId::from_slot(self.cells.len())?;
        self.dims.push(cube.dimension());
        self.ids.insert(cube.clone(), id);
        self.cells.push(cube);
        Ok(id)
    }

    /// Id of `cube` if it has been interned.
    #[inline]
    pub fn id_of(&self, cube: &Cube) -> Option<CellId> {
        self.ids.get(cube).copied()
    }

    /// The cube behind `id`.
    ///
    /// # Panics
    /// If `id` was not issued by this arena.
    #[inline]
    pub fn cube(&self, id: CellId) -> &Cube {
        &self.cells[id.slot()]
    }

    /// The cube behind `id`, `None` if `id` is foreign to this arena.
    #[inline]
    pub fn get(&self, id: CellId) -> Option<&Cube> {
        self.cells.get(id.slot())
    }

    /// Cached dimension of the cube behind `id`.
    #[inline]
    pub fn dimension(&self, id: CellId) -> usize {
        self.dims[id.slot()]
    }

    /// Number of interned cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        let mut arena = CellArena::new();
        let a = arena.intern(Cube::point(&[0, 0])).unwrap();
        let b = arena.intern(Cube::from_pairs(&[(0, 1), (0, 0)]).unwrap()).unwrap();
        let a2 = arena.intern(Cube::point(&[0, 0])).unwrap();
        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn lookups() {
        let mut arena = CellArena::new();
        let edge = Cube::from_pairs(&[(0, 1), (0, 0)]).unwrap();
        let id = arena.intern(edge.clone()).unwrap();
        assert_eq!(arena.cube(id), &edge);
        assert_eq!(arena.dimension(id), 1);
        assert_eq!(arena.id_of(&edge), Some(id));
        assert_eq!(arena.id_of(&Cube::point(&[9, 9])), None);
    }
}
