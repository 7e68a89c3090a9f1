//! `IncidenceIndex`: primary face → maximal cells having it as a primary face.
//!
//! The index is the mutable state of the collapse engine. It is built once
//! from the maximal cells of a complex, edited locally by [`collapse`], and
//! finally turned back into a [`CubicalComplex`] by [`into_complex`].
//!
//! Besides the cofacet lists it keeps, for every interned cell, the number of
//! keys that strictly contain it. A face lies inside a maximal cell of
//! dimension ≥ d+2 exactly when some key strictly contains it, so the counter
//! answers coverage without looking at unrelated cells. Keys are created and
//! deleted only next to the cell being registered or collapsed, and each such
//! event updates the `3^d - 1` proper faces of that key.
//!
//! Free faces (one cofacet, counter at zero) are kept in per-dimension
//! ordered sets, walked from the highest dimension down on selection.
//!
//! [`collapse`]: IncidenceIndex::collapse
//! [`into_complex`]: IncidenceIndex::into_complex

use crate::collapse_error::CollapseError;
use crate::cubical::complex::CubicalComplex;
use crate::cubical::cube::Cube;
use crate::debug_invariants::DebugInvariants;
use crate::incidence::_debug_invariants::{
    assert_detached, assert_unique_cofacets, inv_assert, inv_assert_eq,
};
use crate::incidence::arena::CellArena;
use crate::incidence::cell_id::CellId;
use crate::incidence::perf::FastMap;
use std::collections::BTreeSet;

/// Key of a cofacet list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaceKey {
    /// Maximal cells with no primary faces (points, the empty cube).
    NoBoundary,
    /// A primary face of at least one maximal cell.
    Face(CellId),
}

/// Record of one elementary collapse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollapseStep {
    /// The free face that was removed.
    pub face: CellId,
    /// Its unique cofacet, removed with it.
    pub cell: CellId,
    /// Faces of `cell` that became maximal.
    pub promoted: Vec<CellId>,
    /// Faces of `cell` whose list emptied but which stay inside a higher cell.
    pub absorbed: Vec<CellId>,
}

/// Incidence bookkeeping for a cubical complex under collapse.
#[derive(Clone, Debug, Default)]
pub struct IncidenceIndex {
    arena: CellArena,
    cofacets: FastMap<FaceKey, Vec<CellId>>,
    /// Per arena slot: number of keys having the cell as a proper face.
    covers: Vec<u32>,
    /// Current maximal cells, bucketed by dimension.
    maximal: Vec<BTreeSet<CellId>>,
    /// Free faces, bucketed by dimension.
    free: Vec<BTreeSet<CellId>>,
}

fn bucket_mut(buckets: &mut Vec<BTreeSet<CellId>>, dim: usize) -> &mut BTreeSet<CellId> {
    if buckets.len() <= dim {
        buckets.resize_with(dim + 1, BTreeSet::new);
    }
    &mut buckets[dim]
}

impl IncidenceIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes `cells`, which must be pairwise incomparable under the face
    /// relation.
    pub fn from_maximal_cells(
        cells: impl IntoIterator<Item = Cube>,
    ) -> Result<Self, CollapseError> {
        let mut index = Self::new();
        for cell in cells {
            index.add_maximal(cell)?;
        }
        log::debug!(
            "incidence index built: {} maximal cells, {} keys, {} free faces",
            index.maximal_count(),
            index.key_count(),
            index.free_count()
        );
        Ok(index)
    }

    /// Indexes the maximal cells of `complex`.
    pub fn from_complex(complex: &CubicalComplex) -> Result<Self, CollapseError> {
        Self::from_maximal_cells(complex.maximal_cells().iter().cloned())
    }

    /// Registers one newly maximal cell. The work is bounded by the faces and
    /// cofaces of `cell`, not by the size of the index.
    ///
    /// # Errors
    /// * [`CollapseError::DuplicateMaximal`] if `cell` is already maximal.
    /// * [`CollapseError::MaximalCellIsFace`] if `cell` lies inside a maximal
    ///   cell, or a maximal cell lies inside it.
    pub fn add_maximal(&mut self, cell: Cube) -> Result<CellId, CollapseError> {
        let id = self.intern(cell)?;
        self.register(id)?;
        Ok(id)
    }

    /// Interns `cube`, counting the keys above it when it is new.
    fn intern(&mut self, cube: Cube) -> Result<CellId, CollapseError> {
        let id = self.arena.intern(cube)?;
        if id.slot() == self.covers.len() {
            let above = self
                .arena
                .cube(id)
                .proper_cofaces()
                .iter()
                .filter_map(|c| self.arena.id_of(c))
                .filter(|&c| self.cofacets.contains_key(&FaceKey::Face(c)))
                .count();
            self.covers.push(u32::try_from(above).map_err(|_| {
                CollapseError::InvariantViolation(format!("{above} keys above one cell"))
            })?);
        }
        Ok(id)
    }

    fn register(&mut self, id: CellId) -> Result<(), CollapseError> {
        if self.is_maximal(id) {
            return Err(CollapseError::DuplicateMaximal(self.arena.cube(id).clone()));
        }
        let container = match self.cofacets_of(FaceKey::Face(id)).first() {
            Some(&other) => Some(other),
            None if self.is_covered(id) => self.covering_cell(id),
            None => None,
        };
        if let Some(other) = container {
            return Err(CollapseError::MaximalCellIsFace {
                cell: self.arena.cube(id).clone(),
                cofacet: self.arena.cube(other).clone(),
            });
        }
        let inner = self
            .arena
            .cube(id)
            .all_faces()
            .into_iter()
            .find(|g| self.arena.id_of(g).is_some_and(|gid| self.is_maximal(gid)));
        if let Some(inner) = inner {
            return Err(CollapseError::MaximalCellIsFace {
                cell: inner,
                cofacet: self.arena.cube(id).clone(),
            });
        }

        let faces = self.arena.cube(id).primary_faces();
        if faces.is_empty() {
            self.cofacets.entry(FaceKey::NoBoundary).or_default().push(id);
        } else {
            for face in faces {
                let fid = self.intern(face)?;
                self.attach(fid, id);
            }
        }
        bucket_mut(&mut self.maximal, self.arena.dimension(id)).insert(id);
        Ok(())
    }

    fn attach(&mut self, face: CellId, cell: CellId) {
        let list = self.cofacets.entry(FaceKey::Face(face)).or_default();
        list.push(cell);
        assert_unique_cofacets(face, list);
        let n = list.len();
        if n == 1 {
            self.shift_covers(face, true);
        }
        self.refresh(face);
    }

    /// Removes `cell` from the list of `face`; returns the remaining length.
    /// An emptied key is deleted.
    fn detach(&mut self, face: CellId, cell: CellId) -> usize {
        let key = FaceKey::Face(face);
        let Some(list) = self.cofacets.get_mut(&key) else {
            return 0;
        };
        if let Some(pos) = list.iter().position(|&c| c == cell) {
            list.remove(pos);
        }
        let n = list.len();
        if n == 0 {
            self.cofacets.remove(&key);
            self.shift_covers(face, false);
        }
        self.refresh(face);
        n
    }

    /// A key appeared (`up`) or vanished: adjust the counters of its
    /// interned proper faces.
    fn shift_covers(&mut self, key: CellId, up: bool) {
        for g in self.arena.cube(key).all_faces() {
            let Some(gid) = self.arena.id_of(&g) else {
                continue;
            };
            let n = &mut self.covers[gid.slot()];
            if up {
                *n += 1;
            } else {
                inv_assert!(*n > 0, "coverage counter underflow at {g}");
                *n = n.saturating_sub(1);
            }
            self.refresh(gid);
        }
    }

    /// Puts `face` in or out of its free bucket after a change.
    fn refresh(&mut self, face: CellId) {
        let free = self.cofacets_of(FaceKey::Face(face)).len() == 1 && !self.is_covered(face);
        let bucket = bucket_mut(&mut self.free, self.arena.dimension(face));
        if free {
            bucket.insert(face);
        } else {
            bucket.remove(&face);
        }
    }

    /// `true` iff a maximal cell of dimension ≥ dim(face) + 2 contains `face`.
    #[inline]
    pub fn is_covered(&self, face: CellId) -> bool {
        self.covers.get(face.slot()).is_some_and(|&n| n > 0)
    }

    /// A maximal cell of dimension ≥ dim(face) + 2 containing `face`, if any.
    ///
    /// Looks only at the cofaces of `face`.
    pub fn covering_cell(&self, face: CellId) -> Option<CellId> {
        self.arena
            .get(face)?
            .proper_cofaces()
            .iter()
            .filter_map(|c| self.arena.id_of(c))
            .find_map(|c| self.cofacets_of(FaceKey::Face(c)).first().copied())
    }

    /// `true` iff `id` is currently a maximal cell.
    pub fn is_maximal(&self, id: CellId) -> bool {
        self.arena.get(id).is_some()
            && self
                .maximal
                .get(self.arena.dimension(id))
                .is_some_and(|bucket| bucket.contains(&id))
    }

    /// `true` iff `face` has exactly one cofacet and no higher maximal cell
    /// contains it.
    pub fn is_free(&self, face: CellId) -> bool {
        self.arena.get(face).is_some()
            && self
                .free
                .get(self.arena.dimension(face))
                .is_some_and(|bucket| bucket.contains(&face))
    }

    /// A free face of maximum dimension; among those, the most recently
    /// registered one.
    pub fn select_free_face(&self) -> Option<CellId> {
        self.free
            .iter()
            .rev()
            .find_map(|bucket| bucket.last().copied())
    }

    /// Every free face, highest dimension first, in selection order.
    pub fn free_faces(&self) -> Vec<CellId> {
        self.free
            .iter()
            .rev()
            .flat_map(|bucket| bucket.iter().rev().copied())
            .collect()
    }

    /// Removes `free_face` together with its unique cofacet and promotes the
    /// faces of that cofacet which are left without one.
    ///
    /// # Errors
    /// * [`CollapseError::UnknownFace`] if `free_face` is not a key.
    /// * [`CollapseError::NotFree`] if its list has more than one entry.
    /// * [`CollapseError::NotPrimaryFace`] if the entry does not have it as a
    ///   primary face.
    /// * [`CollapseError::CoveredFace`] if a higher maximal cell contains it.
    pub fn collapse(&mut self, free_face: CellId) -> Result<CollapseStep, CollapseError> {
        let Some(face_cube) = self.arena.get(free_face) else {
            return Err(CollapseError::InvariantViolation(format!(
                "{free_face:?} was not issued by this index"
            )));
        };
        let cell = match self.cofacets_of(FaceKey::Face(free_face)) {
            [] => return Err(CollapseError::UnknownFace(face_cube.clone())),
            [c] => *c,
            many => {
                return Err(CollapseError::NotFree {
                    face: face_cube.clone(),
                    cofacets: many.len(),
                });
            }
        };
        if !face_cube.is_primary_face(self.arena.cube(cell)) {
            return Err(CollapseError::NotPrimaryFace {
                face: face_cube.clone(),
                cell: self.arena.cube(cell).clone(),
            });
        }
        if self.is_covered(free_face) {
            let Some(cover) = self.covering_cell(free_face) else {
                return Err(CollapseError::InvariantViolation(format!(
                    "{face_cube} is counted as covered but no key contains it"
                )));
            };
            return Err(CollapseError::CoveredFace {
                face: face_cube.clone(),
                cover: self.arena.cube(cover).clone(),
            });
        }

        self.detach(free_face, cell);
        if let Some(bucket) = self.maximal.get_mut(self.arena.dimension(cell)) {
            bucket.remove(&cell);
        }

        let mut step = CollapseStep {
            face: free_face,
            cell,
            promoted: Vec::new(),
            absorbed: Vec::new(),
        };
        let faces = self.arena.cube(cell).primary_faces();
        let mut touched = Vec::with_capacity(faces.len());
        for g in faces {
            let Some(gid) = self.arena.id_of(&g) else {
                return Err(CollapseError::InvariantViolation(format!(
                    "primary face {g} of an indexed cell was never interned"
                )));
            };
            if gid == free_face {
                continue;
            }
            touched.push(gid);
            if self.detach(gid, cell) > 0 {
                continue;
            }
            // Siblings share the dimension of `g`, so their pending
            // detaches cannot change its counter.
            if self.is_covered(gid) {
                log::trace!("{g} absorbed");
                step.absorbed.push(gid);
            } else {
                self.register(gid)?;
                log::trace!("{g} promoted to maximal");
                step.promoted.push(gid);
            }
        }

        inv_assert!(
            !self.cofacets.contains_key(&FaceKey::Face(free_face)),
            "free face {} still indexed after collapse",
            self.arena.cube(free_face)
        );
        inv_assert!(!self.is_maximal(cell), "collapsed cell still maximal");
        assert_detached(
            cell,
            touched
                .iter()
                .map(|&g| (g, self.cofacets_of(FaceKey::Face(g)))),
        );
        log::trace!(
            "collapsed {} through {} ({} promoted, {} absorbed)",
            self.arena.cube(cell),
            self.arena.cube(free_face),
            step.promoted.len(),
            step.absorbed.len()
        );
        Ok(step)
    }

    /// Looks up `face` by value and collapses it.
    pub fn collapse_face(&mut self, face: &Cube) -> Result<CollapseStep, CollapseError> {
        match self.arena.id_of(face) {
            Some(id) => self.collapse(id),
            None => Err(CollapseError::UnknownFace(face.clone())),
        }
    }

    /// The cofacet list under `key`; empty if `key` is absent.
    #[inline]
    pub fn cofacets_of(&self, key: FaceKey) -> &[CellId] {
        self.cofacets.get(&key).map_or(&[], Vec::as_slice)
    }

    /// The cube behind `id`.
    ///
    /// # Panics
    /// If `id` was not issued by this index.
    #[inline]
    pub fn cube(&self, id: CellId) -> &Cube {
        self.arena.cube(id)
    }

    #[inline]
    pub fn id_of(&self, cube: &Cube) -> Option<CellId> {
        self.arena.id_of(cube)
    }

    /// Current maximal cells, by dimension then registration order.
    pub fn maximal_cells(&self) -> impl Iterator<Item = &Cube> + '_ {
        self.maximal
            .iter()
            .flat_map(|bucket| bucket.iter().map(|&id| self.arena.cube(id)))
    }

    pub fn maximal_count(&self) -> usize {
        self.maximal.iter().map(BTreeSet::len).sum()
    }

    /// Number of keys, `NoBoundary` included.
    pub fn key_count(&self) -> usize {
        self.cofacets.len()
    }

    /// Number of free faces.
    pub fn free_count(&self) -> usize {
        self.free.iter().map(BTreeSet::len).sum()
    }

    /// Collects the union of the surviving cofacet lists into a complex.
    pub fn into_complex(self, verify_maximality: bool) -> Result<CubicalComplex, CollapseError> {
        let ids: BTreeSet<CellId> = self.cofacets.values().flatten().copied().collect();
        inv_assert_eq!(
            ids.len(),
            self.maximal_count(),
            "cofacet lists and maximal buckets disagree"
        );
        let cells = ids.into_iter().map(|id| self.arena.cube(id).clone());
        CubicalComplex::from_maximal_cells(cells, verify_maximality)
    }
}

impl DebugInvariants for IncidenceIndex {
    const LABEL: &'static str = "IncidenceIndex";

    fn validate_invariants(&self) -> Result<(), CollapseError> {
        let fail = |msg: String| Err(CollapseError::InvariantViolation(msg));
        let mut listed: BTreeSet<CellId> = BTreeSet::new();

        if self.covers.len() != self.arena.len() {
            return fail(format!(
                "{} coverage counters for {} interned cells",
                self.covers.len(),
                self.arena.len()
            ));
        }
        for (slot, &n) in self.covers.iter().enumerate() {
            let id = CellId::from_slot(slot)?;
            let above = self
                .cube(id)
                .proper_cofaces()
                .iter()
                .filter_map(|c| self.id_of(c))
                .filter(|&c| self.cofacets.contains_key(&FaceKey::Face(c)))
                .count();
            if above != n as usize {
                return fail(format!(
                    "{} counts {n} keys above it, found {above}",
                    self.cube(id)
                ));
            }
        }

        for (key, list) in self.cofacets.iter() {
            if list.is_empty() {
                return fail(format!("{key:?} has an empty cofacet list"));
            }
            let mut seen = BTreeSet::new();
            for &c in list {
                if !seen.insert(c) {
                    return fail(format!("{} listed twice under {key:?}", self.cube(c)));
                }
                if !self.is_maximal(c) {
                    return fail(format!("{} listed under {key:?} is not maximal", self.cube(c)));
                }
                listed.insert(c);
            }
            match *key {
                FaceKey::NoBoundary => {
                    if let Some(&c) = list.iter().find(|&&c| self.arena.dimension(c) != 0) {
                        return fail(format!("{} has primary faces but sits under NoBoundary", self.cube(c)));
                    }
                }
                FaceKey::Face(f) => {
                    if self.is_maximal(f) {
                        return fail(format!("key {} is itself maximal", self.cube(f)));
                    }
                    if let Some(&c) = list.iter().find(|&&c| !self.cube(f).is_primary_face(self.cube(c))) {
                        return fail(format!("{} is not a primary face of {}", self.cube(f), self.cube(c)));
                    }
                    let expected = list.len() == 1 && !self.is_covered(f);
                    if self.is_free(f) != expected {
                        return fail(format!(
                            "free set out of sync for {} ({} cofacets, covered: {})",
                            self.cube(f),
                            list.len(),
                            self.is_covered(f)
                        ));
                    }
                }
            }
        }

        for &m in self.maximal.iter().flatten() {
            if !listed.contains(&m) {
                return fail(format!("maximal cell {} appears in no list", self.cube(m)));
            }
            if self.is_covered(m) {
                return fail(format!("maximal cell {} lies inside a higher cell", self.cube(m)));
            }
            for face in self.cube(m).primary_faces() {
                let registered = self
                    .id_of(&face)
                    .is_some_and(|f| self.cofacets_of(FaceKey::Face(f)).contains(&m));
                if !registered {
                    return fail(format!("{} is missing from the list of {face}", self.cube(m)));
                }
            }
        }

        if let Some(&f) = self
            .free
            .iter()
            .flatten()
            .find(|&&f| self.cofacets_of(FaceKey::Face(f)).len() != 1)
        {
            return fail(format!("stale free-set entry {}", self.cube(f)));
        }
        Ok(())
    }
}
