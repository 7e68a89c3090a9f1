//! `Cube`: an elementary cube, the cell type of a cubical complex.
//!
//! A cube is a product of elementary intervals, one per coordinate of the
//! ambient space. Its dimension is the number of non-degenerate intervals.
//! This module provides the face relation and face enumeration the incidence
//! index is built on.

use crate::collapse_error::CollapseError;
use crate::cubical::interval::Interval;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;

/// Elementary cube: an ordered sequence of [`Interval`]s of fixed length
/// (the embedding dimension).
///
/// Equality, hashing and ordering are positional over the intervals, so two
/// cubes of different embedding dimension are never equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cube {
    intervals: Vec<Interval>,
}

impl Cube {
    /// Builds a cube from its intervals.
    pub fn new(intervals: impl IntoIterator<Item = Interval>) -> Self {
        Cube {
            intervals: intervals.into_iter().collect(),
        }
    }

    /// Builds a cube from `(lo, hi)` pairs.
    ///
    /// # Example
    /// ```rust
    /// use cube_collapse::cubical::cube::Cube;
    /// let square = Cube::from_pairs(&[(0, 1), (0, 1)]).unwrap();
    /// assert_eq!(square.dimension(), 2);
    /// assert_eq!(square.primary_faces().len(), 4);
    /// ```
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Result<Self, CollapseError> {
        pairs
            .iter()
            .map(|&(lo, hi)| Interval::new(lo, hi))
            .collect::<Result<Vec<_>, _>>()
            .map(|intervals| Cube { intervals })
    }

    /// The 0-dimensional cube at `coords`.
    pub fn point(coords: &[i64]) -> Self {
        Cube::new(coords.iter().copied().map(Interval::degenerate))
    }

    /// The cube of embedding dimension 0. It is a single point with no faces.
    pub fn empty() -> Self {
        Cube {
            intervals: Vec::new(),
        }
    }

    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of coordinates (length of the interval sequence).
    #[inline]
    pub fn embedding_dim(&self) -> usize {
        self.intervals.len()
    }

    /// Number of non-degenerate intervals.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.intervals.iter().filter(|iv| !iv.is_degenerate()).count()
    }

    /// Positions of the non-degenerate intervals, ascending.
    pub fn nondegenerate_axes(&self) -> impl Iterator<Item = usize> + '_ {
        self.intervals
            .iter()
            .enumerate()
            .filter(|(_, iv)| !iv.is_degenerate())
            .map(|(i, _)| i)
    }

    /// `true` iff `self` is a face of `other`: same embedding dimension and
    /// every interval of `self` is a sub-interval of the matching one of `other`.
    /// Every cube is a face of itself.
    pub fn is_face(&self, other: &Cube) -> bool {
        self.intervals.len() == other.intervals.len()
            && self
                .intervals
                .iter()
                .zip(&other.intervals)
                .all(|(mine, theirs)| theirs.contains(*mine))
    }

    /// `true` iff `self` is a face of `other` and differs from it.
    ///
    /// ```rust
    /// use cube_collapse::cubical::cube::Cube;
    /// let q = Cube::from_pairs(&[(1, 2), (1, 1)]).unwrap();
    /// let p = Cube::from_pairs(&[(1, 2), (1, 2)]).unwrap();
    /// assert!(q.is_proper_face(&p));
    /// assert!(!q.is_proper_face(&q));
    /// ```
    pub fn is_proper_face(&self, other: &Cube) -> bool {
        self != other && self.is_face(other)
    }

    /// `true` iff `self` is a codimension-1 face of `other`.
    pub fn is_primary_face(&self, other: &Cube) -> bool {
        self.dimension() + 1 == other.dimension() && self.is_face(other)
    }

    /// `true` iff the two cubes share at least one point.
    pub fn intersects(&self, other: &Cube) -> bool {
        self.intervals.len() == other.intervals.len()
            && self
                .intervals
                .iter()
                .zip(&other.intervals)
                .all(|(a, b)| a.intersects(*b))
    }

    /// The `2d` primary faces of a `d`-dimensional cube.
    ///
    /// Order: for each non-degenerate position ascending, the face pinned to
    /// `lo` followed by the face pinned to `hi`. A 0-dimensional cube has none.
    pub fn primary_faces(&self) -> Vec<Cube> {
        let mut faces = Vec::with_capacity(2 * self.dimension());
        for axis in self.nondegenerate_axes() {
            for end in self.intervals[axis].endpoints() {
                let mut intervals = self.intervals.clone();
                intervals[axis] = end;
                faces.push(Cube { intervals });
            }
        }
        faces
    }

    /// Every elementary cube having `self` as a proper face.
    ///
    /// Each degenerate axis `[x,x]` is kept or widened to `[x-1,x]` or
    /// `[x,x+1]`, so a `d`-cube in `k` dimensions has `3^(k-d) - 1` cofaces.
    /// Widenings that would overflow `i64` are skipped.
    pub fn proper_cofaces(&self) -> Vec<Cube> {
        let mut out = vec![self.clone()];
        for (axis, iv) in self.intervals.iter().enumerate() {
            if !iv.is_degenerate() {
                continue;
            }
            let x = iv.lo();
            let wider: Vec<Interval> = [x.checked_sub(1), Some(x)]
                .into_iter()
                .flatten()
                .filter_map(|lo| Interval::unit(lo).ok())
                .collect();
            let grown: Vec<Cube> = out
                .iter()
                .flat_map(|cube| {
                    wider.iter().map(move |&w| {
                        let mut intervals = cube.intervals.clone();
                        intervals[axis] = w;
                        Cube { intervals }
                    })
                })
                .collect();
            out.extend(grown);
        }
        out.remove(0);
        out
    }

    /// Every proper face, not only the primary ones.
    ///
    /// Walks the face poset breadth-first with an explicit queue, so the work
    /// is bounded by the `3^d - 1` faces of a `d`-cube rather than by the number
    /// of paths to them.
    pub fn all_faces(&self) -> BTreeSet<Cube> {
        let mut seen = BTreeSet::new();
        let mut queue: VecDeque<Cube> = self.primary_faces().into();
        while let Some(face) = queue.pop_front() {
            if seen.contains(&face) {
                continue;
            }
            queue.extend(
                face.primary_faces()
                    .into_iter()
                    .filter(|f| !seen.contains(f)),
            );
            seen.insert(face);
        }
        seen
    }
}

impl FromIterator<Interval> for Cube {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Cube::new(iter)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intervals.is_empty() {
            return f.write_str("[]");
        }
        for (i, iv) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(" x ")?;
            }
            write!(f, "{iv}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cube({self})")
    }
}
