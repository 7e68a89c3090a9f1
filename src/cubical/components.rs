//! Connected components of a cubical complex.
//!
//! Two maximal cells are adjacent when they share a point. Components are the
//! classes of the transitive closure of that relation, found with a
//! union-find over the maximal cells. Candidate pairs are pruned with a sweep
//! along the first axis: maximal cells are sorted, so a cell can only meet
//! later cells whose first interval starts no further than its own end.

use crate::cubical::complex::CubicalComplex;
use crate::cubical::cube::Cube;

/// Disjoint-set forest with path halving and union by size.
#[derive(Debug, Clone)]
struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
    }
}

impl CubicalComplex {
    /// Splits the complex into its connected components.
    ///
    /// Components are returned ordered by their smallest maximal cell. The
    /// union of their maximal cells is exactly the maximal-cell set of `self`.
    pub fn connected_components(&self) -> Vec<CubicalComplex> {
        let cells = self.maximal_cells();
        let mut sets = DisjointSets::new(cells.len());
        for (i, a) in cells.iter().enumerate() {
            for (j, b) in cells.iter().enumerate().skip(i + 1) {
                if !first_axis_may_meet(a, b) {
                    break;
                }
                if a.intersects(b) {
                    sets.union(i, j);
                }
            }
        }

        let mut groups: Vec<Vec<Cube>> = Vec::new();
        let mut slot_of_root = vec![usize::MAX; cells.len()];
        for (i, cell) in cells.iter().enumerate() {
            let root = sets.find(i);
            if slot_of_root[root] == usize::MAX {
                slot_of_root[root] = groups.len();
                groups.push(Vec::new());
            }
            groups[slot_of_root[root]].push(cell.clone());
        }
        log::debug!(
            "split complex of {} maximal cells into {} components",
            cells.len(),
            groups.len()
        );
        // Subsets of a sorted maximal-cell set are sorted maximal-cell sets.
        groups.into_iter().map(CubicalComplex::from_sorted).collect()
    }
}

/// `false` once `b` starts past the end of `a` on the first axis; since cells
/// are sorted, every later `b` does too.
#[inline]
fn first_axis_may_meet(a: &Cube, b: &Cube) -> bool {
    match (a.intervals().first(), b.intervals().first()) {
        (Some(ia), Some(ib)) => ib.lo() <= ia.hi(),
        _ => true,
    }
}
