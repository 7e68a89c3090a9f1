#![allow(dead_code)]
use cube_collapse::{
    cubical::{Cube, CubicalComplex},
    incidence::IncidenceIndex,
};

pub fn cube(pairs: &[(i64, i64)]) -> Cube {
    Cube::from_pairs(pairs).unwrap()
}

/// Complex generated by the given cells (normalized to maximal cells).
pub fn complex(cells: &[&[(i64, i64)]]) -> CubicalComplex {
    CubicalComplex::new(cells.iter().map(|c| cube(c))).unwrap()
}

/// `[0,1]^dim`.
pub fn unit_cube(dim: usize) -> Cube {
    Cube::from_pairs(&vec![(0, 1); dim]).unwrap()
}

/// The boundary of `[0,1]^dim`, as a complex.
pub fn hollow_cube(dim: usize) -> CubicalComplex {
    CubicalComplex::new(unit_cube(dim).primary_faces()).unwrap()
}

/// Unit squares tiling the boundary of `[0,n]^3`.
pub fn box_surface(n: i64) -> Vec<Cube> {
    let mut cells = Vec::new();
    for axis in 0..3 {
        for side in [0, n] {
            for i in 0..n {
                for j in 0..n {
                    let mut spans = [(i, i + 1), (j, j + 1)].into_iter();
                    let pairs: Vec<(i64, i64)> = (0..3)
                        .map(|a| if a == axis { (side, side) } else { spans.next().unwrap() })
                        .collect();
                    cells.push(cube(&pairs));
                }
            }
        }
    }
    cells
}

/// `true` iff the engine would find nothing to collapse in `cx`.
pub fn has_no_free_face(cx: &CubicalComplex) -> bool {
    IncidenceIndex::from_complex(cx)
        .unwrap()
        .select_free_face()
        .is_none()
}

/// Betti numbers over GF(2), trailing zeros trimmed.
///
/// Boundaries are taken mod 2, so orientation signs drop out and the boundary
/// of a cube is the set of its primary faces.
pub fn betti_mod2(cx: &CubicalComplex) -> Vec<usize> {
    let strata = cx.cells_by_dimension();
    let ranks: Vec<usize> = (0..strata.len())
        .map(|d| if d == 0 { 0 } else { boundary_rank(&strata[d], &strata[d - 1]) })
        .collect();
    let mut betti: Vec<usize> = (0..strata.len())
        .map(|d| strata[d].len() - ranks[d] - ranks.get(d + 1).copied().unwrap_or(0))
        .collect();
    while betti.last() == Some(&0) {
        betti.pop();
    }
    betti
}

fn boundary_rank(cells: &[Cube], faces: &[Cube]) -> usize {
    let words = faces.len().div_ceil(64);
    let mut rows: Vec<Vec<u64>> = cells
        .iter()
        .map(|c| {
            let mut row = vec![0u64; words];
            for f in c.primary_faces() {
                let i = faces.binary_search(&f).expect("primary face missing from closure");
                row[i / 64] |= 1u64 << (i % 64);
            }
            row
        })
        .collect();
    gf2_rank(&mut rows, faces.len())
}

fn gf2_rank(rows: &mut [Vec<u64>], ncols: usize) -> usize {
    let mut rank = 0;
    for col in 0..ncols {
        let (w, bit) = (col / 64, 1u64 << (col % 64));
        let Some(p) = (rank..rows.len()).find(|&r| rows[r][w] & bit != 0) else {
            continue;
        };
        rows.swap(rank, p);
        let pivot = rows[rank].clone();
        for (r, row) in rows.iter_mut().enumerate() {
            if r != rank && row[w] & bit != 0 {
                for (x, y) in row.iter_mut().zip(&pivot) {
                    *x ^= y;
                }
            }
        }
        rank += 1;
    }
    rank
}

/// Same mod-2 Betti numbers and Euler characteristic.
pub fn assert_same_homology(a: &CubicalComplex, b: &CubicalComplex) {
    assert_eq!(betti_mod2(a), betti_mod2(b), "betti numbers differ\n a={a:?}\n b={b:?}");
    assert_eq!(a.euler_characteristic(), b.euler_characteristic());
}
