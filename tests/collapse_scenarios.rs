mod util;

use cube_collapse::prelude::*;
use util::*;

#[test]
fn edge_reduces_to_an_endpoint() {
    let cx = complex(&[&[(0, 1), (0, 0)]]);
    let out = collapse_all(&cx).unwrap();
    assert_eq!(out.maximal_cells(), &[cube(&[(0, 0), (0, 0)])]);
}

#[test]
fn square_reduces_to_a_corner() {
    let cx = complex(&[&[(0, 1), (0, 1)]]);
    let out = collapse_all(&cx).unwrap();
    assert_eq!(out.maximal_cells(), &[cube(&[(0, 0), (0, 0)])]);
}

#[test]
fn square_boundary_is_unchanged() {
    let cx = hollow_cube(2);
    assert_eq!(cx.len(), 4);
    let out = collapse_all(&cx).unwrap();
    assert_eq!(out, cx);
    assert_eq!(betti_mod2(&out), vec![1, 1]);
}

#[test]
fn solid_cube_reduces_to_a_vertex() {
    let cx = CubicalComplex::new([unit_cube(3)]).unwrap();
    let out = collapse_all(&cx).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out.dimension(), Some(0));
    assert!(cx.contains(&out.maximal_cells()[0]));
}

#[test]
fn hollow_cube_keeps_its_cavity() {
    let cx = hollow_cube(3);
    let out = collapse_all(&cx).unwrap();
    assert_eq!(out, cx);
    assert_eq!(betti_mod2(&out), vec![1, 0, 1]);
}

#[test]
fn degenerate_inputs_are_fixed_points() {
    for cx in [
        CubicalComplex::new([Cube::point(&[2, -1])]).unwrap(),
        complex(&[&[(3, 3)]]),
        CubicalComplex::new([Cube::empty()]).unwrap(),
        complex(&[&[(0, 0), (0, 0)], &[(5, 5), (1, 1)]]),
    ] {
        assert_eq!(collapse_all(&cx).unwrap(), cx);
    }
}

#[test]
fn empty_cube_complex_has_no_vertices() {
    let cx = CubicalComplex::new([Cube::empty()]).unwrap();
    let out = collapse_all(&cx).unwrap();
    assert_eq!(out.to_string(), "Cubical complex with 0 vertices and 1 cube");
}

#[test]
fn hanging_edge_on_hollow_cube_is_retracted() {
    let mut cells = unit_cube(3).primary_faces();
    cells.push(cube(&[(-1, 0), (0, 0), (0, 0)]));
    let cx = CubicalComplex::new(cells).unwrap();
    let out = collapse_all(&cx).unwrap();
    assert_eq!(out, hollow_cube(3));
    assert_same_homology(&cx, &out);
}

#[test]
fn hanging_edge_on_solid_square() {
    let cx = complex(&[&[(0, 1), (0, 1)], &[(1, 2), (1, 1)]]);
    let out = collapse_all(&cx).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out.dimension(), Some(0));
    assert_same_homology(&cx, &out);
}

#[test]
fn outside_loop_survives() {
    // Unit square with a three-edge path closing a loop below it.
    let cx = complex(&[
        &[(0, 1), (0, 1)],
        &[(0, 0), (-1, 0)],
        &[(0, 1), (-1, -1)],
        &[(1, 1), (-1, 0)],
    ]);
    let out = collapse_all(&cx).unwrap();
    assert_eq!(
        out.maximal_cells(),
        &[
            cube(&[(0, 0), (-1, 0)]),
            cube(&[(0, 1), (-1, -1)]),
            cube(&[(0, 1), (0, 0)]),
            cube(&[(1, 1), (-1, 0)]),
        ]
    );
    assert_eq!(betti_mod2(&out), vec![1, 1]);
}

#[test]
fn maximal_cell_count_can_grow() {
    // Outside path from (0,0) to (1,1) around the left and top of the square.
    let cx = complex(&[
        &[(0, 1), (0, 1)],
        &[(-1, 0), (0, 0)],
        &[(-1, -1), (0, 1)],
        &[(-1, -1), (1, 2)],
        &[(-1, 0), (2, 2)],
        &[(0, 1), (2, 2)],
        &[(1, 1), (1, 2)],
    ]);
    let mut engine = CollapseEngine::new(&cx, CollapseOptions::default()).unwrap();
    let stats = engine.run().unwrap();
    let out = engine.finish().unwrap();
    assert_eq!(cx.len(), 7);
    assert_eq!(out.len(), 8);
    assert!(out.cell_count() < cx.cell_count());
    assert_eq!(out.cell_count(), cx.cell_count() - 2 * stats.collapses);
    assert_same_homology(&cx, &out);
    assert!(has_no_free_face(&out));
}

#[test]
fn two_squares_sharing_a_corner() {
    let cx = complex(&[&[(0, 1), (0, 1)], &[(1, 2), (1, 2)]]);
    let out = collapse_all(&cx).unwrap();
    assert_eq!(out.len(), 1);
    assert_same_homology(&cx, &out);
}

#[test]
fn annulus_reduces_to_a_circle() {
    // 3x3 block of unit squares with the middle one removed.
    let mut cells = Vec::new();
    for x in 0..3 {
        for y in 0..3 {
            if (x, y) != (1, 1) {
                cells.push(cube(&[(x, x + 1), (y, y + 1)]));
            }
        }
    }
    let cx = CubicalComplex::new(cells).unwrap();
    let out = collapse_all(&cx).unwrap();
    assert_eq!(out.dimension(), Some(1));
    assert_eq!(betti_mod2(&out), vec![1, 1]);
    assert!(has_no_free_face(&out));
    assert!(out.cell_count() < cx.cell_count());
}

#[test]
fn box_surface_with_loose_edges() {
    let n = 6;
    let surface = box_surface(n);
    assert_eq!(surface.len(), 6 * 36);
    let mut cells = surface.clone();
    // Edges standing on every lattice point of the top face.
    for x in 0..=n {
        for y in 0..=n {
            cells.push(cube(&[(x, x), (y, y), (n, n + 1)]));
        }
    }
    // Edges away from the box.
    for i in 0..n {
        let x = 3 * n + 2 * i;
        cells.push(cube(&[(x, x + 1), (0, 0), (0, 0)]));
    }
    let cx = CubicalComplex::new(cells).unwrap();

    let mut engine = CollapseEngine::new(&cx, CollapseOptions::default()).unwrap();
    let stats = engine.run().unwrap();
    let out = engine.finish().unwrap();
    assert_eq!(stats.collapses, 49 + 6);
    assert_eq!(stats.absorbed, 49);
    assert_eq!(out.len(), surface.len() + 6);
    assert_eq!(out.dimension(), Some(2));
    assert!(has_no_free_face(&out));
    assert_eq!(betti_mod2(&out), vec![7, 0, 1]);
    assert_same_homology(&cx, &out);
}
