//! Cubical primitives: elementary intervals, elementary cubes and complexes.
//!
//! These are the cell types the collapse machinery consumes:
//! - [`Interval`]: one coordinate of a cube, degenerate or of unit length
//! - [`Cube`]: a product of intervals, with face relation and face enumeration
//! - [`CubicalComplex`]: a finite complex stored by its maximal cells
//!
//! Most users build cubes with [`Cube::from_pairs`] and complexes with
//! [`CubicalComplex::new`], then hand the complex to [`crate::algs`].

pub mod complex;
pub mod components;
pub mod cube;
pub mod interval;

pub use complex::CubicalComplex;
pub use cube::Cube;
pub use interval::Interval;
