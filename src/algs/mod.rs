//! Re-export public algorithms.

pub mod collapse;
pub mod components;
pub mod elementary;
pub mod round;

pub use collapse::{
    CollapseEngine, CollapseOptions, CollapseStats, collapse_all, collapse_to_fixed_point,
};
pub use components::collapse_components;
pub use elementary::elementary_collapse;
pub use round::{collapse_one_round, free_faces};
