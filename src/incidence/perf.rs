//! Hash map selection for the arena and the incidence index.
//!
//! `fast-hash` swaps in `ahash`; `deterministic-order` swaps in `BTreeMap` and
//! wins when both are enabled. Results never depend on which one is active:
//! free-face selection walks ordered per-dimension sets and materialization
//! sorts its output, so map iteration order is never observed.

#[cfg(all(feature = "fast-hash", not(feature = "deterministic-order")))]
mod imp {
    pub use ahash::AHashMap as FastMap;
}

#[cfg(feature = "deterministic-order")]
mod imp {
    pub use std::collections::BTreeMap as FastMap;
}

#[cfg(not(any(feature = "fast-hash", feature = "deterministic-order")))]
mod imp {
    pub use std::collections::HashMap as FastMap;
}

pub use imp::FastMap;
