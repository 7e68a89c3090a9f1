#![allow(dead_code)]

use crate::incidence::cell_id::CellId;
#[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
use std::collections::HashSet;

/// `inv_assert*` fire in debug builds and whenever the `strict-invariants` or
/// `check-invariants` feature is enabled; they compile to no-ops otherwise.
#[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
macro_rules! inv_assert {
    ($($tt:tt)*) => { assert!($($tt)*); };
}
#[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
macro_rules! inv_assert_eq {
    ($($tt:tt)*) => { assert_eq!($($tt)*); };
}
#[cfg(not(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants")))]
macro_rules! inv_assert {
    ($($tt:tt)*) => {
        ()
    };
}
#[cfg(not(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants")))]
macro_rules! inv_assert_eq {
    ($($tt:tt)*) => {
        ()
    };
}
pub(crate) use inv_assert;
pub(crate) use inv_assert_eq;

/// A cofacet list never names the same maximal cell twice.
#[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
#[inline]
pub fn assert_unique_cofacets<K: std::fmt::Debug>(key: K, list: &[CellId]) {
    let mut seen = HashSet::with_capacity(list.len());
    for c in list {
        assert!(seen.insert(*c), "duplicate cofacet {c:?} under {key:?}");
    }
}

#[cfg(not(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants")))]
#[inline(always)]
pub fn assert_unique_cofacets<K>(_key: K, _list: &[CellId]) {}

/// After a collapse, none of the touched faces may still list the removed cell.
#[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
#[inline]
pub fn assert_detached<'a>(
    cell: CellId,
    lists: impl IntoIterator<Item = (CellId, &'a [CellId])>,
) {
    for (face, list) in lists {
        assert!(
            !list.contains(&cell),
            "collapsed cell {cell:?} still listed under face {face:?}"
        );
    }
}

#[cfg(not(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants")))]
#[inline(always)]
pub fn assert_detached<'a>(
    _cell: CellId,
    _lists: impl IntoIterator<Item = (CellId, &'a [CellId])>,
) {
}
