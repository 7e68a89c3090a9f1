//! `CellId`: a strong, zero-cost handle for cells interned in a [`CellArena`].
//!
//! Every cube the incidence index touches (maximal cells and their primary
//! faces) is stored once in the arena and referred to by a `CellId`. Incidence
//! lists hold ids rather than cubes, so promotions and removals are id
//! rewrites and never clone or alias cell data.
//!
//! `CellId` wraps a `NonZeroU32`: 0 is reserved as an invalid value, which also
//! gives `Option<CellId>` the size of a `u32`.
//!
//! [`CellArena`]: crate::incidence::arena::CellArena

use crate::collapse_error::CollapseError;
use std::{fmt, num::NonZeroU32};

/// Handle of a cell in a [`CellArena`](crate::incidence::arena::CellArena).
///
/// Ids are handed out in interning order starting at 1, so comparing ids
/// compares registration order.
///
/// # Memory layout
/// `repr(transparent)` over `NonZeroU32`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct CellId(NonZeroU32);

impl CellId {
    /// Creates a new `CellId` from a raw `u32` value.
    ///
    /// # Errors
    ///
    /// Returns [`CollapseError::InvalidCellId`] if `raw == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use cube_collapse::incidence::cell_id::CellId;
    /// let c = CellId::new(1).unwrap();
    /// assert_eq!(c.get(), 1);
    /// assert!(CellId::new(0).is_err());
    /// ```
    #[inline]
    pub fn new(raw: u32) -> Result<Self, CollapseError> {
        NonZeroU32::new(raw)
            .map(CellId)
            .ok_or(CollapseError::InvalidCellId)
    }

    /// Returns the inner `u32` value of this `CellId`.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based slot of this id in its arena.
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// The id stored at zero-based arena slot `slot`.
    #[inline]
    pub(crate) fn from_slot(slot: usize) -> Result<Self, CollapseError> {
        u32::try_from(slot)
            .ok()
            .and_then(|s| s.checked_add(1))
            .and_then(NonZeroU32::new)
            .map(CellId)
            .ok_or(CollapseError::ArenaExhausted)
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

impl fmt::Debug for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CellId").field(&self.get()).finish()
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

// -----------------------------------------------------------------------------
// Testing and assertions
// -----------------------------------------------------------------------------


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_zero_is_rejected() {
        assert_eq!(CellId::new(0), Err(CollapseError::InvalidCellId));
    }

    #[test]
    fn new_and_get() {
        let c = CellId::new(42).unwrap();
        assert_eq!(c.get(), 42);
        assert_eq!(c.slot(), 41);
    }

    #[test]
    fn slot_roundtrip() {
        for slot in [0usize, 1, 999] {
            assert_eq!(CellId::from_slot(slot).unwrap().slot(), slot);
        }
        assert_eq!(
            CellId::from_slot(u32::MAX as usize),
            Err(CollapseError::ArenaExhausted)
        );
    }

    #[test]
    fn debug_and_display() {
        let c = CellId::new(7).unwrap();
        assert_eq!(format!("{:?}", c), "CellId(7)");
        assert_eq!(format!("{}", c), "7");
    }

    #[test]
    fn ordering_follows_raw_value() {
        let a = CellId::new(1).unwrap();
        let b = CellId::new(2).unwrap();
        assert!(a < b);
    }

    #[test]
    fn max_value() {
        let c = CellId::new(u32::MAX).unwrap();
        assert_eq!(c.get(), u32::MAX);
    }
}
