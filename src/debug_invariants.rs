//! Invariant validation hooks.
//!
//! Full validation of an incidence index is linear in its size, so it runs at
//! phase boundaries (after a build, before materializing a complex) rather
//! than after every collapse. Release builds skip the assertions unless the
//! `strict-invariants` or `check-invariants` feature is enabled.

use crate::collapse_error::CollapseError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Short name used to prefix panic messages.
    const LABEL: &'static str;

    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), CollapseError>;

    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self) {
        #[cfg(any(
            debug_assertions,
            feature = "strict-invariants",
            feature = "check-invariants"
        ))]
        if let Err(e) = self.validate_invariants() {
            panic!("[invariants] {}: {}", Self::LABEL, e);
        }
    }
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
