// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fallible copy semantics for elements.
//!
//! `GrowVec` never moves an element out of a caller's hands: every value
//! that enters the buffer, and every value shifted inside it, is a copy.
//! [`TryClone`] is the contract for those copies. Any `T: Clone` gets it for
//! free with `Error = Infallible`; types whose copies can fail implement it
//! by hand.

// Core imports
use core::convert::Infallible;

/// Copy-construction and copy-assignment that may fail.
pub trait TryClone: Sized {
    /// The failure surfaced by a copy. Passed through the container unchanged.
    type Error;

    /// Copy-constructs a new value from `self`.
    fn try_clone(&self) -> Result<Self, Self::Error>;

    /// Copy-assigns `source` into `self`.
    ///
    /// On failure `self` must still be a valid value, though its contents are
    /// unspecified. The default builds a copy first and replaces `self` only
    /// on success.
    fn try_clone_from(&mut self, source: &Self) -> Result<(), Self::Error> {
        *self = source.try_clone()?;
        Ok(())
    }
}

impl<T: Clone> TryClone for T {
    type Error = Infallible;

    #[inline]
    fn try_clone(&self) -> Result<Self, Infallible> {
        Ok(self.clone())
    }

    #[inline]
    fn try_clone_from(&mut self, source: &Self) -> Result<(), Infallible> {
        self.clone_from(source);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::TryClone;
    use crate::testing::{Flaky, FlakyError, Switch};
    use alloc::string::String;

    #[test]
    fn test_clone_types_never_fail() {
        let s = String::from("abc");
        let mut t = String::new();
        assert_eq!(s.try_clone(), Ok(String::from("abc")));
        assert_eq!(t.try_clone_from(&s), Ok(()));
        assert_eq!(t, "abc");
    }

    #[test]
    fn test_flaky_default_assign_leaves_target_on_failure() {
        let sw = Switch::new();
        let a = Flaky::new(1, &sw);
        let mut b = Flaky::new(2, &sw);
        sw.fail_after(0);
        assert_eq!(b.try_clone_from(&a), Err(FlakyError(1)));
        assert_eq!(b.value(), 2);
        sw.disarm();
        assert_eq!(b.try_clone_from(&a), Ok(()));
        assert_eq!(b.value(), 1);
    }
}
