// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

impl<T> GrowVec<T> {
    /// Destroys the last element, or returns [`Error::ContainerEmpty`].
    #[inline]
    pub fn pop_back(&mut self) -> Result<(), Error> {
        if self.len == 0 {
            return Err(Error::ContainerEmpty);
        }
        self.len -= 1;
        // SAFETY: slot `len` was the last live slot before the decrement.
        unsafe { self.buf.destroy_at(self.len) };
        Ok(())
    }

    /// Destroys every element in index order. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: slots `[0, len)` were live; `len` is already reset so a
        // panicking destructor cannot lead to a double drop.
        unsafe { self.buf.destroy_prefix(len) };
    }
}
