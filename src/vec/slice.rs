// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T> GrowVec<T> {
    /// Views the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, slots `[0, len)` are live and `len <= capacity`.
        unsafe { self.buf.as_slice(self.len) }
    }

    /// Views the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, slots `[0, len)` are live and `len <= capacity`.
        // `&mut self` makes the view exclusive.
        unsafe { self.buf.as_mut_slice(self.len) }
    }
}
