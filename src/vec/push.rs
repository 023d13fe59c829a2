// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, try_clone::TryClone, vec::GrowVec};

impl<T: TryClone> GrowVec<T> {
    /// Appends a copy of `value`.
    ///
    /// Grows the buffer first if it is full. If growing fails the vector is
    /// unchanged. If only the final copy of `value` fails, `len` is unchanged
    /// but the larger buffer is kept.
    #[inline]
    pub fn push_back(&mut self, value: &T) -> Result<(), Error<T::Error>> {
        // SAFETY: By invariant, slots `[0, len)` are live.
        unsafe { self.buf.reserve_for(self.len, self.len + 1)? };
        // SAFETY: `len < capacity` after reserving, and slot `len` is raw.
        // `value` is a caller-owned reference: it cannot alias a raw slot.
        unsafe { self.buf.construct_at(self.len, value) }.map_err(Error::Element)?;
        self.len += 1;
        Ok(())
    }
}
