// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cursor::OwnerId, error::Error, raw::RawBuf, try_clone::TryClone, vec::GrowVec};

impl<T: TryClone> GrowVec<T> {
    /// Deep-copies the vector.
    ///
    /// The copy gets a buffer of exactly `len` slots and its own identity, so
    /// cursors of `self` are foreign to it. On failure nothing is leaked.
    pub fn try_clone(&self) -> Result<Self, Error<T::Error>> {
        let mut buf = RawBuf::allocate(self.len).map_err(Error::widen::<T::Error>)?;
        for (i, item) in self.iter().enumerate() {
            // SAFETY: `i < len == capacity` of `buf` and slot `i` is raw.
            if let Err(e) = unsafe { buf.construct_at(i, item) } {
                // SAFETY: exactly `[0, i)` were constructed.
                unsafe { buf.destroy_prefix(i) };
                return Err(Error::Element(e));
            }
        }
        Ok(Self::from_parts(buf, self.len, OwnerId::next()))
    }

    /// Replaces the contents of `self` with a deep copy of `source`.
    ///
    /// Builds the copy first and swaps it in, so `self` is untouched if any
    /// copy fails. `self` keeps its identity: its cursors stay valid owners.
    pub fn try_assign_from(&mut self, source: &Self) -> Result<(), Error<T::Error>> {
        let mut tmp = source.try_clone()?;
        self.swap(&mut tmp);
        Ok(())
    }
}

impl<T> GrowVec<T> {
    /// Exchanges contents (buffer, length and capacity) with `other`.
    ///
    /// Identities are not exchanged: a cursor issued by `self` still belongs
    /// to `self` and now sees `other`'s former elements.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        core::mem::swap(&mut self.len, &mut other.len);
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    /// # Panics
    ///
    /// Panics if the allocator fails, like `Vec::clone`.
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| panic!("GrowVec::clone: {e}"))
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.try_assign_from(source) {
            panic!("GrowVec::clone_from: {e}");
        }
    }
}
