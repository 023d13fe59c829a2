// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    cursor::{Cursor, CursorMut},
    error::Error,
    try_clone::TryClone,
    vec::GrowVec,
};

impl<T: TryClone> GrowVec<T> {
    /// Removes the element at `index`, shifting later elements left.
    ///
    /// - Returns [`Error::IndexOutOfBound`] if `index >= len`.
    /// - Returns a cursor at `index`, which equals `end()` when the last
    ///   element was removed.
    ///
    /// Later elements are copy-assigned one slot to the left, front to back,
    /// then the last slot is destroyed. If an assignment fails `len` is
    /// unchanged and the shifted range keeps whatever was assigned so far.
    pub fn erase(&mut self, index: usize) -> Result<CursorMut<T>, Error<T::Error>> {
        let len = self.len;
        if index >= len {
            return Err(Error::IndexOutOfBound);
        }
        shift_left(self.as_mut_slice(), index).map_err(Error::Element)?;
        self.len = len - 1;
        // SAFETY: slot `len - 1` was live and is no longer counted.
        unsafe { self.buf.destroy_at(len - 1) };
        Ok(CursorMut::new(self.owner(), index))
    }

    /// Removes the element under the cursor.
    ///
    /// Returns [`Error::InvalidIterator`] if the cursor was not issued by this
    /// vector or does not point at a live element (`end()` included).
    pub fn erase_at<C>(&mut self, pos: C) -> Result<CursorMut<T>, Error<T::Error>>
    where
        C: Into<Cursor<T>>,
    {
        let pos = pos.into();
        if !pos.belongs_to(self) || pos.index() >= self.len {
            return Err(Error::InvalidIterator);
        }
        self.erase(pos.index())
    }
}

/// Copy-assigns `slots[i + 1]` into `slots[i]` for every `i` from `index` up.
fn shift_left<T: TryClone>(slots: &mut [T], index: usize) -> Result<(), T::Error> {
    for i in index..slots.len().saturating_sub(1) {
        let (lo, hi) = slots.split_at_mut(i + 1);
        lo[i].try_clone_from(&hi[0])?;
    }
    Ok(())
}
