// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

impl<T> GrowVec<T> {
    /// Returns the element at `pos`, or [`Error::IndexOutOfBound`] if `pos >= len`.
    #[inline]
    pub fn at(&self, pos: usize) -> Result<&T, Error> {
        self.as_slice().get(pos).ok_or(Error::IndexOutOfBound)
    }

    /// Mutable variant of [`at`](GrowVec::at).
    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, Error> {
        self.as_mut_slice().get_mut(pos).ok_or(Error::IndexOutOfBound)
    }

    /// Returns the first element, or [`Error::ContainerEmpty`].
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.as_slice().first().ok_or(Error::ContainerEmpty)
    }

    /// Returns the last element, or [`Error::ContainerEmpty`].
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        self.as_slice().last().ok_or(Error::ContainerEmpty)
    }
}
