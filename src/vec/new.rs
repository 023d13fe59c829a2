// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cursor::OwnerId, raw::RawBuf, vec::GrowVec};

impl<T> GrowVec<T> {
    /// Constructs an empty vector. Nothing is allocated until the first insertion.
    #[inline]
    pub fn new() -> Self {
        Self::from_parts(RawBuf::empty(), 0, OwnerId::next())
    }
}

impl<T> Default for GrowVec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
