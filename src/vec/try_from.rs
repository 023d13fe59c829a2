// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, try_clone::TryClone, vec::GrowVec};

impl<T: TryClone> GrowVec<T> {
    /// Builds a vector by copying every element of `src` in order through
    /// [`push_back`](GrowVec::push_back).
    pub fn try_from_slice(src: &[T]) -> Result<Self, Error<T::Error>> {
        let mut v = Self::new();
        for item in src {
            v.push_back(item)?;
        }
        Ok(v)
    }
}

impl<T: TryClone> TryFrom<&[T]> for GrowVec<T> {
    type Error = Error<T::Error>;
    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        Self::try_from_slice(src)
    }
}
