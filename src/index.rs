// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowVec`](crate::GrowVec).
//!
//! `Index`/`IndexMut` mirror slice behavior and are restricted to the live
//! prefix `[0..len)`:
//! - they **panic** on out-of-range positions, as `Index` cannot return an
//!   error; use [`GrowVec::at`](crate::GrowVec::at) for the checked form;
//! - for an in-range position, `v[i]` and `v.at(i)` refer to the same slot;
//! - all standard range forms are supported.

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for GrowVec<T> {
    type Output = I::Output;
    #[inline]
    fn index(&self, i: I) -> &Self::Output {
        &self.as_slice()[i]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowVec<T> {
    #[inline]
    fn index_mut(&mut self, i: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
