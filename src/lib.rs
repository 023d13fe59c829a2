// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `copy-grow-vec`
//!
//! A `no_std` (+ `alloc`), growable, contiguous vector whose elements are only
//! ever **copied** in and shifted by **copy-assignment**, where every copy may
//! fail.
//!
//! The core type, [`GrowVec<T>`], keeps a heap buffer of `capacity` slots of
//! which a prefix of length `len` is live. It provides positional access,
//! insertion and removal at any position, and geometric growth, and it spells
//! out exactly what state it is left in when an element copy fails.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - Cloning your elements can fail (e.g. fallible allocation inside the
//!   element, resource handles with a quota) and you want that failure
//!   reported, not turned into a panic.
//! - You want strong "no change on failure" behavior for growth.
//! - You want position handles ([`CursorMut`], [`Cursor`]) that can be passed
//!   back to [`GrowVec::insert_at`] / [`GrowVec::erase_at`] and are rejected
//!   when used on the wrong vector.
//!
//! It may not be the best fit if:
//!
//! - You need move-only elements. `GrowVec` copies.
//! - You need custom allocators, small-buffer optimization or `shrink_to_fit`.
//!
//! ## Copy semantics
//!
//! Elements implement [`TryClone`]. Every `T: Clone` does so automatically,
//! with `Error = Infallible`. A type whose copies can fail implements
//! `TryClone` by hand, and its error is passed through unchanged inside
//! [`Error::Element`].
//!
//! ## Growth and failure behavior
//!
//! - Storage is allocated lazily; capacity doubles from 1 until it fits.
//! - Growth copies the live elements into a fresh buffer. If one copy fails
//!   the new buffer is torn down and the vector is exactly as before.
//! - An in-place shift (`insert`/`erase` in the middle) that fails part-way
//!   leaves `len` unchanged and every slot valid, with unspecified contents
//!   in the shifted range.
//! - [`GrowVec::try_assign_from`] copies into a temporary, then swaps.
//!
//! ## Range and indexing behavior
//!
//! - [`GrowVec::at`], [`GrowVec::front`], [`GrowVec::back`] and
//!   [`GrowVec::pop_back`] return [`Error`] on a bad position or an empty
//!   vector.
//! - Indexing (`v[i]`, `v[start..end]`, …) **panics** on out-of-bounds, like
//!   built-in slices.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `GrowVec<T>`.
//!   - Deserialization copies each element in with `push_back`.
//!
//! ## Logging
//!
//! Reallocations are reported at `trace` level through the [`log`] facade.
//!
//! ## Example
//!
//! ```rust
//! use copy_grow_vec::{Error, GrowVec};
//!
//! let mut v = GrowVec::new();
//! for x in [1, 2, 3] {
//!     v.push_back(&x).unwrap();
//! }
//! let c = v.insert(1, &9).unwrap();
//! assert_eq!(c.get(&v), Ok(&9));
//! assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
//!
//! let c = v.erase(3).unwrap();
//! assert_eq!(c, v.end());
//! assert_eq!(v.at(3), Err(Error::IndexOutOfBound));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
pub mod cursor;
mod error;
mod index;
mod iter;
mod raw;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod testing;
mod try_clone;
mod vec;

// Public exports (crate API surface)
pub use cursor::{Cursor, CursorMut};
pub use error::Error;
pub use try_clone::TryClone;
pub use vec::GrowVec;
