// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowVec` type and its inherent API.
//!
//! `GrowVec<T>` is a heap-backed vector whose elements enter and move only by
//! copy ([`TryClone`](crate::TryClone)), so every copy may fail. Methods
//! mirror `Vec` where they can and return [`Error`](crate::Error) where a `Vec` would panic.

mod access;
mod clone;
mod erase;
mod insert;
mod new;
mod pop;
mod push;
mod slice;
mod try_from;

// Crate imports
use crate::{
    cursor::{Cursor, CursorMut, OwnerId},
    raw::RawBuf,
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, contiguous vector whose elements are copied in with
/// [`TryClone`](crate::TryClone).
///
/// # Layout and invariants
///
/// `GrowVec<T>` owns a raw buffer of `capacity()` slots and a logical length
/// `len` with `0 <= len <= capacity()`:
///
/// - slots `[0, len)` hold live elements in sequence order, with no gaps;
/// - slots `[len, capacity())` are uninitialized;
/// - with `capacity() == 0` there is no allocation at all.
///
/// Storage is obtained lazily. When an insertion needs more room the capacity
/// doubles, starting from 1, until it fits. A copy-constructed vector starts
/// with `capacity() == len()` of its source, so capacities are powers of two
/// only for vectors grown from empty.
///
/// # Failure guarantees
///
/// - [`len`](GrowVec::len), [`is_empty`](GrowVec::is_empty),
///   [`clear`](GrowVec::clear), [`swap`](GrowVec::swap) and drop never fail.
/// - [`pop_back`](GrowVec::pop_back), [`at`](GrowVec::at),
///   [`front`](GrowVec::front) and [`back`](GrowVec::back) only fail on a
///   violated precondition and then change nothing.
/// - [`push_back`](GrowVec::push_back), [`insert`](GrowVec::insert),
///   [`try_clone`](GrowVec::try_clone) and
///   [`try_assign_from`](GrowVec::try_assign_from) leave the vector exactly
///   as it was if growing fails, including when an element copy fails
///   mid-growth.
/// - If a copy-assignment fails while [`insert`](GrowVec::insert) or
///   [`erase`](GrowVec::erase) shift elements in place, every slot is still a
///   valid element and `len` is not changed, but the shifted range has
///   unspecified contents.
///
/// # Cursors
///
/// [`begin`](GrowVec::begin)/[`end`](GrowVec::end) return [`CursorMut`],
/// [`cbegin`](GrowVec::cbegin)/[`cend`](GrowVec::cend) return [`Cursor`].
/// Cursors do not borrow the vector; see the [`cursor`](crate::cursor) module
/// for how they are checked.
///
/// # Examples
///
/// ```rust
/// use copy_grow_vec::GrowVec;
///
/// let mut v = GrowVec::new();
/// v.push_back(&1).unwrap();
/// v.push_back(&3).unwrap();
/// let at = v.insert(1, &2).unwrap();
/// assert_eq!(at.get(&v), Ok(&2));
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.capacity(), 4);
/// ```
pub struct GrowVec<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
    owner: OwnerId,
}

// SAFETY: `GrowVec<T>` owns its elements exactly like `Vec<T>`; mutation
// requires `&mut self`.
unsafe impl<T: Send> Send for GrowVec<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for GrowVec<T> {}

impl<T> GrowVec<T> {
    pub(crate) const fn from_parts(buf: RawBuf<T>, len: usize, owner: OwnerId) -> Self {
        Self { buf, len, owner }
    }

    #[inline]
    pub(crate) const fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Returns the number of slots in the backing buffer.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](GrowVec::len).
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alias of [`is_empty`](GrowVec::is_empty).
    #[inline]
    pub const fn empty(&self) -> bool {
        self.len == 0
    }

    // cursors
    /// Mutable cursor at position 0.
    #[inline]
    pub fn begin(&self) -> CursorMut<T> {
        CursorMut::new(self.owner, 0)
    }

    /// Mutable cursor one past the last element.
    #[inline]
    pub fn end(&self) -> CursorMut<T> {
        CursorMut::new(self.owner, self.len)
    }

    /// Read-only cursor at position 0.
    #[inline]
    pub fn cbegin(&self) -> Cursor<T> {
        Cursor::new(self.owner, 0)
    }

    /// Read-only cursor one past the last element.
    #[inline]
    pub fn cend(&self) -> Cursor<T> {
        Cursor::new(self.owner, self.len)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns `true` if the vector contains `x`.
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // Destroys live elements in index order; `buf` then releases the block.
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for GrowVec<T> {}
impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for GrowVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for GrowVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
