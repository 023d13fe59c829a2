// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Position-carrying cursors into a [`GrowVec`](crate::GrowVec).
//!
//! A cursor is `(owner, index)`. It does not borrow the vector: the owner is
//! an identity token issued to every `GrowVec` when it is created, so a
//! cursor can be handed back to `insert_at`/`erase_at` on the very vector it
//! points into. Every dereference takes the vector explicitly and checks
//! both the owner and `index < len`, so a stale cursor can never read a
//! dead slot; it just sees whatever is live at its index now.
//!
//! - [`CursorMut`] dereferences mutably (`get_mut`) and read-only (`get`).
//! - [`Cursor`] only dereferences read-only; it converts from `CursorMut`,
//!   never the other way around.
//!
//! Arithmetic never checks bounds. An index that steps below zero wraps and
//! is simply rejected on dereference.

// Crate imports
use crate::{error::Error, vec::GrowVec};

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, Sub, SubAssign},
    sync::atomic::{AtomicUsize, Ordering},
};

/// Identity of one `GrowVec` value. Storage may be swapped between vectors;
/// identities never are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct OwnerId(usize);

impl OwnerId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

macro_rules! cursor_common {
    ($name:ident) => {
        impl<T> $name<T> {
            #[inline]
            pub(crate) const fn new(owner: OwnerId, idx: usize) -> Self {
                Self {
                    owner: Some(owner),
                    idx,
                    _marker: PhantomData,
                }
            }

            /// Position this cursor refers to.
            #[inline]
            pub const fn index(&self) -> usize {
                self.idx
            }

            /// Returns `true` if this cursor was issued by `vec`.
            #[inline]
            pub fn belongs_to(&self, vec: &GrowVec<T>) -> bool {
                self.owner == Some(vec.owner())
            }

            /// Read-only access to the element under the cursor.
            ///
            /// Fails with [`Error::InvalidIterator`] if the cursor has no
            /// owner, was issued by another vector, or `index() >= vec.len()`.
            #[inline]
            pub fn get<'a>(&self, vec: &'a GrowVec<T>) -> Result<&'a T, Error> {
                if !self.belongs_to(vec) {
                    return Err(Error::InvalidIterator);
                }
                vec.as_slice().get(self.idx).ok_or(Error::InvalidIterator)
            }

            /// Signed distance `self - other`.
            ///
            /// Fails with [`Error::InvalidIterator`] when the two cursors have
            /// different owners.
            #[inline]
            pub fn offset_from<C: Into<Cursor<T>>>(&self, other: C) -> Result<isize, Error> {
                let other = other.into();
                if self.owner != other.owner {
                    return Err(Error::InvalidIterator);
                }
                Ok(self.idx.wrapping_sub(other.idx) as isize)
            }

            /// Pre-increment: moves forward one position.
            #[inline]
            pub fn inc(&mut self) -> &mut Self {
                self.idx = self.idx.wrapping_add(1);
                self
            }

            /// Pre-decrement: moves back one position.
            #[inline]
            pub fn dec(&mut self) -> &mut Self {
                self.idx = self.idx.wrapping_sub(1);
                self
            }

            /// Post-increment: moves forward, returning the previous position.
            #[inline]
            pub fn post_inc(&mut self) -> Self {
                let prev = *self;
                self.inc();
                prev
            }

            /// Post-decrement: moves back, returning the previous position.
            #[inline]
            pub fn post_dec(&mut self) -> Self {
                let prev = *self;
                self.dec();
                prev
            }
        }

        impl<T> Default for $name<T> {
            /// A cursor with no owner. Every dereference fails.
            fn default() -> Self {
                Self {
                    owner: None,
                    idx: 0,
                    _marker: PhantomData,
                }
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }
        impl<T> Copy for $name<T> {}

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("owner", &self.owner)
                    .field("idx", &self.idx)
                    .finish()
            }
        }

        impl<T> Eq for $name<T> {}
        impl<T> Hash for $name<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.owner.hash(state);
                self.idx.hash(state);
            }
        }

        impl<T> Add<isize> for $name<T> {
            type Output = Self;
            fn add(mut self, n: isize) -> Self {
                self += n;
                self
            }
        }
        impl<T> Sub<isize> for $name<T> {
            type Output = Self;
            fn sub(mut self, n: isize) -> Self {
                self -= n;
                self
            }
        }
        impl<T> AddAssign<isize> for $name<T> {
            fn add_assign(&mut self, n: isize) {
                self.idx = self.idx.wrapping_add_signed(n);
            }
        }
        impl<T> SubAssign<isize> for $name<T> {
            fn sub_assign(&mut self, n: isize) {
                self.idx = self.idx.wrapping_add_signed(n.wrapping_neg());
            }
        }
    };
}

/// A mutable cursor: `(owner, index)` with read and write access on dereference.
pub struct CursorMut<T> {
    pub(crate) owner: Option<OwnerId>,
    pub(crate) idx: usize,
    _marker: PhantomData<fn() -> T>,
}

/// A read-only cursor: `(owner, index)` with shared access on dereference.
pub struct Cursor<T> {
    pub(crate) owner: Option<OwnerId>,
    pub(crate) idx: usize,
    _marker: PhantomData<fn() -> T>,
}

cursor_common!(CursorMut);
cursor_common!(Cursor);

impl<T> CursorMut<T> {
    /// Mutable access to the element under the cursor.
    ///
    /// Fails like [`CursorMut::get`].
    #[inline]
    pub fn get_mut<'a>(&self, vec: &'a mut GrowVec<T>) -> Result<&'a mut T, Error> {
        if !self.belongs_to(vec) {
            return Err(Error::InvalidIterator);
        }
        vec.as_mut_slice().get_mut(self.idx).ok_or(Error::InvalidIterator)
    }
}

impl<T> From<CursorMut<T>> for Cursor<T> {
    #[inline]
    fn from(c: CursorMut<T>) -> Self {
        Self {
            owner: c.owner,
            idx: c.idx,
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq<CursorMut<T>> for CursorMut<T> {
    fn eq(&self, other: &CursorMut<T>) -> bool {
        self.owner == other.owner && self.idx == other.idx
    }
}
impl<T> PartialEq<Cursor<T>> for Cursor<T> {
    fn eq(&self, other: &Cursor<T>) -> bool {
        self.owner == other.owner && self.idx == other.idx
    }
}
impl<T> PartialEq<Cursor<T>> for CursorMut<T> {
    fn eq(&self, other: &Cursor<T>) -> bool {
        self.owner == other.owner && self.idx == other.idx
    }
}
impl<T> PartialEq<CursorMut<T>> for Cursor<T> {
    fn eq(&self, other: &CursorMut<T>) -> bool {
        other == self
    }
}
