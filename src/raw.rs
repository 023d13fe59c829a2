// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Uninitialized backing storage for [`GrowVec`](crate::GrowVec).
//!
//! `RawBuf<T>` owns a block of `cap` slots but knows nothing about which of
//! them are live; the owning vector tracks that with its length. Dropping a
//! `RawBuf` releases the storage only, so callers destroy live slots first.
//!
//! Invariants:
//! - `cap == 0` iff `ptr` is `None`; no allocation exists.
//! - `cap > 0` means `ptr` addresses `cap` contiguous slots laid out as
//!   `Layout::array::<T>(cap)`. For zero-sized `T` the pointer is dangling
//!   and the allocator is never involved.

// Crate imports
use crate::{error::Error, try_clone::TryClone};

// Alloc imports
use alloc::alloc::{alloc, dealloc};

// Core imports
use core::{alloc::Layout, marker::PhantomData, ptr::NonNull};

pub(crate) struct RawBuf<T> {
    ptr: Option<NonNull<T>>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// A buffer with no slots and no allocation.
    #[inline]
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: None,
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Obtains `n` uninitialized slots. `n == 0` allocates nothing.
    pub(crate) fn allocate(n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Ok(Self::empty());
        }
        let layout = Layout::array::<T>(n).map_err(|_| Error::AllocationFailed)?;
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: `layout` has a non-zero size.
            let raw = unsafe { alloc(layout) };
            NonNull::new(raw.cast::<T>()).ok_or(Error::AllocationFailed)?
        };
        Ok(Self {
            ptr: Some(ptr),
            cap: n,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    /// Pointer to slot `i`.
    ///
    /// Dangling when there is no allocation; only valid to dereference for
    /// `i < cap`, and only as a `T` when that slot is live.
    #[inline]
    pub(crate) fn slot(&self, i: usize) -> *mut T {
        debug_assert!(i < self.cap || (self.cap == 0 && i == 0));
        match self.ptr {
            // SAFETY: `i < cap`, so the offset stays inside the block.
            Some(p) => unsafe { p.as_ptr().add(i) },
            None => NonNull::dangling().as_ptr(),
        }
    }

    /// Copy-constructs `src` into slot `i`.
    ///
    /// # Safety
    ///
    /// `i < cap` and slot `i` must be uninitialized. `src` must not alias slot `i`.
    #[inline]
    pub(crate) unsafe fn construct_at(&mut self, i: usize, src: &T) -> Result<(), T::Error>
    where
        T: TryClone,
    {
        let value = src.try_clone()?;
        // SAFETY: caller guarantees slot `i` is in bounds and holds no live value.
        unsafe { self.slot(i).write(value) };
        Ok(())
    }

    /// Destroys the live element in slot `i`.
    ///
    /// # Safety
    ///
    /// `i < cap` and slot `i` must be live. It is uninitialized afterwards.
    #[inline]
    pub(crate) unsafe fn destroy_at(&mut self, i: usize) {
        // SAFETY: caller guarantees slot `i` holds a live `T`.
        unsafe { self.slot(i).drop_in_place() }
    }

    /// Destroys slots `[0, len)` in index order.
    ///
    /// # Safety
    ///
    /// Slots `[0, len)` must be live.
    pub(crate) unsafe fn destroy_prefix(&mut self, len: usize) {
        for i in 0..len {
            // SAFETY: `i < len` and the caller guarantees the prefix is live.
            unsafe { self.destroy_at(i) };
        }
    }

    /// # Safety
    ///
    /// Slots `[0, len)` must be live.
    #[inline]
    pub(crate) unsafe fn as_slice(&self, len: usize) -> &[T] {
        match self.ptr {
            // SAFETY: caller guarantees `len <= cap` live slots behind `p`.
            Some(p) => unsafe { core::slice::from_raw_parts(p.as_ptr(), len) },
            None => &[],
        }
    }

    /// # Safety
    ///
    /// Slots `[0, len)` must be live.
    #[inline]
    pub(crate) unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        match self.ptr {
            // SAFETY: as in `as_slice`; `&mut self` makes the view exclusive.
            Some(p) => unsafe { core::slice::from_raw_parts_mut(p.as_ptr(), len) },
            None => &mut [],
        }
    }

    /// Makes room for at least `need` slots, keeping the `len` live elements.
    ///
    /// Grows by doubling from `max(1, cap)`. The live elements are copied into
    /// a fresh block; if a copy fails the half-built block is torn down and
    /// `self` is left exactly as it was.
    ///
    /// # Safety
    ///
    /// Slots `[0, len)` must be live and `len <= cap`.
    pub(crate) unsafe fn reserve_for(&mut self, len: usize, need: usize) -> Result<(), Error<T::Error>>
    where
        T: TryClone,
    {
        if need <= self.cap {
            return Ok(());
        }
        let new_cap = grown_capacity(self.cap, need).map_err(Error::widen::<T::Error>)?;
        let mut fresh = Self::allocate(new_cap).map_err(Error::widen::<T::Error>)?;
        for i in 0..len {
            // SAFETY: `i < len <= cap` is live in `self`; `i < new_cap` is raw in `fresh`.
            let copied = unsafe { fresh.construct_at(i, &*self.slot(i)) };
            if let Err(e) = copied {
                // SAFETY: exactly `[0, i)` were constructed in `fresh`.
                unsafe { fresh.destroy_prefix(i) };
                return Err(Error::Element(e));
            }
        }
        log::trace!("grow_vec: reallocated {} -> {} slots ({} live)", self.cap, new_cap, len);
        // SAFETY: caller guarantees `[0, len)` is live; it has been copied to `fresh`.
        unsafe { self.destroy_prefix(len) };
        *self = fresh;
        Ok(())
    }

    /// Exchanges storage with `other`.
    #[inline]
    pub(crate) fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let Some(p) = self.ptr.take() else {
            return;
        };
        // `allocate` already validated this layout for `cap`.
        let Ok(layout) = Layout::array::<T>(self.cap) else {
            return;
        };
        if layout.size() != 0 {
            // SAFETY: `p` came from `alloc` with this exact layout.
            unsafe { dealloc(p.as_ptr().cast(), layout) };
        }
        self.cap = 0;
    }
}

/// Capacity after doubling from `max(1, cap)` until it covers `need`.
pub(crate) fn grown_capacity(cap: usize, need: usize) -> Result<usize, Error> {
    let mut new_cap = cap.max(1);
    while new_cap < need {
        new_cap = new_cap.checked_mul(2).ok_or(Error::AllocationFailed)?;
    }
    Ok(new_cap)
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{grown_capacity, RawBuf};
    use crate::{
        error::Error,
        testing::{Flaky, FlakyError, Switch},
    };
    use test_case::test_case;

    #[test_case(0, 1 => 1; "from empty")]
    #[test_case(1, 2 => 2; "one doubling")]
    #[test_case(2, 3 => 4; "rounds up")]
    #[test_case(4, 9 => 16; "several doublings")]
    #[test_case(3, 4 => 6; "non power of two base")]
    #[test_case(8, 8 => 8; "already enough")]
    fn test_grown_capacity(cap: usize, need: usize) -> usize {
        grown_capacity(cap, need).unwrap()
    }

    #[test]
    fn test_grown_capacity_overflow() {
        assert_eq!(grown_capacity(usize::MAX / 2 + 1, usize::MAX), Err(Error::AllocationFailed));
    }

    #[test]
    fn test_allocate_zero_is_empty() {
        let b = RawBuf::<u64>::allocate(0).unwrap();
        assert_eq!(b.capacity(), 0);
        assert!(b.ptr.is_none());
    }

    #[test]
    fn test_allocate_too_large_fails() {
        assert_eq!(RawBuf::<u64>::allocate(usize::MAX).err(), Some(Error::AllocationFailed));
    }

    #[test]
    fn test_zero_sized_slots() {
        let mut b = RawBuf::<()>::allocate(4).unwrap();
        assert_eq!(b.capacity(), 4);
        unsafe {
            b.construct_at(0, &()).unwrap();
            b.destroy_at(0);
        }
    }

    #[test]
    fn test_construct_destroy_roundtrip() {
        let sw = Switch::new();
        let src = Flaky::new(5, &sw);
        let mut b = RawBuf::<Flaky>::allocate(2).unwrap();
        unsafe {
            b.construct_at(1, &src).unwrap();
            assert_eq!((*b.slot(1)).value(), 5);
            assert_eq!(sw.live(), 2);
            b.destroy_at(1);
        }
        assert_eq!(sw.live(), 1);
    }

    #[test]
    fn test_reserve_rolls_back_on_copy_failure() {
        let sw = Switch::new();
        let mut b = RawBuf::<Flaky>::allocate(2).unwrap();
        let a = Flaky::new(1, &sw);
        let c = Flaky::new(2, &sw);
        unsafe {
            b.construct_at(0, &a).unwrap();
            b.construct_at(1, &c).unwrap();
        }
        let old = b.slot(0);
        sw.fail_after(1);
        let res = unsafe { b.reserve_for(2, 3) };
        assert_eq!(res, Err(Error::Element(FlakyError(2))));
        // Untouched: same block, same capacity, the partial copy torn down.
        assert_eq!(b.capacity(), 2);
        assert_eq!(b.slot(0), old);
        assert_eq!(sw.live(), 4);
        sw.disarm();
        unsafe {
            b.reserve_for(2, 3).unwrap();
            assert_eq!(b.capacity(), 4);
            assert_eq!(b.as_slice(2).iter().map(Flaky::value).collect::<alloc::vec::Vec<_>>(), [1, 2]);
            b.destroy_prefix(2);
        }
        assert_eq!(sw.live(), 2);
    }
}
