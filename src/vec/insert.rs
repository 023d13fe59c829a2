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
    /// Inserts a copy of `value` at `index`, shifting later elements right.
    ///
    /// - Returns [`Error::IndexOutOfBound`] if `index > len`.
    /// - Returns a cursor at `index` on success.
    ///
    /// The shift copy-constructs the last element into the first raw slot,
    /// then copy-assigns each element one slot to the right, back to front,
    /// and finally assigns `value` at `index`. Every touched slot holds a
    /// valid element throughout. If an assignment fails the extra slot is
    /// destroyed again and `len` is unchanged; the shifted range keeps
    /// whatever was assigned so far.
    pub fn insert(&mut self, index: usize, value: &T) -> Result<CursorMut<T>, Error<T::Error>> {
        let len = self.len;
        if index > len {
            return Err(Error::IndexOutOfBound);
        }
        // SAFETY: By invariant, slots `[0, len)` are live.
        unsafe { self.buf.reserve_for(len, len + 1)? };

        if index == len {
            // SAFETY: `len < capacity` and slot `len` is raw.
            unsafe { self.buf.construct_at(len, value) }.map_err(Error::Element)?;
        } else {
            let last = self.buf.slot(len - 1);
            // SAFETY: slot `len - 1` is live and distinct from the raw slot `len`.
            unsafe { self.buf.construct_at(len, &*last) }.map_err(Error::Element)?;
            if let Err(e) = shift_right(self.as_mut_slice(), index, value) {
                // SAFETY: slot `len` was constructed above and is not counted in `len`.
                unsafe { self.buf.destroy_at(len) };
                return Err(Error::Element(e));
            }
        }
        self.len = len + 1;
        Ok(CursorMut::new(self.owner(), index))
    }

    /// Inserts a copy of `value` at the cursor's position.
    ///
    /// Returns [`Error::InvalidIterator`] if the cursor was not issued by this
    /// vector. A cursor at `end()` is accepted and appends.
    pub fn insert_at<C>(&mut self, pos: C, value: &T) -> Result<CursorMut<T>, Error<T::Error>>
    where
        C: Into<Cursor<T>>,
    {
        let pos = pos.into();
        if !pos.belongs_to(self) {
            return Err(Error::InvalidIterator);
        }
        self.insert(pos.index(), value)
    }
}

/// Moves `slots[index..]` one to the right by assignment, dropping the last
/// value (already copied out), then assigns `value` at `index`.
fn shift_right<T: TryClone>(slots: &mut [T], index: usize, value: &T) -> Result<(), T::Error> {
    for i in (index + 1..slots.len()).rev() {
        let (lo, hi) = slots.split_at_mut(i);
        hi[0].try_clone_from(&lo[i - 1])?;
    }
    slots[index].try_clone_from(value)
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        testing::{values, Flaky, FlakyError, Switch},
        Error, GrowVec,
    };
    use test_case::test_case;

    #[test_case(&[1, 2, 3], 0, &[9, 1, 2, 3]; "front")]
    #[test_case(&[1, 2, 3], 1, &[1, 9, 2, 3]; "middle")]
    #[test_case(&[1, 2, 3], 2, &[1, 2, 9, 3]; "before last")]
    #[test_case(&[1, 2, 3], 3, &[1, 2, 3, 9]; "end")]
    #[test_case(&[], 0, &[9]; "into empty")]
    fn test_insert_positions(items: &[i32], index: usize, expected: &[i32]) {
        let mut v = GrowVec::try_from(items).unwrap();
        let c = v.insert(index, &9).unwrap();
        assert_eq!(v.as_slice(), expected);
        assert_eq!(c.index(), index);
        assert_eq!(c.get(&v), Ok(&9));
    }

    #[test]
    fn test_insert_past_end_fails() {
        let mut v = GrowVec::try_from(&[1, 2][..]).unwrap();
        assert_eq!(v.insert(3, &9), Err(Error::IndexOutOfBound));
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_insert_at_len_matches_push_back() {
        let mut a = GrowVec::try_from(&[1, 2, 3][..]).unwrap();
        let mut b = GrowVec::try_from(&[1, 2, 3][..]).unwrap();
        a.insert(a.len(), &4).unwrap();
        b.push_back(&4).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.capacity(), b.capacity());
    }

    #[test]
    fn test_insert_then_erase_restores() {
        let mut v = GrowVec::try_from(&[1, 2, 3, 4][..]).unwrap();
        for i in 0..=4 {
            v.insert(i, &0).unwrap();
            v.erase(i).unwrap();
            assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut v = GrowVec::try_from(&[1, 2, 3][..]).unwrap();
        let c = v.begin() + 1;
        v.insert_at(c, &7).unwrap();
        assert_eq!(v.as_slice(), &[1, 7, 2, 3]);
        // `end()` is a valid insertion point.
        v.insert_at(v.cend(), &8).unwrap();
        assert_eq!(v.as_slice(), &[1, 7, 2, 3, 8]);
    }

    #[test]
    fn test_insert_at_rejects_foreign_and_ownerless() {
        let mut v = GrowVec::try_from(&[1][..]).unwrap();
        let other = GrowVec::try_from(&[1][..]).unwrap();
        assert_eq!(v.insert_at(other.begin(), &2), Err(Error::InvalidIterator));
        assert_eq!(v.insert_at(crate::CursorMut::<i32>::default(), &2), Err(Error::InvalidIterator));
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn test_insert_at_past_end_cursor_is_out_of_bound() {
        let mut v = GrowVec::try_from(&[1][..]).unwrap();
        assert_eq!(v.insert_at(v.end() + 1, &2), Err(Error::IndexOutOfBound));
    }

    #[test]
    fn test_copy_failure_during_growth_is_noop() {
        let sw = Switch::new();
        let mut v = GrowVec::new();
        for x in [1, 2] {
            v.push_back(&Flaky::new(x, &sw)).unwrap();
        }
        let item = Flaky::new(9, &sw);
        let live = sw.live();
        sw.fail_after(0);
        assert_eq!(v.insert(0, &item).err(), Some(Error::Element(FlakyError(1))));
        assert_eq!(values(&v), [1, 2]);
        assert_eq!(v.capacity(), 2);
        assert_eq!(sw.live(), live);
    }

    #[test]
    fn test_assignment_failure_during_shift() {
        let sw = Switch::new();
        let mut v = GrowVec::new();
        for x in [1, 2, 3] {
            v.push_back(&Flaky::new(x, &sw)).unwrap();
        }
        assert_eq!(v.capacity(), 4);
        let item = Flaky::new(9, &sw);
        let live = sw.live();

        // Copy of the last element into the raw slot succeeds, then the
        // first assignment (slot 2 <- slot 1) fails.
        sw.fail_after(1);
        assert_eq!(v.insert(0, &item).err(), Some(Error::Element(FlakyError(2))));
        assert_eq!(v.len(), 3);
        assert_eq!(values(&v), [1, 2, 3]);
        // The extra copy in slot 3 was torn down again.
        assert_eq!(sw.live(), live);

        // Let the shift get halfway: slot 2 <- 2 succeeds, slot 1 <- 1 fails.
        sw.fail_after(2);
        assert!(v.insert(0, &item).is_err());
        assert_eq!(v.len(), 3);
        assert_eq!(values(&v), [1, 2, 2]);
        assert_eq!(sw.live(), live);
    }
}
