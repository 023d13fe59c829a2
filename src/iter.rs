// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Borrowed iteration for [`GrowVec`](crate::GrowVec).
//!
//! `&GrowVec` and `&mut GrowVec` iterate as slices. There is no by-value
//! iterator: elements never leave the vector except as copies.

// Crate imports
use crate::vec::GrowVec;

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::GrowVec;
    use alloc::vec::Vec;

    #[test]
    fn test_for_loops() {
        let mut v = GrowVec::try_from(&[1, 2, 3][..]).unwrap();
        for x in &mut v {
            *x += 1;
        }
        let mut seen = Vec::new();
        for x in &v {
            seen.push(*x);
        }
        assert_eq!(seen, [2, 3, 4]);
    }

    #[test]
    fn test_double_ended_and_size_hint() {
        let v = GrowVec::try_from(&[10, 20, 30, 40][..]).unwrap();
        let mut it = (&v).into_iter();
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.next(), Some(&10));
        assert_eq!(it.next_back(), Some(&40));
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn test_empty_iterates_nothing() {
        let v: GrowVec<u8> = GrowVec::new();
        assert_eq!(v.iter().count(), 0);
    }
}
