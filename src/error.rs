// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowVec`.
//!
//! Four container kinds cover positions, emptiness, cursors and storage.
//! A fifth variant carries a failure raised by the element type's own copy
//! (`TryClone`) unchanged. Operations that never copy elements use the
//! default parameter `Error<Infallible>`.

// Core imports
use core::convert::Infallible;

/// Errors returned by operations on [`GrowVec`](crate::GrowVec) and its cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error<E = Infallible> {
    /// A position argument lies outside the permitted range.
    #[error("index out of bound")]
    IndexOutOfBound,
    /// The operation needs at least one element.
    #[error("container is empty")]
    ContainerEmpty,
    /// A cursor has no owner, belongs to another sequence, or its index is
    /// not valid for the requested operation.
    #[error("invalid iterator")]
    InvalidIterator,
    /// Raw storage could not be obtained.
    #[error("allocation failed")]
    AllocationFailed,
    /// Copying an element failed; the element's error is passed through as is.
    #[error("element copy failed: {0}")]
    Element(E),
}

impl Error<Infallible> {
    /// Lifts a container-only error into an error that may also carry an
    /// element failure.
    #[inline]
    pub fn widen<E>(self) -> Error<E> {
        match self {
            Self::IndexOutOfBound => Error::IndexOutOfBound,
            Self::ContainerEmpty => Error::ContainerEmpty,
            Self::InvalidIterator => Error::InvalidIterator,
            Self::AllocationFailed => Error::AllocationFailed,
            Self::Element(never) => match never {},
        }
    }
}

impl<E> Error<E> {
    /// Returns the element failure, if this is one.
    #[inline]
    pub fn into_element(self) -> Option<E> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }
}
