// This file is part of copy-grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instrumented element types shared by the unit tests.

// Crate imports
use crate::TryClone;

// Alloc imports
use alloc::{rc::Rc, vec::Vec};

// Core imports
use core::cell::{Cell, RefCell};

#[derive(Default)]
struct Shared {
    // `None` means copies always succeed; `Some(n)` lets `n` more succeed.
    budget: Cell<Option<usize>>,
    live: Cell<usize>,
    dropped: RefCell<Vec<i32>>,
}

/// Controls and observes every [`Flaky`] created from it.
#[derive(Clone, Default)]
pub(crate) struct Switch(Rc<Shared>);

impl Switch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Lets `n` more copies succeed, then fails every copy after that.
    pub(crate) fn fail_after(&self, n: usize) {
        self.0.budget.set(Some(n));
    }

    pub(crate) fn disarm(&self) {
        self.0.budget.set(None);
    }

    /// Number of `Flaky` values currently alive.
    pub(crate) fn live(&self) -> usize {
        self.0.live.get()
    }

    /// Values of dropped `Flaky`s in drop order.
    pub(crate) fn dropped(&self) -> Vec<i32> {
        self.0.dropped.borrow().clone()
    }

    pub(crate) fn reset_dropped(&self) {
        self.0.dropped.borrow_mut().clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("copy of {0} failed")]
pub(crate) struct FlakyError(pub(crate) i32);

/// An element whose copies fail once its [`Switch`] runs out of budget.
pub(crate) struct Flaky {
    value: i32,
    shared: Rc<Shared>,
}

impl Flaky {
    pub(crate) fn new(value: i32, switch: &Switch) -> Self {
        let shared = switch.0.clone();
        shared.live.set(shared.live.get() + 1);
        Self { value, shared }
    }

    pub(crate) fn value(&self) -> i32 {
        self.value
    }
}

impl TryClone for Flaky {
    type Error = FlakyError;

    fn try_clone(&self) -> Result<Self, FlakyError> {
        match self.shared.budget.get() {
            Some(0) => return Err(FlakyError(self.value)),
            Some(n) => self.shared.budget.set(Some(n - 1)),
            None => {}
        }
        Ok(Self::new(self.value, &Switch(self.shared.clone())))
    }
}

impl Drop for Flaky {
    fn drop(&mut self) {
        self.shared.live.set(self.shared.live.get() - 1);
        self.shared.dropped.borrow_mut().push(self.value);
    }
}

impl core::fmt::Debug for Flaky {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Flaky").field(&self.value).finish()
    }
}

/// Values held by a vector of `Flaky`, in order.
pub(crate) fn values(v: &crate::GrowVec<Flaky>) -> Vec<i32> {
    v.iter().map(Flaky::value).collect()
}
