// SPDX-License-Identifier: Unlicense

//! Mutual exclusion for statics.

use spin::{Mutex, MutexGuard};

/// A value behind a spin lock.
pub struct Locked<A> {
    inner: Mutex<A>,
}

impl<A> Locked<A> {
    /// Wrap a value.
    pub const fn new(inner: A) -> Self {
        Locked {
            inner: Mutex::new(inner),
        }
    }

    /// Take the lock, spinning until it is free.
    pub fn lock(&self) -> MutexGuard<A> {
        self.inner.lock()
    }
}
