// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::KrefError;

/// Outcome of [`Kref::put`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KrefPut {
    /// Other owners remain.
    Alive,
    /// This put dropped the last owner and ran the release callback.
    Released,
}

impl KrefPut {
    /// Returns `true` for [`KrefPut::Released`].
    #[inline]
    pub fn is_released(self) -> bool {
        self == Self::Released
    }
}

/// A non-atomic reference counter.
#[derive(Debug)]
pub struct Kref {
    pub(crate) count: Cell<u32>,
}

impl Kref {
    /// Creates a counter holding one reference.
    #[inline]
    pub const fn new() -> Self {
        Self {
            count: Cell::new(1),
        }
    }

    /// Current number of references. Zero once released.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count.get()
    }

    /// Returns `true` once the count reached zero.
    #[inline]
    pub fn is_released(&self) -> bool {
        self.count.get() == 0
    }

    /// Adds a reference.
    pub fn get(&self) -> Result<(), KrefError> {
        let count = self.count.get();

        if count == 0 {
            return Err(KrefError::Released);
        }

        let next = count.checked_add(1).ok_or(KrefError::Overflow)?;
        self.count.set(next);

        Ok(())
    }

    /// Drops a reference, running `release` if it was the last one.
    ///
    /// `release` is consumed even when other owners remain; it only runs on
    /// the transition to zero.
    pub fn put<F: FnOnce()>(&self, release: F) -> Result<KrefPut, KrefError> {
        let count = self.count.get();

        if count == 0 {
            return Err(KrefError::Released);
        }

        self.count.set(count - 1);

        if count > 1 {
            return Ok(KrefPut::Alive);
        }

        release();

        Ok(KrefPut::Released)
    }
}

impl Default for Kref {
    fn default() -> Self {
        Self::new()
    }
}
