// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Shared flag recording that a value went through its zeroization path.
///
/// The flag starts pristine. [`FastZeroizable::fast_zeroize`] flips it, and
/// every clone observes the flip, so a test can keep a clone, release the
/// owner, and then check the clone.
///
/// Dropping a sentinel does not flip it. Only the owner's wipe path does.
///
/// ```rust
/// use refbuf_zero::{FastZeroizable, ZeroizeOnDropSentinel};
///
/// let mut sentinel = ZeroizeOnDropSentinel::default();
/// let probe = sentinel.clone();
///
/// assert!(!probe.is_zeroized());
/// sentinel.fast_zeroize();
/// assert!(probe.is_zeroized());
/// ```
#[derive(Clone, Debug)]
pub struct ZeroizeOnDropSentinel(Arc<AtomicBool>);

impl ZeroizeOnDropSentinel {
    /// Puts the sentinel back into its pristine state.
    pub fn reset(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once the owner was zeroized.
    pub fn is_zeroized(&self) -> bool {
        !self.0.load(Ordering::Relaxed)
    }
}

impl Default for ZeroizeOnDropSentinel {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl PartialEq for ZeroizeOnDropSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.0.load(Ordering::Relaxed) == other.0.load(Ordering::Relaxed)
    }
}

impl Eq for ZeroizeOnDropSentinel {}

impl ZeroizeMetadata for ZeroizeOnDropSentinel {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl FastZeroizable for ZeroizeOnDropSentinel {
    fn fast_zeroize(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl ZeroizationProbe for ZeroizeOnDropSentinel {
    fn is_zeroized(&self) -> bool {
        ZeroizeOnDropSentinel::is_zeroized(self)
    }
}
