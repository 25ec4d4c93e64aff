// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits for zeroization.

use crate::sentinel::ZeroizeOnDropSentinel;

/// Runtime check that a value holds no sensitive bytes anymore.
pub trait ZeroizationProbe {
    /// Returns `true` if every byte owned by the value is zero.
    fn is_zeroized(&self) -> bool;
}

/// Compile-time hint on how a type can be wiped.
///
/// `true` means all-zeros is a valid bit pattern and a slice of the type can be
/// cleared with one memset. `false` means each element must be visited.
pub trait ZeroizeMetadata {
    /// Whether a slice of this type can be cleared with a single memset.
    const CAN_BE_BULK_ZEROIZED: bool;
}

/// Types that can overwrite their sensitive contents with zeros in place.
///
/// This trait is dyn-compatible, so managed blocks can hold erased payloads.
pub trait FastZeroizable {
    /// Zeroizes the value in place.
    fn fast_zeroize(&mut self);
}

/// Types that carry a [`ZeroizeOnDropSentinel`] and can prove they wiped
/// themselves on drop.
pub trait AssertZeroizeOnDrop {
    /// Clones the internal sentinel. Clones share state with the original.
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel;

    /// Drops `self` and asserts the sentinel was zeroized along the way.
    ///
    /// # Panics
    ///
    /// Panics if the drop path did not zeroize.
    fn assert_zeroize_on_drop(self);
}
