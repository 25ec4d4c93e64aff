// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test helper for drop-time zeroization.

use crate::traits::AssertZeroizeOnDrop;

/// Drops `value` and asserts its sentinel was zeroized on the way out.
///
/// # Panics
///
/// Panics if the drop path of `value` never zeroized it.
pub fn assert_zeroize_on_drop<T: AssertZeroizeOnDrop>(value: T) {
    let mut sentinel = value.clone_sentinel();

    sentinel.reset();

    assert!(!sentinel.is_zeroized());
    drop(value);
    assert!(sentinel.is_zeroized());
}
