// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{KmemBehaviour, KmemError, change_behaviour, try_alloc_bytes};

// =============================================================================
// try_alloc_bytes()
// =============================================================================

#[test]
fn test_try_alloc_bytes_is_zeroed() {
    let bytes = try_alloc_bytes(300).expect("Failed to try_alloc_bytes()");

    assert_eq!(bytes.len(), 300);
    assert!(refbuf_util::is_slice_zeroized(&bytes));
}

#[test]
fn test_try_alloc_bytes_empty() {
    let bytes = try_alloc_bytes(0).expect("Failed to try_alloc_bytes()");

    assert!(bytes.is_empty());
}

#[test]
fn test_try_alloc_bytes_injected_failure() {
    change_behaviour(KmemBehaviour::FailAtAlloc(0));

    assert_eq!(try_alloc_bytes(8), Err(KmemError::Alloc { size: 8 }));
    assert!(try_alloc_bytes(8).is_ok());
}

#[test]
fn test_try_alloc_bytes_impossible_size() {
    let result = try_alloc_bytes(usize::MAX);

    assert_eq!(result, Err(KmemError::Alloc { size: usize::MAX }));
}
