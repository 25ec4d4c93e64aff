// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::CodecError;

// =============================================================================
// code()
// =============================================================================

#[test]
fn test_codes_are_distinct_and_negative() {
    assert_eq!(CodecError::Empty.code(), -1);
    assert_eq!(CodecError::Alloc { size: 4 }.code(), -2);
    assert_eq!(CodecError::Encode.code(), -3);
    assert_eq!(CodecError::Decode.code(), -3);
}
