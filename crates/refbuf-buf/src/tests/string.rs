// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use refbuf_kmem::{KmemBehaviour, change_behaviour, live_blocks};
use refbuf_zero::AssertZeroizeOnDrop;

use crate::{Buf, BufError};

// =============================================================================
// to_str()
// =============================================================================

#[test]
fn test_to_str_terminated_buffer_is_shared() {
    let buf = Buf::cpy(b"abc\0").expect("Failed to cpy()");

    let s = buf.to_str().expect("Failed to to_str()");

    assert!(s.is_borrowed());
    assert!(Buf::ptr_eq(s.as_buf(), &buf));
    assert_eq!(buf.ref_count(), 2);
    assert_eq!(&*s.as_c_str(), c"abc");
    assert_eq!(s.len(), 3);
}

#[test]
fn test_to_str_unterminated_buffer_is_copied_and_linked() {
    let buf = Buf::strdub("abc").expect("Failed to strdub()");

    let s = buf.to_str().expect("Failed to to_str()");

    assert!(!s.is_borrowed());
    assert!(s.as_buf().is_linked());
    assert_eq!(s.as_buf().capacity(), 4);
    assert_eq!(&*s.as_c_str(), c"abc");
    // The copy holds a reference on its source.
    assert_eq!(buf.ref_count(), 2);
}

#[test]
fn test_to_str_copy_keeps_source_until_released() {
    let before = live_blocks();
    let buf = Buf::strdub("abc").expect("Failed to strdub()");
    let sentinel = buf.clone_sentinel();

    let s = buf.to_str().expect("Failed to to_str()");
    drop(buf);

    assert!(!sentinel.is_zeroized());
    assert_eq!(&*s.as_c_str(), c"abc");

    drop(s);
    assert!(sentinel.is_zeroized());
    assert_eq!(live_blocks(), before);
}

#[test]
fn test_to_str_shorter_payload_is_copied() {
    let buf = Buf::cpy(b"abc\0").expect("Failed to cpy()");
    buf.put(2);

    let s = buf.to_str().expect("Failed to to_str()");

    assert!(!s.is_borrowed());
    assert_eq!(&*s.as_c_str(), c"ab");
}

#[test]
fn test_to_str_stops_at_interior_nul() {
    let buf = Buf::cpy(b"ab\0cd").expect("Failed to cpy()");

    let s = buf.to_str().expect("Failed to to_str()");

    assert_eq!(&*s.as_c_str(), c"ab");
}

#[test]
fn test_to_str_zero_capacity() {
    let buf = Buf::alloc(0).expect("Failed to alloc()");

    let s = buf.to_str().expect("Failed to to_str()");

    assert!(!s.is_borrowed());
    assert!(s.is_empty());
}

#[test]
fn test_to_str_alloc_failure() {
    let before = live_blocks();
    let buf = Buf::strdub("abc").expect("Failed to strdub()");

    change_behaviour(KmemBehaviour::FailAtAlloc(0));
    let result = buf.to_str();

    assert!(matches!(result, Err(BufError::Alloc { .. })));
    assert_eq!(buf.ref_count(), 1);
    drop(buf);
    assert_eq!(live_blocks(), before);
}
