// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::collections::slice_fast_zeroize;
use crate::sentinel::ZeroizeOnDropSentinel;
use crate::traits::{FastZeroizable, ZeroizationProbe};

#[test]
fn test_slice_bulk_and_elementwise_paths_agree() {
    let mut bulk = [0xAAu8; 64];
    let mut slow = [0xAAu8; 64];

    slice_fast_zeroize(&mut bulk, true);
    slice_fast_zeroize(&mut slow, false);

    assert!(bulk.is_zeroized());
    assert!(slow.is_zeroized());
}

#[test]
fn test_vec_of_bytes_wipes_spare_capacity() {
    let mut vec = vec![0xEEu8; 128];
    vec.truncate(3);

    vec.fast_zeroize();

    assert!(vec.is_zeroized());
    assert!(refbuf_util::is_vec_fully_zeroized(&vec));
}

#[test]
fn test_vec_of_complex_elements() {
    let probes: Vec<ZeroizeOnDropSentinel> = (0..4).map(|_| ZeroizeOnDropSentinel::default()).collect();
    let mut vec = probes.clone();

    vec.fast_zeroize();

    assert!(probes.iter().all(|p| p.is_zeroized()));
}

#[test]
fn test_boxed_slice() {
    let mut boxed: Box<[u8]> = vec![1u8, 2, 3, 4].into_boxed_slice();
    assert!(!boxed.is_zeroized());

    boxed.fast_zeroize();

    assert!(boxed.is_zeroized());
    assert_eq!(boxed.len(), 4);
}

#[test]
fn test_array() {
    let mut arr = [7u32; 5];
    arr.fast_zeroize();
    assert_eq!(arr, [0; 5]);
}
