// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Memory helpers shared by the refbuf crates.
//!
//! Everything here works on raw byte regions: bulk zeroization that the
//! optimizer cannot elide, and the matching verification probes used by
//! tests and debug assertions.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;

/// Zeroizes a slice with a single `write_bytes` followed by a volatile read.
///
/// The volatile read keeps the optimizer from treating the memset as a dead
/// store, even when the slice is about to be deallocated.
///
/// # Example
///
/// ```
/// use refbuf_util::fast_zeroize_slice;
///
/// let mut data = [0xAAu8; 16];
/// fast_zeroize_slice(&mut data);
/// assert!(data.iter().all(|&b| b == 0));
/// ```
#[inline(always)]
pub fn fast_zeroize_slice<T>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = core::mem::size_of_val(slice);
    unsafe {
        // SAFETY (PRECONDITIONS ARE MET): the slice is valid for byte_len bytes
        core::ptr::write_bytes(slice.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(slice.as_ptr() as *const u8);
    }
}

/// Zeroizes a `Vec` from index 0 up to its capacity.
///
/// Spare capacity is wiped too, so bytes left behind by `truncate()` or
/// `clear()` do not survive.
///
/// # Example
///
/// ```
/// use refbuf_util::{fast_zeroize_vec, is_vec_fully_zeroized};
///
/// let mut vec = vec![0xFFu8; 64];
/// vec.truncate(8);
///
/// fast_zeroize_vec(&mut vec);
/// assert!(is_vec_fully_zeroized(&vec));
/// ```
#[inline(always)]
pub fn fast_zeroize_vec<T>(vec: &mut Vec<T>) {
    if vec.capacity() == 0 {
        return;
    }

    let byte_len = vec.capacity() * core::mem::size_of::<T>();
    unsafe {
        // SAFETY (PRECONDITIONS ARE MET): the allocation is valid for capacity elements
        core::ptr::write_bytes(vec.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(vec.as_ptr() as *const u8);
    }
}

/// Zeroizes the region between `len` and `capacity` of a `Vec`.
#[inline(always)]
pub fn zeroize_spare_capacity<T>(vec: &mut Vec<T>) {
    let spare = vec.capacity() - vec.len();
    if spare == 0 {
        return;
    }

    let byte_len = spare * core::mem::size_of::<T>();
    unsafe {
        // SAFETY (PRECONDITIONS ARE MET): [len, capacity) lies inside the allocation
        let spare_ptr = vec.as_mut_ptr().add(vec.len()) as *mut u8;
        core::ptr::write_bytes(spare_ptr, 0, byte_len);
        core::ptr::read_volatile(spare_ptr);
    }
}

/// Zeroizes a single primitive with a volatile write.
///
/// Only meant for types where all-zero bytes are a valid value
/// (integers, `bool`, floats, `char`).
#[inline(always)]
pub fn zeroize_primitive<T: Copy>(val: &mut T) {
    unsafe {
        // SAFETY: callers only pass primitives for which all-zeros is valid
        core::ptr::write_volatile(val, core::mem::zeroed());
    }
}

/// Returns `true` if every byte of the slice is zero.
///
/// ```
/// use refbuf_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 4]));
/// assert!(!is_slice_zeroized(&[0u8, 0, 1, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns `true` if the whole allocation of a `Vec<u8>` is zero, spare
/// capacity included.
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    let cap = vec.capacity();
    let base = vec.as_ptr();

    for i in 0..cap {
        // SAFETY: i < capacity, and u8 has no invalid bit patterns
        if unsafe { *base.add(i) } != 0 {
            return false;
        }
    }

    true
}

/// Returns `true` if the bytes between `len` and `capacity` are all zero.
#[inline(never)]
pub fn is_spare_capacity_zeroized<T>(vec: &Vec<T>) -> bool {
    let len_bytes = vec.len() * core::mem::size_of::<T>();
    let cap_bytes = vec.capacity() * core::mem::size_of::<T>();

    if cap_bytes == len_bytes {
        return true;
    }

    unsafe {
        // SAFETY: only bytes of the allocation are read, no T is materialized
        let spare_ptr = vec.as_ptr().cast::<u8>().add(len_bytes);
        core::slice::from_raw_parts(spare_ptr, cap_bytes - len_bytes)
            .iter()
            .all(|&b| b == 0)
    }
}

/// Equality for byte slices whose running time only depends on the length.
///
/// ```
/// use refbuf_util::constant_time_eq;
///
/// assert!(constant_time_eq(b"abcd", b"abcd"));
/// assert!(!constant_time_eq(b"abcd", b"abce"));
/// assert!(!constant_time_eq(b"abc", b"abcd"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Parses a hex string into bytes. Test vectors only.
///
/// # Panics
///
/// Panics on odd length or non-hex characters.
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "odd-length hex string");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}
