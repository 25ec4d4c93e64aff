// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Implementations for slices, arrays, `Vec<T>` and `Box<[T]>`.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Wipes a slice either with one memset (`fast`) or element by element.
#[inline(always)]
pub(crate) fn slice_fast_zeroize<T: FastZeroizable>(slice: &mut [T], fast: bool) {
    if fast {
        refbuf_util::fast_zeroize_slice(slice);
        compiler_fence(Ordering::SeqCst);
    } else {
        for elem in slice.iter_mut() {
            elem.fast_zeroize();
            compiler_fence(Ordering::SeqCst);
        }
    }
}

// === === === === === === === === === ===
// [T] - slices
// === === === === === === === === === ===

impl<T> FastZeroizable for [T]
where
    T: FastZeroizable + ZeroizeMetadata,
{
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for [T] {
    fn is_zeroized(&self) -> bool {
        self.iter().all(ZeroizationProbe::is_zeroized)
    }
}

// === === === === === === === === === ===
// [T; N] - arrays
// === === === === === === === === === ===

impl<T: ZeroizeMetadata, const N: usize> ZeroizeMetadata for [T; N] {
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T: FastZeroizable + ZeroizeMetadata, const N: usize> FastZeroizable for [T; N] {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T: ZeroizationProbe, const N: usize> ZeroizationProbe for [T; N] {
    fn is_zeroized(&self) -> bool {
        self.as_slice().is_zeroized()
    }
}

// === === === === === === === === === ===
// Vec<T>
// === === === === === === === === === ===

impl<T> ZeroizeMetadata for Vec<T> {
    // ptr/len/capacity are never all-zero-valid
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: FastZeroizable + ZeroizeMetadata> FastZeroizable for Vec<T> {
    fn fast_zeroize(&mut self) {
        if T::CAN_BE_BULK_ZEROIZED {
            refbuf_util::fast_zeroize_vec(self);
            compiler_fence(Ordering::SeqCst);
        } else {
            slice_fast_zeroize(self, false);
            refbuf_util::zeroize_spare_capacity(self);
            compiler_fence(Ordering::SeqCst);
        }
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for Vec<T> {
    /// Elements and spare capacity must both be zero.
    fn is_zeroized(&self) -> bool {
        self.as_slice().is_zeroized() && refbuf_util::is_spare_capacity_zeroized(self)
    }
}

// === === === === === === === === === ===
// Box<[T]>
// === === === === === === === === === ===

impl<T> ZeroizeMetadata for Box<[T]> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: FastZeroizable + ZeroizeMetadata> FastZeroizable for Box<[T]> {
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for Box<[T]> {
    fn is_zeroized(&self) -> bool {
        (**self).is_zeroized()
    }
}
