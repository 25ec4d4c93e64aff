// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Implementations for scalars and single-value cells.

use core::cell::{Cell, RefCell};

use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ZeroizeMetadata for $ty {
                const CAN_BE_BULK_ZEROIZED: bool = true;
            }

            impl FastZeroizable for $ty {
                #[inline(always)]
                fn fast_zeroize(&mut self) {
                    refbuf_util::zeroize_primitive(self);
                }
            }

            impl ZeroizationProbe for $ty {
                #[inline(always)]
                fn is_zeroized(&self) -> bool {
                    *self == <$ty>::default()
                }
            }
        )*
    };
}

impl_scalar!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool);

impl<T> ZeroizeMetadata for Cell<T>
where
    T: Copy + ZeroizeMetadata,
{
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T> FastZeroizable for Cell<T>
where
    T: Copy + FastZeroizable,
{
    fn fast_zeroize(&mut self) {
        self.get_mut().fast_zeroize();
    }
}

impl<T> ZeroizationProbe for Cell<T>
where
    T: Copy + ZeroizationProbe,
{
    fn is_zeroized(&self) -> bool {
        self.get().is_zeroized()
    }
}

impl<T: ?Sized + FastZeroizable> FastZeroizable for RefCell<T> {
    fn fast_zeroize(&mut self) {
        self.get_mut().fast_zeroize();
    }
}

impl<T: ?Sized + ZeroizationProbe> ZeroizationProbe for RefCell<T> {
    /// A cell that is mutably borrowed elsewhere reports `false`.
    fn is_zeroized(&self) -> bool {
        match self.try_borrow() {
            Ok(inner) => inner.is_zeroized(),
            Err(_) => false,
        }
    }
}

impl<T: FastZeroizable> FastZeroizable for Option<T> {
    fn fast_zeroize(&mut self) {
        if let Some(inner) = self.as_mut() {
            inner.fast_zeroize();
        }
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for Option<T> {
    fn is_zeroized(&self) -> bool {
        self.as_ref().is_none_or(|inner| inner.is_zeroized())
    }
}
