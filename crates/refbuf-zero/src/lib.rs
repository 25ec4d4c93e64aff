// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Zeroization traits for payloads stored in managed blocks.
//!
//! A managed block wipes its payload before the storage goes back to the
//! allocator. The payload type tells the block how to do that through
//! [`FastZeroizable`], and tests check the outcome through
//! [`ZeroizationProbe`] or a cloned [`ZeroizeOnDropSentinel`].
//!
//! ```rust
//! use refbuf_zero::{FastZeroizable, ZeroizationProbe};
//!
//! let mut key = vec![0x42u8; 32];
//! key.fast_zeroize();
//! assert!(key.is_zeroized());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod assert;
mod collections;
mod primitives;
mod sentinel;
mod traits;

pub use assert::assert_zeroize_on_drop;
pub use sentinel::ZeroizeOnDropSentinel;
pub use traits::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe, ZeroizeMetadata};
