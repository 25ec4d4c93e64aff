// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Reference-counted managed blocks with ownership links.
//!
//! A [`Kmem<T>`] handle points at a single allocation laid out as a fixed
//! header (reference counter, destructor, optional link) followed by the
//! payload `T`. Every handle is one reference:
//!
//! - cloning a handle takes a reference,
//! - dropping a handle, or passing its slot to [`Kmem::release`], puts one.
//!
//! When the last reference goes away the block runs its destructor, wipes the
//! payload with [`FastZeroizable`](refbuf_zero::FastZeroizable), frees the
//! storage and finally releases the block it is linked to, if any.
//!
//! # Example: Links
//!
//! ```rust
//! use refbuf_kmem::{Kmem, KmemError};
//!
//! fn example() -> Result<(), KmemError> {
//!     let source = Kmem::alloc(vec![1u8, 2, 3], None)?;
//!     let derived = Kmem::alloc(vec![1u8, 2, 3, 0], None)?;
//!
//!     derived.link_to(&source)?;
//!     assert_eq!(source.ref_count(), 2);
//!
//!     // Releasing the derived block also releases its hold on the source.
//!     drop(derived);
//!     assert_eq!(source.ref_count(), 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Explicit release
//!
//! ```rust
//! use refbuf_kmem::{Kmem, KmemError};
//!
//! fn example() -> Result<(), KmemError> {
//!     let mut slot = Some(Kmem::alloc(7u64, None)?);
//!
//!     assert!(Kmem::release(&mut slot).is_released());
//!     // The caller's handle is gone; a second release is a no-op.
//!     assert!(slot.is_none());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Handles are `!Send` and `!Sync`: the counter is not atomic.

#![cfg_attr(not(any(test, feature = "test-utils")), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

#[cfg(any(test, feature = "test-utils"))]
mod behaviour;

mod bytes;
mod error;
mod kmem;
mod link;
mod list;

pub use bytes::try_alloc_bytes;
pub use error::KmemError;
pub use kmem::{Destructor, Kmem, kmem_deref, kmem_link, kmem_ref};
pub use list::{List, ListIter};
pub use refbuf_kref::KrefPut;

#[cfg(any(test, feature = "test-utils"))]
pub use behaviour::{KmemBehaviour, change_behaviour, live_blocks};
