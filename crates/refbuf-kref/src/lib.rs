// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Reference counter with a release callback.
//!
//! [`Kref`] is the counting primitive underneath every managed block. It
//! starts at one, `get` adds an owner, and `put` drops one. The put that
//! reaches zero runs the release callback, and only that put.
//!
//! The counter is a plain `Cell`, so `Kref` is `!Sync`. Sharing a counter
//! between threads needs a lock around it first.
//!
//! ```rust
//! use refbuf_kref::{Kref, KrefError, KrefPut};
//!
//! fn example() -> Result<(), KrefError> {
//!     let kref = Kref::new();
//!     let mut released = 0;
//!
//!     kref.get()?;
//!     assert_eq!(kref.put(|| released += 1)?, KrefPut::Alive);
//!     assert_eq!(kref.put(|| released += 1)?, KrefPut::Released);
//!     assert_eq!(released, 1);
//!
//!     // A released counter refuses further use.
//!     assert_eq!(kref.get(), Err(KrefError::Released));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod kref;

pub use error::KrefError;
pub use kref::{Kref, KrefPut};
