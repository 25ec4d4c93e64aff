// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Reference-counted byte buffers that wipe themselves on release.</em></p>
//!
//! ---
//!
//! refbuf is a small family of crates for handling sensitive byte data with
//! explicit, counted ownership:
//!
//! - **kref**: a non-atomic reference counter with a release hook.
//! - **kmem**: managed blocks (`Kmem<T>`) with a destructor, wipe-on-free and
//!   an optional ownership link that keeps a source block alive.
//! - **buf**: `Buf`, a fixed-capacity byte buffer with a payload length, plus
//!   split / trim / concatenate / format / hex-dump / file loading.
//! - **codec** (default feature): base64 and chained SHA-256 over buffers.
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! refbuf = "0.1.0-rc.1"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use refbuf::prelude::*;
//!
//! fn main() -> Result<(), BufError> {
//!     let header = Buf::strdub("Authorization: Bearer s3cr3t")?;
//!
//!     let parts = header.split(b':')?;
//!     let token = parts.last().ok_or(BufError::EmptyOperand)?.trim()?;
//!     assert_eq!(&*token.payload(), b"Bearer s3cr3t");
//!
//!     // `parts` and `header` are wiped here; `token` lives on.
//!     drop(parts);
//!     drop(header);
//!
//!     let line = buf_sprintf!("token={}", token.payload().len())?;
//!     assert_eq!(&*line.payload(), b"token=13");
//!     Ok(())
//! }
//! ```
//!
//! # Ownership
//!
//! Every handle is one counted reference. `clone()` takes another; dropping
//! the handle puts it. When the count reaches zero the block's destructor
//! runs, its payload is zeroized and its storage freed, and only then is a
//! linked source released.
//!
//! ```rust
//! use refbuf::prelude::*;
//!
//! fn main() -> Result<(), BufError> {
//!     let raw = Buf::strdub("no terminator")?;
//!
//!     // The copy carries a NUL and keeps `raw` alive through its link.
//!     let c_view = raw.to_str()?;
//!     drop(raw);
//!     assert_eq!(c_view.as_c_str().to_bytes(), b"no terminator");
//!     Ok(())
//! }
//! ```
//!
//! Handles are `!Send` and `!Sync`.
//!
//! # Testing allocation failures
//!
//! With the `test-utils` feature, [`support::test_utils`] exposes per-thread
//! failure injection for every allocation made through the managed allocator.

pub mod prelude;
pub mod support;

#[cfg(test)]
mod tests;

pub use refbuf_buf as buf;
#[cfg(feature = "codec")]
pub use refbuf_codec as codec;
pub use refbuf_kmem as kmem;
pub use refbuf_kref as kref;
pub use refbuf_util as util;
pub use refbuf_zero as zero;
