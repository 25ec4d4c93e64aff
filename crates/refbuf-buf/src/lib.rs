// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Reference-counted byte buffers.
//!
//! A [`Buf`] is a handle to a managed block holding a fixed-capacity byte
//! region plus a payload length. The payload length marks how much of the
//! region is meaningful; when it is zero the whole capacity is. Use
//! [`Buf::payload_size`] (the logical view) rather than [`Buf::capacity`]
//! whenever the two can differ.
//!
//! Cloning a `Buf` takes a reference to the same block. When the last
//! reference goes away the bytes are wiped before the storage is freed.
//!
//! # Example
//!
//! ```rust
//! use refbuf_buf::{Buf, BufError};
//!
//! fn example() -> Result<(), BufError> {
//!     let line = Buf::strdub("  user=alice,role=admin  ")?;
//!
//!     let trimmed = line.trim()?;
//!     let fields = trimmed.split(b',')?;
//!     assert_eq!(fields.count(), 2);
//!
//!     let first = fields.first().ok_or(BufError::EmptyOperand)?;
//!     assert_eq!(&*first.payload(), b"user=alice");
//!
//!     // Releasing the list releases the tokens it holds, except `first`,
//!     // which we kept a reference to.
//!     drop(fields);
//!     assert_eq!(first.ref_count(), 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Formatting
//!
//! ```rust
//! use refbuf_buf::{buf_sprintf, BufError};
//!
//! fn example() -> Result<(), BufError> {
//!     let msg = buf_sprintf!("{}:{}", "port", 8080)?;
//!     assert_eq!(&*msg.payload(), b"port:8080");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod buf;
mod dump;
mod error;
mod file;
mod format;
mod split;
mod string;
mod traits;
mod trim;

pub use buf::Buf;
pub use dump::{HexDump, ListDump, list_dump};
pub use error::BufError;
pub use file::FILE_SIZE_LIMIT;
pub use format::SPRINTF_LIMIT;
pub use split::BufList;
pub use string::BufStr;
pub use traits::Buffer;
