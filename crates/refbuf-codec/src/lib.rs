// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Encoders and digests over [`refbuf_buf`] buffers.
//!
//! Every function reads the logical payload of its input through the
//! [`Buffer`](refbuf_buf::Buffer) accessor surface and returns a fresh
//! [`Buf`](refbuf_buf::Buf), so results inherit wipe-on-free.
//!
//! ```rust
//! use refbuf_buf::Buf;
//! use refbuf_codec::{CodecError, base64_decode, base64_encode};
//!
//! fn example() -> Result<(), CodecError> {
//!     let plain = Buf::strdub("foobar").map_err(|_| CodecError::Alloc { size: 6 })?;
//!
//!     let encoded = base64_encode(&plain)?;
//!     assert_eq!(&*encoded.payload(), b"Zm9vYmFy");
//!
//!     let decoded = base64_decode(&encoded)?;
//!     assert_eq!(decoded, plain);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod encoding;
mod error;
mod sha256;

pub use encoding::{base64_decode, base64_encode};
pub use error::CodecError;
pub use sha256::{SHA256_BLOCK, sha256_xof};
