// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for refbuf-codec.

use refbuf_buf::BufError;
use thiserror::Error;

/// Errors from codec operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum CodecError {
    /// The input has no logical payload.
    #[error("input is empty")]
    Empty,

    /// The output buffer could not be allocated.
    #[error("can't allocate {size} bytes")]
    Alloc {
        /// Requested output capacity.
        size: usize,
    },

    /// The encoder rejected the input.
    #[error("can't encode input")]
    Encode,

    /// The input is not valid padded base64.
    #[error("can't decode input")]
    Decode,
}

impl CodecError {
    /// Negative status code for callers that report plain integers.
    pub fn code(&self) -> i32 {
        match self {
            Self::Empty => -1,
            Self::Alloc { .. } => -2,
            Self::Encode | Self::Decode => -3,
        }
    }

    /// Maps a failed output allocation of `size` bytes.
    pub(crate) fn from_alloc(size: usize, e: BufError) -> Self {
        tracing::error!(size, error = %e, "Can't allocate output buffer");
        Self::Alloc { size }
    }
}
