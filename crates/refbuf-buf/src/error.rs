// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for refbuf-buf.

use std::io;
use std::path::PathBuf;

use refbuf_kmem::KmemError;
use thiserror::Error;

/// Errors from buffer operations.
#[derive(Debug, Error)]
pub enum BufError {
    /// Storage for a buffer or one of its derived values could not be
    /// obtained.
    #[error("can't allocate {size} bytes")]
    Alloc {
        /// Requested size in bytes.
        size: usize,
    },

    /// A managed-block operation other than allocation failed.
    #[error("KmemError: {0}")]
    Kmem(KmemError),

    /// A strict payload update asked for more than the capacity.
    #[error("payload length {len} exceeds capacity {capacity}")]
    PayloadOutOfRange {
        /// Requested payload length.
        len: usize,
        /// Capacity of the buffer.
        capacity: usize,
    },

    /// An operand had no logical content.
    #[error("operand has no payload")]
    EmptyOperand,

    /// Formatted output did not fit the scratch region.
    #[error("formatted output exceeds {limit} bytes")]
    FormatOverflow {
        /// Maximum formatted length in bytes.
        limit: usize,
    },

    /// A `Display` implementation reported an error.
    #[error("formatting failed")]
    Format,

    /// The bytes are mutably borrowed elsewhere.
    #[error("buffer bytes are already borrowed")]
    Borrowed,

    /// An error occurred in a callback passed to `open`/`open_mut`.
    #[error("callback error: {0:?}")]
    CallbackError(Box<dyn core::fmt::Debug + 'static>),

    /// The file could not be opened.
    #[error("can't open {}", .path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file size could not be determined.
    #[error("can't query size of {}", .path.display())]
    Metadata {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is empty.
    #[error("{} is empty", .path.display())]
    Empty {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The file exceeds the loader ceiling.
    #[error("{} is {size} bytes, limit is {limit}", .path.display())]
    TooLarge {
        /// Path that was requested.
        path: PathBuf,
        /// Size reported for the file.
        size: u64,
        /// Loader ceiling.
        limit: u64,
    },

    /// Reading the file contents failed.
    #[error("can't read {}", .path.display())]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl BufError {
    /// Creates a `CallbackError` from any `Debug` error.
    pub fn callback_error<E: core::fmt::Debug + 'static>(e: E) -> Self {
        Self::CallbackError(Box::new(e))
    }

    /// Returns `true` if the error is an allocation failure.
    pub fn is_alloc(&self) -> bool {
        matches!(self, Self::Alloc { .. })
    }
}

impl From<KmemError> for BufError {
    fn from(e: KmemError) -> Self {
        match e {
            KmemError::Alloc { size } => Self::Alloc { size },
            other => Self::Kmem(other),
        }
    }
}
