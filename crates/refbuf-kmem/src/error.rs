// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for refbuf-kmem.

use refbuf_kref::KrefError;
use thiserror::Error;

/// Errors from managed-block operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum KmemError {
    /// The allocator returned no memory.
    #[error("allocation of {size} bytes failed")]
    Alloc {
        /// Requested size in bytes.
        size: usize,
    },

    /// The block already carries an ownership link.
    #[error("block is already linked")]
    AlreadyLinked,

    /// The link would make the block depend on itself.
    #[error("link would create a cycle")]
    LinkCycle,

    /// The list is being iterated and cannot be modified.
    #[error("list is borrowed by an iterator")]
    ListBorrowed,

    /// A reference-counter operation failed.
    #[error("KrefError: {0}")]
    Kref(#[from] KrefError),
}
