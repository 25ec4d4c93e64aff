// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for refbuf-kref.

use thiserror::Error;

/// Errors from counter operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum KrefError {
    /// The counter already reached zero and its release callback ran.
    #[error("reference counter already released")]
    Released,

    /// Taking another reference would overflow the counter.
    #[error("reference counter overflow")]
    Overflow,
}
