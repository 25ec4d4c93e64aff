// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities re-exported from refbuf-kmem

#[cfg(any(test, feature = "test-utils"))]
pub use refbuf_kmem::{KmemBehaviour, change_behaviour, live_blocks};
