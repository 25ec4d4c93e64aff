// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::BufError;

/// Narrow accessor surface for code that consumes or fills buffers.
pub trait Buffer: core::fmt::Debug {
    /// Opens the logical payload for read-only access.
    fn open(&self, f: &mut dyn FnMut(&[u8]) -> Result<(), BufError>) -> Result<(), BufError>;

    /// Opens the whole capacity for mutable access.
    fn open_mut(
        &self,
        f: &mut dyn FnMut(&mut [u8]) -> Result<(), BufError>,
    ) -> Result<(), BufError>;

    /// Fixed storage size in bytes.
    fn capacity(&self) -> usize;

    /// Logical size: payload length if set, capacity otherwise.
    fn payload_size(&self) -> usize;

    /// Returns `true` if the logical view is empty.
    fn is_empty(&self) -> bool {
        self.payload_size() == 0
    }
}
