// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::buf::Buf;
use crate::error::BufError;

/// C-locale `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub(crate) fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

impl Buf {
    /// Returns a copy of the logical payload without leading and trailing
    /// whitespace.
    ///
    /// A zero-capacity buffer comes back as a new reference to itself. An
    /// all-whitespace payload yields a zero-capacity buffer. The result does
    /// not keep `self` alive.
    #[track_caller]
    pub fn trim(&self) -> Result<Buf, BufError> {
        if self.capacity() == 0 {
            return Ok(self.clone());
        }

        let payload = self.try_payload()?;

        let Some(start) = payload.iter().position(|&b| !is_c_space(b)) else {
            return Buf::alloc(0);
        };
        let end = payload
            .iter()
            .rposition(|&b| !is_c_space(b))
            .map_or(start, |last| last + 1);

        Buf::cpy(&payload[start..end])
    }
}
