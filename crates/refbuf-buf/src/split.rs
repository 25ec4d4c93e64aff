// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::panic::Location;

use refbuf_kmem::{Kmem, List};

use crate::buf::Buf;
use crate::error::BufError;

/// A managed list of buffers.
pub type BufList = Kmem<List<Buf>>;

impl Buf {
    /// Splits the logical payload on every `sep` byte.
    ///
    /// Each token is copied into its own buffer. Runs of separators yield no
    /// empty tokens and a trailing token without a separator is kept. On
    /// failure every token built so far is released (and wiped).
    #[track_caller]
    pub fn split(&self, sep: u8) -> Result<BufList, BufError> {
        let location = Location::caller();
        let list = List::create()?;

        let payload = self.try_payload()?;
        for token in payload.split(|&b| b == sep).filter(|t| !t.is_empty()) {
            let part = Buf::cpy(token).inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    tokens = list.count(),
                    location = %location,
                    "Can't split buffer, releasing partial tokens"
                );
            })?;
            list.append(part)?;
        }

        Ok(list)
    }
}
