// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use refbuf_kmem::try_alloc_bytes;
use refbuf_util::fast_zeroize_slice;

use crate::buf::Buf;
use crate::error::BufError;

/// Largest formatted text [`Buf::sprintf`] accepts, in bytes.
pub const SPRINTF_LIMIT: usize = 16 * 1024;

/// Fixed scratch region that refuses to grow past its end.
struct Scratch {
    bytes: Box<[u8]>,
    len: usize,
    overflow: bool,
}

impl fmt::Write for Scratch {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();

        if end > self.bytes.len() {
            self.overflow = true;
            return Err(fmt::Error);
        }

        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;

        Ok(())
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        fast_zeroize_slice(&mut self.bytes[..]);
    }
}

impl Buf {
    /// Formats `args` into a new buffer whose payload length is the text
    /// length.
    ///
    /// Text longer than [`SPRINTF_LIMIT`] fails with
    /// [`BufError::FormatOverflow`]. The scratch region is wiped either way.
    /// Usually called through [`buf_sprintf!`](crate::buf_sprintf).
    #[track_caller]
    pub fn sprintf(args: fmt::Arguments<'_>) -> Result<Buf, BufError> {
        let mut scratch = Scratch {
            bytes: try_alloc_bytes(SPRINTF_LIMIT)?,
            len: 0,
            overflow: false,
        };

        if fmt::write(&mut scratch, args).is_err() {
            if scratch.overflow {
                return Err(BufError::FormatOverflow {
                    limit: SPRINTF_LIMIT,
                });
            }
            return Err(BufError::Format);
        }

        Buf::cpy(&scratch.bytes[..scratch.len])
    }
}

/// Formats into a new [`Buf`](crate::Buf), like `format!`.
///
/// Expands to [`Buf::sprintf`](crate::Buf::sprintf) over `format_args!`.
#[macro_export]
macro_rules! buf_sprintf {
    ($($arg:tt)*) => {
        $crate::Buf::sprintf(::core::format_args!($($arg)*))
    };
}
