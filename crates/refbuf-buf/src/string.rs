// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Ref;
use core::ffi::CStr;

use crate::buf::Buf;
use crate::error::BufError;

/// NUL-terminated view of a buffer, returned by [`Buf::to_str`].
///
/// Holds one reference to the buffer it reads from. A copied view is also
/// linked to its source, so the source lives as long as the view does.
#[derive(Clone, Debug)]
pub struct BufStr {
    buf: Buf,
    borrowed: bool,
}

impl BufStr {
    /// Borrows the text up to (not including) the first NUL byte.
    ///
    /// # Panics
    ///
    /// Panics if the underlying bytes are mutably borrowed.
    pub fn as_c_str(&self) -> Ref<'_, CStr> {
        Ref::map(self.buf.bytes(), |bytes| {
            CStr::from_bytes_until_nul(bytes).unwrap_or_default()
        })
    }

    /// Length of the text in bytes, terminator excluded.
    pub fn len(&self) -> usize {
        self.as_c_str().count_bytes()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the view shares the source buffer's storage.
    pub fn is_borrowed(&self) -> bool {
        self.borrowed
    }

    /// The buffer holding the terminated text.
    pub fn as_buf(&self) -> &Buf {
        &self.buf
    }
}

impl Buf {
    /// Returns a NUL-terminated view of the logical payload.
    ///
    /// When the capacity already ends in a NUL byte and no shorter payload
    /// length is set, the view shares this buffer through a new reference.
    /// Otherwise the payload is copied into a fresh buffer with a terminator
    /// appended, and that buffer is linked back to this one.
    #[track_caller]
    pub fn to_str(&self) -> Result<BufStr, BufError> {
        let capacity = self.capacity();
        let payload_len = self.payload_len();

        let terminated = capacity > 0 && self.try_payload()?.last() == Some(&0);
        if terminated && (payload_len == 0 || payload_len == capacity) {
            return Ok(BufStr {
                buf: self.clone(),
                borrowed: true,
            });
        }

        let len = self.payload_size();
        let copy = Buf::alloc(len + 1)?;
        {
            let payload = self.try_payload()?;
            let mut out = copy.bytes_mut();

            out[..len].copy_from_slice(&payload);
            out[len] = 0;
        }
        copy.put(len + 1);
        copy.link_to(self)?;

        Ok(BufStr {
            buf: copy,
            borrowed: false,
        })
    }
}
