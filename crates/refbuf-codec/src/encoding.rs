// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use refbuf_buf::{Buf, BufError, Buffer};

use crate::error::CodecError;

/// Encodes the logical payload of `src` as padded standard base64.
///
/// The output capacity is `4 * ceil(n / 3)` and its payload length is the
/// encoded length.
#[track_caller]
pub fn base64_encode<B: Buffer + ?Sized>(src: &B) -> Result<Buf, CodecError> {
    let len = src.payload_size();

    if len == 0 {
        tracing::error!("Can't encode an empty buf");
        return Err(CodecError::Empty);
    }

    let capacity = 4 * len.div_ceil(3);
    let output = Buf::alloc(capacity).map_err(|e| CodecError::from_alloc(capacity, e))?;

    let mut written = 0;
    src.open(&mut |input| {
        output.open_mut(&mut |out| {
            written = STANDARD
                .encode_slice(input, out)
                .map_err(BufError::callback_error)?;
            Ok(())
        })
    })
    .map_err(|e| {
        tracing::error!(error = %e, "Can't encode the given buf");
        CodecError::Encode
    })?;

    output.put(written);

    Ok(output)
}

/// Decodes padded standard base64 from the logical payload of `src`.
///
/// The output capacity is `floor(3n / 4) + 1`; its payload length is the
/// decoded length, which drops one byte per trailing `=`.
#[track_caller]
pub fn base64_decode<B: Buffer + ?Sized>(src: &B) -> Result<Buf, CodecError> {
    let len = src.payload_size();

    if len == 0 {
        tracing::error!("Can't decode an empty buf");
        return Err(CodecError::Empty);
    }

    let capacity = 3 * len / 4 + 1;
    let output = Buf::alloc(capacity).map_err(|e| CodecError::from_alloc(capacity, e))?;

    let mut written = 0;
    src.open(&mut |input| {
        output.open_mut(&mut |out| {
            written = STANDARD
                .decode_slice(input, out)
                .map_err(BufError::callback_error)?;
            Ok(())
        })
    })
    .map_err(|e| {
        tracing::error!(error = %e, "Can't decode the given buf");
        CodecError::Decode
    })?;

    if written == 0 {
        // An unset payload length would expose the whole capacity.
        output.erase();
        return Err(CodecError::Decode);
    }
    output.put(written);

    Ok(output)
}
