// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use refbuf_buf::{Buf, Buffer};
use refbuf_util::fast_zeroize_slice;
use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha256};

use crate::error::CodecError;

/// Size of one SHA-256 output block in bytes.
pub const SHA256_BLOCK: usize = 32;

/// Stretches the logical payload of `src` into `out_len` bytes.
///
/// The first block is the SHA-256 digest of the payload; each following
/// block is the digest of the block before it. The last block is truncated
/// to fit. Intermediate digests are wiped.
#[track_caller]
pub fn sha256_xof<B: Buffer + ?Sized>(src: &B, out_len: usize) -> Result<Buf, CodecError> {
    let output = Buf::alloc(out_len).map_err(|e| CodecError::from_alloc(out_len, e))?;

    let mut block = [0u8; SHA256_BLOCK];
    let mut hasher = Sha256::new();

    src.open(&mut |input| {
        hasher.update(input);
        Ok(())
    })
    .map_err(|e| {
        tracing::error!(error = %e, "Can't read the given buf");
        CodecError::Encode
    })?;

    let mut written = 0;
    let mut result = Ok(());

    while written < out_len {
        hasher.finalize_into_reset(GenericArray::from_mut_slice(&mut block));

        let part = (out_len - written).min(SHA256_BLOCK);
        result = output.open_mut(&mut |out| {
            out[written..written + part].copy_from_slice(&block[..part]);
            Ok(())
        });
        if result.is_err() {
            break;
        }
        written += part;

        if written < out_len {
            hasher.update(block);
        }
    }

    fast_zeroize_slice(&mut block);

    result.map_err(|e| {
        tracing::error!(error = %e, "Can't write digest output");
        CodecError::Encode
    })?;
    output.put(out_len);

    Ok(output)
}
