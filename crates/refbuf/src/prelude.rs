// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Common imports.

pub use refbuf_buf::{
    Buf, BufError, BufList, BufStr, Buffer, FILE_SIZE_LIMIT, SPRINTF_LIMIT, buf_sprintf, list_dump,
};
#[cfg(feature = "codec")]
pub use refbuf_codec::{CodecError, SHA256_BLOCK, base64_decode, base64_encode, sha256_xof};
pub use refbuf_kmem::{Kmem, KmemError, KrefPut, List, kmem_deref, kmem_link, kmem_ref};
pub use refbuf_kref::{Kref, KrefError};
pub use refbuf_zero::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe};
