// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::panic::Location;

use crate::error::KmemError;

/// Allocates `len` zeroed bytes, reporting failure instead of aborting.
///
/// Byte regions that live inside managed payloads go through here so that
/// an exhausted allocator surfaces as [`KmemError::Alloc`], logged with the
/// caller's location.
#[track_caller]
pub fn try_alloc_bytes(len: usize) -> Result<Box<[u8]>, KmemError> {
    let location = Location::caller();

    #[cfg(any(test, feature = "test-utils"))]
    if crate::behaviour::take_alloc_failure() {
        tracing::error!(size = len, location = %location, "Can't allocate byte region");
        return Err(KmemError::Alloc { size: len });
    }

    let mut bytes = Vec::new();

    if bytes.try_reserve_exact(len).is_err() {
        tracing::error!(size = len, location = %location, "Can't allocate byte region");
        return Err(KmemError::Alloc { size: len });
    }

    bytes.resize(len, 0u8);

    Ok(bytes.into_boxed_slice())
}
