// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::buf::Buf;
use crate::error::BufError;

/// Largest file [`Buf::file_get_contents`] loads, in bytes.
pub const FILE_SIZE_LIMIT: u64 = 1024 * 1024;

impl Buf {
    /// Loads the whole file at `path` into a new buffer.
    ///
    /// The payload length is the file size. Empty files and files larger
    /// than [`FILE_SIZE_LIMIT`] are refused. Every failure is logged.
    #[track_caller]
    pub fn file_get_contents<P: AsRef<Path>>(path: P) -> Result<Buf, BufError> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "Can't open file");
            BufError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let size = file.metadata().map(|m| m.len()).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "Can't get file size");
            BufError::Metadata {
                path: path.to_path_buf(),
                source,
            }
        })?;

        if size == 0 {
            tracing::error!(path = %path.display(), "File is empty");
            return Err(BufError::Empty {
                path: path.to_path_buf(),
            });
        }

        if size > FILE_SIZE_LIMIT {
            tracing::error!(
                path = %path.display(),
                size,
                limit = FILE_SIZE_LIMIT,
                "File is too large"
            );
            return Err(BufError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit: FILE_SIZE_LIMIT,
            });
        }

        // Bounded by FILE_SIZE_LIMIT above.
        let len = size as usize;
        let buf = Buf::alloc(len)?;

        file.read_exact(&mut buf.bytes_mut()).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "Can't read file");
            BufError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        buf.put(len);

        Ok(buf)
    }
}
