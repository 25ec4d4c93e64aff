// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hex dumps of buffers and buffer lists.
//!
//! ```text
//! buf: greeting, len: 5
//! 0000 - 68 65 6c 6c 6f                           :                         | hello
//! ```

use core::fmt;

use refbuf_kmem::List;

use crate::buf::Buf;

const ROW: usize = 16;
const GROUP: usize = 8;

/// `Display` adapter returned by [`Buf::hex_dump`].
pub struct HexDump<'a> {
    buf: &'a Buf,
    name: &'a str,
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(bytes) = self.buf.inner.data.try_borrow() else {
            return writeln!(f, "buf: {}, len: {} (borrowed)", self.name, self.buf.capacity());
        };

        writeln!(f, "buf: {}, len: {}", self.name, bytes.len())?;

        for (row, chunk) in bytes.chunks(ROW).enumerate() {
            write!(f, "{:04x} - ", row * ROW)?;

            for col in 0..ROW {
                match chunk.get(col) {
                    Some(b) => write!(f, "{b:02x} ")?,
                    None => f.write_str("   ")?,
                }
                if col == GROUP - 1 {
                    f.write_str(": ")?;
                }
            }

            f.write_str("| ")?;
            for &b in chunk {
                let c = if (0x20..0x7f).contains(&b) { b as char } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// `Display` adapter returned by [`list_dump`].
pub struct ListDump<'a> {
    list: &'a List<Buf>,
    name: &'a str,
}

impl fmt::Display for ListDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {}", self.name)?;
        writeln!(f, "buffers in list: {}", self.list.count())?;

        if self.list.is_empty() {
            return Ok(());
        }

        let mut result = Ok(());
        self.list.for_each(|index, buf| {
            if result.is_ok() {
                let name = format!("buf item {index}");
                result = write!(f, "{}", buf.hex_dump(&name));
            }
        });
        result?;

        writeln!(f, "---")
    }
}

impl Buf {
    /// Returns a hex dump of the whole capacity labelled `name`.
    pub fn hex_dump<'a>(&'a self, name: &'a str) -> HexDump<'a> {
        HexDump { buf: self, name }
    }

    /// Emits the hex dump at `debug` level.
    pub fn dump(&self, name: &str) {
        tracing::debug!("{}", self.hex_dump(name));
    }
}

/// Returns a dump of every buffer in `list`, head first.
pub fn list_dump<'a>(list: &'a List<Buf>, name: &'a str) -> ListDump<'a> {
    ListDump { list, name }
}

impl ListDump<'_> {
    /// Emits the dump at `debug` level.
    pub fn emit(&self) {
        tracing::debug!("{}", self);
    }
}
