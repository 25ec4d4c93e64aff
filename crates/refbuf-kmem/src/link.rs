// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Type-erased view of a link target.

use refbuf_zero::FastZeroizable;

use crate::kmem::Kmem;

/// A held reference to a block of any payload type.
///
/// Dropping the boxed link puts the reference it holds.
pub(crate) trait KmemLink {
    /// Address of the target block, for identity checks.
    fn block_addr(&self) -> *const ();

    /// The link carried by the target block, if any.
    fn next_link(&self) -> Option<&dyn KmemLink>;
}

impl<U: FastZeroizable + 'static> KmemLink for Kmem<U> {
    fn block_addr(&self) -> *const () {
        Kmem::block_addr(self)
    }

    fn next_link(&self) -> Option<&dyn KmemLink> {
        self.linked()
    }
}
