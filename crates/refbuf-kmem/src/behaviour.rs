// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Failure injection and block accounting for tests.
//!
//! State is per thread, so parallel test threads do not see each other.

use std::cell::Cell;

/// Allocation behaviour for the current thread.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum KmemBehaviour {
    /// Allocations go to the global allocator.
    #[default]
    None,
    /// The allocation attempt with this index (counted from zero, starting at
    /// the call to [`change_behaviour`]) fails. Later attempts succeed.
    FailAtAlloc(usize),
}

std::thread_local! {
    static BEHAVIOUR: Cell<KmemBehaviour> = const { Cell::new(KmemBehaviour::None) };
    static LIVE_BLOCKS: Cell<isize> = const { Cell::new(0) };
}

/// Sets the allocation behaviour for the current thread.
pub fn change_behaviour(behaviour: KmemBehaviour) {
    BEHAVIOUR.with(|b| b.set(behaviour));
}

/// Number of managed blocks allocated and not yet freed on this thread.
pub fn live_blocks() -> isize {
    LIVE_BLOCKS.with(Cell::get)
}

pub(crate) fn take_alloc_failure() -> bool {
    BEHAVIOUR.with(|b| match b.get() {
        KmemBehaviour::None => false,
        KmemBehaviour::FailAtAlloc(0) => {
            b.set(KmemBehaviour::None);
            true
        }
        KmemBehaviour::FailAtAlloc(n) => {
            b.set(KmemBehaviour::FailAtAlloc(n - 1));
            false
        }
    })
}

pub(crate) fn on_block_alloc() {
    LIVE_BLOCKS.with(|n| n.set(n.get() + 1));
}

pub(crate) fn on_block_free() {
    LIVE_BLOCKS.with(|n| n.set(n.get() - 1));
}
