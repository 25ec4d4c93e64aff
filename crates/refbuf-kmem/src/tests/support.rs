// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Payload type that records what happens to it.

use std::cell::Cell;
use std::rc::Rc;

use refbuf_zero::{FastZeroizable, ZeroizationProbe, ZeroizeOnDropSentinel};

pub(crate) struct Probe {
    pub(crate) secret: [u8; 8],
    pub(crate) destroyed: Rc<Cell<u32>>,
    pub(crate) saw_secret: Rc<Cell<bool>>,
    pub(crate) __sentinel: ZeroizeOnDropSentinel,
}

impl Probe {
    pub(crate) fn new() -> Self {
        Self {
            secret: [0xA5; 8],
            destroyed: Rc::new(Cell::new(0)),
            saw_secret: Rc::new(Cell::new(false)),
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }
}

impl FastZeroizable for Probe {
    fn fast_zeroize(&mut self) {
        self.secret.fast_zeroize();
        self.__sentinel.fast_zeroize();
    }
}

impl ZeroizationProbe for Probe {
    fn is_zeroized(&self) -> bool {
        self.secret.is_zeroized()
    }
}

pub(crate) fn count_destroy(probe: &mut Probe) {
    probe.destroyed.set(probe.destroyed.get() + 1);
    probe.saw_secret.set(!probe.secret.is_zeroized());
}
