// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Buf - reference-counted byte buffer.

use core::cell::{Cell, Ref, RefCell, RefMut};

use refbuf_kmem::{Kmem, KrefPut, try_alloc_bytes};
use refbuf_util::{constant_time_eq, fast_zeroize_slice};
use refbuf_zero::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe, ZeroizeOnDropSentinel};

use crate::error::BufError;
use crate::traits::Buffer;

pub(crate) struct BufData {
    pub(crate) data: RefCell<Box<[u8]>>,
    pub(crate) payload_len: Cell<usize>,
    capacity: usize,
    __sentinel: ZeroizeOnDropSentinel,
}

impl FastZeroizable for BufData {
    fn fast_zeroize(&mut self) {
        self.data.fast_zeroize();
        self.payload_len.fast_zeroize();
        self.__sentinel.fast_zeroize();
    }
}

impl ZeroizationProbe for BufData {
    fn is_zeroized(&self) -> bool {
        self.data.is_zeroized() && self.payload_len.is_zeroized()
    }
}

fn wipe_data(data: &mut BufData) {
    fast_zeroize_slice(&mut data.data.get_mut()[..]);
}

/// Handle to a reference-counted byte buffer.
///
/// A buffer owns `capacity` bytes and a payload length. A zero payload length
/// means the whole capacity is the payload. `clone()` takes a new reference;
/// dropping the last one wipes the bytes and frees the block.
///
/// Accessors that hand out [`Ref`]/[`RefMut`] follow `RefCell` rules and
/// panic on a conflicting borrow; the [`Buffer`] methods report
/// [`BufError::Borrowed`] instead.
#[derive(Clone)]
pub struct Buf {
    pub(crate) inner: Kmem<BufData>,
}

impl Buf {
    /// Allocates a buffer of `capacity` bytes with no payload length set.
    ///
    /// Bytes start out zero; nothing is ever handed out uninitialized.
    #[track_caller]
    pub fn alloc(capacity: usize) -> Result<Self, BufError> {
        let data = try_alloc_bytes(capacity)?;

        let inner = Kmem::alloc(
            BufData {
                data: RefCell::new(data),
                payload_len: Cell::new(0),
                capacity,
                __sentinel: ZeroizeOnDropSentinel::default(),
            },
            Some(wipe_data),
        )?;

        Ok(Self { inner })
    }

    /// Allocates a zero-filled buffer of `capacity` bytes.
    #[track_caller]
    pub fn zalloc(capacity: usize) -> Result<Self, BufError> {
        let buf = Self::alloc(capacity)?;
        buf.erase();
        Ok(buf)
    }

    /// Copies `src` into a new buffer whose capacity and payload length are
    /// both `src.len()`.
    #[track_caller]
    pub fn cpy(src: &[u8]) -> Result<Self, BufError> {
        let buf = Self::alloc(src.len())?;

        buf.bytes_mut().copy_from_slice(src);
        buf.put(src.len());

        Ok(buf)
    }

    /// Copies the text of `s`, without a terminator.
    #[track_caller]
    pub fn strdub(s: &str) -> Result<Self, BufError> {
        Self::cpy(s.as_bytes())
    }

    /// Sets the payload length to `len` if it fits the capacity.
    ///
    /// Out-of-range values are ignored. See [`Buf::try_put`] for the variant
    /// that reports them.
    pub fn put(&self, len: usize) {
        if len <= self.capacity() {
            self.inner.payload_len.set(len);
        }
    }

    /// Sets the payload length to `len`, failing if it exceeds the capacity.
    pub fn try_put(&self, len: usize) -> Result<(), BufError> {
        let capacity = self.capacity();

        if len > capacity {
            return Err(BufError::PayloadOutOfRange { len, capacity });
        }

        self.inner.payload_len.set(len);

        Ok(())
    }

    /// Fixed size of the byte region.
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Explicit payload length; zero when unset.
    pub fn payload_len(&self) -> usize {
        self.inner.payload_len.get()
    }

    /// Logical size: the payload length if set, the capacity otherwise.
    pub fn payload_size(&self) -> usize {
        match self.payload_len() {
            0 => self.capacity(),
            len => len,
        }
    }

    /// Returns `true` if the logical view is empty (zero capacity).
    pub fn is_empty(&self) -> bool {
        self.payload_size() == 0
    }

    /// Borrows the logical payload.
    ///
    /// # Panics
    ///
    /// Panics if the bytes are mutably borrowed.
    pub fn payload(&self) -> Ref<'_, [u8]> {
        let size = self.payload_size();
        Ref::map(self.inner.data.borrow(), |data| &data[..size])
    }

    /// Borrows the logical payload, failing if the bytes are mutably borrowed.
    pub fn try_payload(&self) -> Result<Ref<'_, [u8]>, BufError> {
        let size = self.payload_size();
        let data = self
            .inner
            .data
            .try_borrow()
            .map_err(|_| BufError::Borrowed)?;

        Ok(Ref::map(data, |data| &data[..size]))
    }

    /// Borrows the whole capacity.
    ///
    /// # Panics
    ///
    /// Panics if the bytes are mutably borrowed.
    pub fn bytes(&self) -> Ref<'_, [u8]> {
        Ref::map(self.inner.data.borrow(), |data| &data[..])
    }

    /// Mutably borrows the whole capacity.
    ///
    /// # Panics
    ///
    /// Panics if the bytes are borrowed.
    pub fn bytes_mut(&self) -> RefMut<'_, [u8]> {
        RefMut::map(self.inner.data.borrow_mut(), |data| &mut data[..])
    }

    /// Zeroes the whole capacity and clears the payload length.
    ///
    /// Storage is kept.
    ///
    /// # Panics
    ///
    /// Panics if the bytes are borrowed. See [`Buf::try_erase`].
    pub fn erase(&self) {
        fast_zeroize_slice(&mut self.inner.data.borrow_mut()[..]);
        self.inner.payload_len.set(0);
    }

    /// Zeroes the whole capacity and clears the payload length, failing with
    /// [`BufError::Borrowed`] while the bytes are borrowed.
    ///
    /// On failure neither the bytes nor the payload length are touched.
    pub fn try_erase(&self) -> Result<(), BufError> {
        let mut data = self
            .inner
            .data
            .try_borrow_mut()
            .map_err(|_| BufError::Borrowed)?;

        fast_zeroize_slice(&mut data[..]);
        self.inner.payload_len.set(0);

        Ok(())
    }

    /// Joins the logical payloads of `a` and `b` into a new buffer.
    #[track_caller]
    pub fn concatenate(a: &Buf, b: &Buf) -> Result<Self, BufError> {
        let (len_a, len_b) = (a.payload_size(), b.payload_size());

        if len_a == 0 || len_b == 0 {
            return Err(BufError::EmptyOperand);
        }

        let joined = Self::alloc(len_a + len_b)?;
        {
            let left = a.try_payload()?;
            let right = b.try_payload()?;
            let mut out = joined.bytes_mut();

            out[..len_a].copy_from_slice(&left);
            out[len_a..].copy_from_slice(&right);
        }
        joined.put(len_a + len_b);

        Ok(joined)
    }

    /// Puts the reference in `slot`, leaving `None` behind.
    pub fn release(slot: &mut Option<Self>) -> KrefPut {
        match slot.take() {
            Some(buf) => Kmem::release(&mut Some(buf.inner)),
            None => KrefPut::Alive,
        }
    }

    /// Current number of references to the buffer.
    pub fn ref_count(&self) -> u32 {
        self.inner.ref_count()
    }

    /// Returns `true` if both handles refer to the same buffer.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Kmem::ptr_eq(&this.inner, &other.inner)
    }

    /// Returns `true` if the buffer keeps another buffer alive.
    pub fn is_linked(&self) -> bool {
        self.inner.is_linked()
    }

    /// Ties this buffer's lifetime to `source`: `source` stays alive until
    /// this buffer is released.
    pub fn link_to(&self, source: &Buf) -> Result<(), BufError> {
        self.inner.link_to(&source.inner)?;
        Ok(())
    }
}

impl Buffer for Buf {
    fn open(&self, f: &mut dyn FnMut(&[u8]) -> Result<(), BufError>) -> Result<(), BufError> {
        let payload = self.try_payload()?;
        f(&payload)
    }

    fn open_mut(
        &self,
        f: &mut dyn FnMut(&mut [u8]) -> Result<(), BufError>,
    ) -> Result<(), BufError> {
        let mut data = self
            .inner
            .data
            .try_borrow_mut()
            .map_err(|_| BufError::Borrowed)?;
        f(&mut data[..])
    }

    fn capacity(&self) -> usize {
        Buf::capacity(self)
    }

    fn payload_size(&self) -> usize {
        Buf::payload_size(self)
    }
}

impl PartialEq for Buf {
    /// Compares logical payloads in constant time.
    fn eq(&self, other: &Self) -> bool {
        if Buf::ptr_eq(self, other) {
            return true;
        }

        match (self.try_payload(), other.try_payload()) {
            (Ok(a), Ok(b)) => constant_time_eq(&a, &b),
            _ => false,
        }
    }
}

impl Eq for Buf {}

impl AssertZeroizeOnDrop for Buf {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.inner.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        refbuf_zero::assert_zeroize_on_drop(self);
    }
}

impl core::fmt::Debug for Buf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Buf")
            .field("data", &"REDACTED")
            .field("capacity", &self.capacity())
            .field("payload_len", &self.payload_len())
            .field("refs", &self.ref_count())
            .finish()
    }
}
