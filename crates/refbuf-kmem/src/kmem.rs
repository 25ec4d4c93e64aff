// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Kmem - handle to a reference-counted managed block.

use alloc::alloc::{Layout, alloc, dealloc};
use alloc::boxed::Box;
use core::cell::OnceCell;
use core::marker::PhantomData;
use core::ops::Deref;
use core::panic::Location;
use core::ptr::{self, NonNull};
use core::sync::atomic::{Ordering, compiler_fence};

use refbuf_kref::{Kref, KrefPut};
use refbuf_zero::FastZeroizable;

use crate::error::KmemError;
use crate::link::KmemLink;

/// Callback run once on the payload when the last reference is put.
pub type Destructor<T> = fn(&mut T);

#[repr(C)]
struct KmemHeader<T> {
    kref: Kref,
    destructor: Option<Destructor<T>>,
    link: OnceCell<Box<dyn KmemLink>>,
}

#[repr(C)]
struct KmemBlock<T> {
    header: KmemHeader<T>,
    payload: T,
}

/// A counted reference to a managed block holding a `T`.
///
/// The block is a single `#[repr(C)]` allocation: header first, payload at
/// [`Kmem::payload_offset`]. Dropping the handle puts its reference.
pub struct Kmem<T: FastZeroizable> {
    ptr: NonNull<KmemBlock<T>>,
    _marker: PhantomData<KmemBlock<T>>,
}

impl<T: FastZeroizable> Kmem<T> {
    /// Allocates a block holding `payload`, with one reference.
    ///
    /// On allocation failure `payload` is wiped before it is dropped and the
    /// failure is logged with the caller's location.
    #[track_caller]
    pub fn alloc(mut payload: T, destructor: Option<Destructor<T>>) -> Result<Self, KmemError> {
        let layout = Layout::new::<KmemBlock<T>>();
        let location = Location::caller();
        let raw = Self::raw_alloc(layout) as *mut KmemBlock<T>;

        let Some(ptr) = NonNull::new(raw) else {
            tracing::error!(
                size = layout.size(),
                location = %location,
                "Can't allocate managed block"
            );
            payload.fast_zeroize();
            return Err(KmemError::Alloc {
                size: layout.size(),
            });
        };

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): ptr is a fresh allocation for exactly one KmemBlock<T>
            ptr.as_ptr().write(KmemBlock {
                header: KmemHeader {
                    kref: Kref::new(),
                    destructor,
                    link: OnceCell::new(),
                },
                payload,
            });
        }

        #[cfg(any(test, feature = "test-utils"))]
        crate::behaviour::on_block_alloc();

        Ok(Self {
            ptr,
            _marker: PhantomData,
        })
    }

    /// Allocates a block whose payload starts out all-zero.
    #[track_caller]
    pub fn zalloc(destructor: Option<Destructor<T>>) -> Result<Self, KmemError>
    where
        T: Default,
    {
        Self::alloc(T::default(), destructor)
    }

    fn raw_alloc(layout: Layout) -> *mut u8 {
        #[cfg(any(test, feature = "test-utils"))]
        if crate::behaviour::take_alloc_failure() {
            return ptr::null_mut();
        }

        // SAFETY: KmemBlock always has a non-zero size (the header holds a counter)
        unsafe { alloc(layout) }
    }

    #[inline(always)]
    fn header(&self) -> &KmemHeader<T> {
        // SAFETY: the block stays allocated while this handle holds a reference
        unsafe { &(*self.ptr.as_ptr()).header }
    }

    /// Takes another reference to the same block.
    pub fn try_ref(this: &Self) -> Result<Self, KmemError> {
        this.header().kref.get()?;

        Ok(Self {
            ptr: this.ptr,
            _marker: PhantomData,
        })
    }

    /// Puts the reference held in `slot` and leaves the slot empty.
    ///
    /// Returns [`KrefPut::Released`] when that was the last reference and the
    /// block was torn down. An empty slot is left alone and reports
    /// [`KrefPut::Alive`].
    pub fn release(slot: &mut Option<Self>) -> KrefPut {
        match slot.take() {
            Some(handle) => handle.put(),
            None => KrefPut::Alive,
        }
    }

    fn put(self) -> KrefPut {
        let ptr = self.ptr;
        core::mem::forget(self);

        // SAFETY: `self` owned one reference and was forgotten, so the put is ours
        unsafe { Self::put_raw(ptr) }
    }

    /// # Safety
    ///
    /// The caller must own one reference to the block behind `ptr` and must not
    /// use it afterwards.
    unsafe fn put_raw(ptr: NonNull<KmemBlock<T>>) -> KrefPut {
        let block = ptr.as_ptr();

        // SAFETY: the caller owns a reference, so the block is alive
        let (kref, destructor) = unsafe { (&(*block).header.kref, (*block).header.destructor) };

        let outcome = kref.put(|| {
            // SAFETY: count reached zero; no other handle can observe the payload
            let payload = unsafe { &mut *ptr::addr_of_mut!((*block).payload) };

            if let Some(destructor) = destructor {
                destructor(payload);
            }

            payload.fast_zeroize();
            compiler_fence(Ordering::SeqCst);
        });

        match outcome {
            Ok(KrefPut::Released) => {
                // SAFETY: last reference is gone; the block is exclusively ours
                unsafe { Self::free(block) };
                KrefPut::Released
            }
            Ok(KrefPut::Alive) => KrefPut::Alive,
            Err(e) => {
                debug_assert!(false, "put on a live handle failed: {e}");
                KrefPut::Alive
            }
        }
    }

    /// # Safety
    ///
    /// `block` must be a released block that nothing else references.
    unsafe fn free(block: *mut KmemBlock<T>) {
        // SAFETY: exclusive access per the caller contract
        let link = unsafe { (*ptr::addr_of_mut!((*block).header.link)).take() };

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): block was initialized in alloc() and is dropped once
            ptr::drop_in_place(block);
            dealloc(block as *mut u8, Layout::new::<KmemBlock<T>>());
        }

        #[cfg(any(test, feature = "test-utils"))]
        crate::behaviour::on_block_free();

        // The link target goes last, after our own storage is gone.
        drop(link);
    }

    /// Links this block to `parent`.
    ///
    /// Takes a reference on `parent` that is put when this block is torn
    /// down. A block carries at most one link, and a link that would make a
    /// block reachable from itself is refused.
    pub fn link_to<U>(&self, parent: &Kmem<U>) -> Result<(), KmemError>
    where
        U: FastZeroizable + 'static,
    {
        if self.header().link.get().is_some() {
            return Err(KmemError::AlreadyLinked);
        }

        let me = self.block_addr();
        let mut cursor: Option<&dyn KmemLink> = Some(parent);

        while let Some(node) = cursor {
            if node.block_addr() == me {
                return Err(KmemError::LinkCycle);
            }
            cursor = node.next_link();
        }

        let held = Kmem::try_ref(parent)?;

        self.header()
            .link
            .set(Box::new(held))
            .map_err(|_| KmemError::AlreadyLinked)
    }

    /// Returns `true` if this block carries an ownership link.
    pub fn is_linked(&self) -> bool {
        self.header().link.get().is_some()
    }

    /// Current number of references to the block.
    pub fn ref_count(&self) -> u32 {
        self.header().kref.count()
    }

    /// Returns `true` if both handles point at the same block.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        this.ptr == other.ptr
    }

    /// Raw pointer to the payload.
    pub fn as_ptr(this: &Self) -> *const T {
        // SAFETY: the block is alive while `this` exists
        unsafe { ptr::addr_of!((*this.ptr.as_ptr()).payload) }
    }

    /// Byte offset of the payload from the start of the block.
    pub fn payload_offset() -> usize {
        core::mem::offset_of!(KmemBlock<T>, payload)
    }

    #[cfg(test)]
    pub(crate) fn kref(&self) -> &Kref {
        &self.header().kref
    }

    pub(crate) fn block_addr(&self) -> *const () {
        self.ptr.as_ptr() as *const ()
    }

    pub(crate) fn linked(&self) -> Option<&dyn KmemLink> {
        self.header().link.get().map(|link| link.as_ref())
    }
}

impl<T: FastZeroizable> Deref for Kmem<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: the block is alive while this handle holds a reference
        unsafe { &(*self.ptr.as_ptr()).payload }
    }
}

impl<T: FastZeroizable> Clone for Kmem<T> {
    /// # Panics
    ///
    /// Panics if the reference count would overflow `u32`.
    fn clone(&self) -> Self {
        match Self::try_ref(self) {
            Ok(handle) => handle,
            Err(e) => panic!("Kmem reference count: {e}"),
        }
    }
}

impl<T: FastZeroizable> Drop for Kmem<T> {
    fn drop(&mut self) {
        // SAFETY: this handle owns one reference and is being dropped
        unsafe {
            Self::put_raw(self.ptr);
        }
    }
}

impl<T: FastZeroizable> core::fmt::Debug for Kmem<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Kmem")
            .field("payload", &"REDACTED")
            .field("refs", &self.ref_count())
            .field("linked", &self.is_linked())
            .finish()
    }
}

/// Takes another reference to `handle`'s block.
///
/// # Panics
///
/// Panics if the reference count would overflow `u32`.
#[inline]
pub fn kmem_ref<T: FastZeroizable>(handle: &Kmem<T>) -> Kmem<T> {
    handle.clone()
}

/// Puts the reference in `slot`, leaving `None` behind.
#[inline]
pub fn kmem_deref<T: FastZeroizable>(slot: &mut Option<Kmem<T>>) -> KrefPut {
    Kmem::release(slot)
}

/// Links `child` to `parent`. See [`Kmem::link_to`].
#[inline]
pub fn kmem_link<T, U>(child: &Kmem<T>, parent: &Kmem<U>) -> Result<(), KmemError>
where
    T: FastZeroizable,
    U: FastZeroizable + 'static,
{
    child.link_to(parent)
}
