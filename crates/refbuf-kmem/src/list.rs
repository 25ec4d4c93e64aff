// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! List - ordered collection of managed handles.
//!
//! A list is itself a managed block. Every member sits in the list as one
//! held reference, so a member the caller never cloned lives exactly as long
//! as the list, and a member the caller kept a clone of survives it.

use alloc::collections::VecDeque;
use core::cell::{Ref, RefCell};

use refbuf_zero::{FastZeroizable, ZeroizationProbe};

use crate::error::KmemError;
use crate::kmem::Kmem;

/// Ordered collection of handles `H`, stored inside a [`Kmem`] block.
pub struct List<H> {
    items: RefCell<VecDeque<H>>,
}

impl<H> List<H> {
    /// Creates an empty list in its own managed block.
    #[track_caller]
    pub fn create() -> Result<Kmem<Self>, KmemError> {
        Kmem::alloc(
            Self {
                items: RefCell::new(VecDeque::new()),
            },
            None,
        )
    }

    /// Moves `item` to the tail of the list.
    ///
    /// Fails with [`KmemError::ListBorrowed`] while an iterator is alive; the
    /// rejected item is dropped, which puts its reference.
    pub fn append(&self, item: H) -> Result<(), KmemError> {
        let mut items = self
            .items
            .try_borrow_mut()
            .map_err(|_| KmemError::ListBorrowed)?;

        items.push_back(item);

        Ok(())
    }

    /// Detaches and returns the head of the list.
    pub fn pop_front(&self) -> Result<Option<H>, KmemError> {
        let mut items = self
            .items
            .try_borrow_mut()
            .map_err(|_| KmemError::ListBorrowed)?;

        Ok(items.pop_front())
    }

    /// Number of members.
    pub fn count(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` if the list has no members.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Calls `f` with the index and a borrow of every member, head first.
    pub fn for_each<F: FnMut(usize, &H)>(&self, mut f: F) {
        for (index, item) in self.items.borrow().iter().enumerate() {
            f(index, item);
        }
    }
}

impl<H: Clone> List<H> {
    /// Returns a forward iterator over new references to the members.
    ///
    /// The list stays borrowed while the iterator is alive, so appends fail
    /// instead of disturbing the walk. Call `iter()` again to restart.
    pub fn iter(&self) -> ListIter<'_, H> {
        ListIter {
            items: self.items.borrow(),
            pos: 0,
        }
    }

    /// Returns a new reference to the member at `index`.
    pub fn get(&self, index: usize) -> Option<H> {
        self.items.borrow().get(index).cloned()
    }

    /// Returns a new reference to the head of the list.
    pub fn first(&self) -> Option<H> {
        self.items.borrow().front().cloned()
    }

    /// Returns a new reference to the tail of the list.
    pub fn last(&self) -> Option<H> {
        self.items.borrow().back().cloned()
    }
}

impl<H> FastZeroizable for List<H> {
    /// Puts every member reference the list holds.
    fn fast_zeroize(&mut self) {
        self.items.get_mut().clear();
    }
}

impl<H> ZeroizationProbe for List<H> {
    fn is_zeroized(&self) -> bool {
        self.items.try_borrow().is_ok_and(|items| items.is_empty())
    }
}

impl<H> core::fmt::Debug for List<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("List")
            .field("count", &self.items.try_borrow().map(|items| items.len()).ok())
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`List::iter`].
pub struct ListIter<'a, H> {
    items: Ref<'a, VecDeque<H>>,
    pos: usize,
}

impl<H: Clone> Iterator for ListIter<'_, H> {
    type Item = H;

    fn next(&mut self) -> Option<H> {
        let item = self.items.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<H: Clone> ExactSizeIterator for ListIter<'_, H> {}

impl<'a, H: Clone> IntoIterator for &'a List<H> {
    type Item = H;
    type IntoIter = ListIter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
