// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::support::{Probe, count_destroy};
use crate::{Kmem, KmemError, KrefPut, kmem_link};

// =============================================================================
// link_to() / kmem_link()
// =============================================================================

#[test]
fn test_link_takes_reference_on_parent() {
    let parent = Kmem::alloc(1u8, None).expect("Failed to alloc()");
    let child = Kmem::alloc(2u8, None).expect("Failed to alloc()");

    kmem_link(&child, &parent).expect("Failed to link()");

    assert!(child.is_linked());
    assert!(!parent.is_linked());
    assert_eq!(parent.ref_count(), 2);
    assert_eq!(child.ref_count(), 1);
}

#[test]
fn test_releasing_child_releases_parent_once() {
    let parent_probe = Probe::new();
    let parent_destroyed = parent_probe.destroyed.clone();
    let parent_sentinel = parent_probe.__sentinel.clone();

    let mut parent = Some(Kmem::alloc(parent_probe, Some(count_destroy)).expect("Failed to alloc()"));
    let mut child = Some(Kmem::alloc(3u32, None).expect("Failed to alloc()"));

    if let (Some(c), Some(p)) = (child.as_ref(), parent.as_ref()) {
        c.link_to(p).expect("Failed to link_to()");
    }

    // The caller drops its own parent reference; the link keeps it alive.
    assert_eq!(Kmem::release(&mut parent), KrefPut::Alive);
    assert_eq!(parent_destroyed.get(), 0);

    assert_eq!(Kmem::release(&mut child), KrefPut::Released);
    assert_eq!(parent_destroyed.get(), 1);
    assert!(parent_sentinel.is_zeroized());
}

#[test]
fn test_releasing_child_with_shared_parent_only_puts_once() {
    let parent = Kmem::alloc(Probe::new(), Some(count_destroy)).expect("Failed to alloc()");
    let child = Kmem::alloc(0u8, None).expect("Failed to alloc()");
    child.link_to(&parent).expect("Failed to link_to()");

    let extra = child.clone();
    drop(child);
    assert_eq!(parent.ref_count(), 2);

    drop(extra);
    assert_eq!(parent.ref_count(), 1);
    assert_eq!(parent.destroyed.get(), 0);
}

#[test]
fn test_link_chain_releases_transitively() {
    let root_probe = Probe::new();
    let root_destroyed = root_probe.destroyed.clone();

    let root = Kmem::alloc(root_probe, Some(count_destroy)).expect("Failed to alloc()");
    let mid = Kmem::alloc(Probe::new(), None).expect("Failed to alloc()");
    let leaf = Kmem::alloc(Probe::new(), None).expect("Failed to alloc()");

    mid.link_to(&root).expect("Failed to link_to()");
    leaf.link_to(&mid).expect("Failed to link_to()");
    drop(root);
    drop(mid);

    assert_eq!(root_destroyed.get(), 0);
    drop(leaf);
    assert_eq!(root_destroyed.get(), 1);
}

#[test]
fn test_link_twice_fails() {
    let a = Kmem::alloc(1u8, None).expect("Failed to alloc()");
    let b = Kmem::alloc(2u8, None).expect("Failed to alloc()");
    let child = Kmem::alloc(3u8, None).expect("Failed to alloc()");

    child.link_to(&a).expect("Failed to link_to()");

    assert_eq!(child.link_to(&b), Err(KmemError::AlreadyLinked));
    assert_eq!(b.ref_count(), 1);
}

#[test]
fn test_self_link_is_a_cycle() {
    let a = Kmem::alloc(1u8, None).expect("Failed to alloc()");

    assert_eq!(a.link_to(&a), Err(KmemError::LinkCycle));
    assert_eq!(a.ref_count(), 1);
}

#[test]
fn test_indirect_cycle_is_refused() {
    let a = Kmem::alloc(1u8, None).expect("Failed to alloc()");
    let b = Kmem::alloc(2u16, None).expect("Failed to alloc()");
    let c = Kmem::alloc(3u32, None).expect("Failed to alloc()");

    b.link_to(&a).expect("Failed to link_to()");
    c.link_to(&b).expect("Failed to link_to()");

    assert_eq!(a.link_to(&c), Err(KmemError::LinkCycle));
    assert!(!a.is_linked());
}
