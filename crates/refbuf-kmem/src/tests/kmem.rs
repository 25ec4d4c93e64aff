// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use refbuf_zero::{FastZeroizable, ZeroizationProbe};

use super::support::{Probe, count_destroy};
use crate::{
    Kmem, KmemBehaviour, KmemError, KrefPut, change_behaviour, kmem_deref, kmem_ref, live_blocks,
};

// =============================================================================
// alloc() / zalloc()
// =============================================================================

#[test]
fn test_alloc_holds_one_reference() {
    let kmem = Kmem::alloc(42u32, None).expect("Failed to alloc()");

    assert_eq!(kmem.ref_count(), 1);
    assert_eq!(*kmem, 42);
    assert!(!kmem.is_linked());
}

#[test]
fn test_zalloc_payload_is_zeroed() {
    let kmem: Kmem<[u8; 32]> = Kmem::zalloc(None).expect("Failed to zalloc()");

    assert!(kmem.is_zeroized());
}

#[test]
fn test_payload_sits_at_fixed_offset_after_header() {
    let kmem = Kmem::alloc([7u8; 16], None).expect("Failed to alloc()");
    let payload = Kmem::as_ptr(&kmem) as usize;
    let block = kmem.block_addr() as usize;

    assert!(Kmem::<[u8; 16]>::payload_offset() > 0);
    assert_eq!(payload - block, Kmem::<[u8; 16]>::payload_offset());
}

#[test]
fn test_alloc_failure_reports_and_wipes_payload() {
    let probe = Probe::new();
    let sentinel = probe.__sentinel.clone();
    let before = live_blocks();

    change_behaviour(KmemBehaviour::FailAtAlloc(0));
    let result = Kmem::alloc(probe, Some(count_destroy));

    assert!(matches!(result, Err(KmemError::Alloc { .. })));
    assert!(sentinel.is_zeroized());
    assert_eq!(live_blocks(), before);
}

#[test]
fn test_fail_at_alloc_skips_earlier_attempts() {
    change_behaviour(KmemBehaviour::FailAtAlloc(1));

    let first = Kmem::alloc(1u8, None);
    let second = Kmem::alloc(2u8, None);
    let third = Kmem::alloc(3u8, None);

    assert!(first.is_ok());
    assert!(matches!(second, Err(KmemError::Alloc { .. })));
    assert!(third.is_ok());
}

// =============================================================================
// clone() / kmem_ref()
// =============================================================================

#[test]
fn test_clone_shares_block() {
    let a = Kmem::alloc(5u64, None).expect("Failed to alloc()");
    let b = kmem_ref(&a);

    assert!(Kmem::ptr_eq(&a, &b));
    assert_eq!(a.ref_count(), 2);

    drop(b);
    assert_eq!(a.ref_count(), 1);
}

// =============================================================================
// release() / kmem_deref()
// =============================================================================

#[test]
fn test_release_clears_slot() {
    let mut slot = Some(Kmem::alloc(9u16, None).expect("Failed to alloc()"));

    assert_eq!(kmem_deref(&mut slot), KrefPut::Released);
    assert!(slot.is_none());
    assert_eq!(Kmem::release(&mut slot), KrefPut::Alive);
}

#[test]
fn test_release_with_other_owner_keeps_block() {
    let keep = Kmem::alloc(Probe::new(), Some(count_destroy)).expect("Failed to alloc()");
    let mut slot = Some(keep.clone());

    assert_eq!(Kmem::release(&mut slot), KrefPut::Alive);
    assert!(slot.is_none());
    assert_eq!(keep.destroyed.get(), 0);
    assert_eq!(keep.secret, [0xA5; 8]);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "put on a live handle failed")]
fn test_drop_after_counter_released_underneath_panics() {
    let kmem = Kmem::alloc(3u8, None).expect("Failed to alloc()");

    // Drive the counter to zero behind the handle's back; the block leaks.
    assert_eq!(kmem.kref().put(|| {}), Ok(KrefPut::Released));

    drop(kmem);
}

#[test]
fn test_last_release_runs_destructor_before_wipe() {
    let probe = Probe::new();
    let destroyed = probe.destroyed.clone();
    let saw_secret = probe.saw_secret.clone();
    let sentinel = probe.__sentinel.clone();
    let before = live_blocks();

    let mut slot = Some(Kmem::alloc(probe, Some(count_destroy)).expect("Failed to alloc()"));
    assert_eq!(live_blocks(), before + 1);

    Kmem::release(&mut slot);

    assert_eq!(destroyed.get(), 1);
    assert!(saw_secret.get());
    assert!(sentinel.is_zeroized());
    assert_eq!(live_blocks(), before);
}

#[test]
fn test_drop_wipes_without_destructor() {
    let probe = Probe::new();
    let sentinel = probe.__sentinel.clone();

    let kmem = Kmem::alloc(probe, None).expect("Failed to alloc()");
    drop(kmem);

    assert!(sentinel.is_zeroized());
}

#[test]
fn test_vec_payload_is_wiped_on_free() {
    struct Spy(Vec<u8>, refbuf_zero::ZeroizeOnDropSentinel);

    impl FastZeroizable for Spy {
        fn fast_zeroize(&mut self) {
            self.0.fast_zeroize();
            assert!(self.0.is_zeroized());
            self.1.fast_zeroize();
        }
    }

    let sentinel = refbuf_zero::ZeroizeOnDropSentinel::default();
    let kmem = Kmem::alloc(Spy(vec![0x11; 256], sentinel.clone()), None).expect("Failed to alloc()");
    drop(kmem);

    assert!(sentinel.is_zeroized());
}

#[test]
fn test_debug_redacts_payload() {
    let kmem = Kmem::alloc(0xDEAD_BEEFu32, None).expect("Failed to alloc()");
    let rendered = format!("{kmem:?}");

    assert!(rendered.contains("REDACTED"));
    assert!(!rendered.contains("3735928559"));
}

// =============================================================================
// reference-count law
// =============================================================================

proptest! {
    #[test]
    fn prop_destructor_runs_once_after_final_put(k in 0usize..64) {
        let probe = Probe::new();
        let destroyed = probe.destroyed.clone();

        let mut handles = vec![Some(Kmem::alloc(probe, Some(count_destroy)).expect("Failed to alloc()"))];
        for _ in 0..k {
            let extra = handles[0].as_ref().map(Kmem::clone);
            handles.push(extra);
        }

        let (last, rest) = handles.split_last_mut().expect("at least one handle");
        for slot in rest.iter_mut() {
            prop_assert_eq!(Kmem::release(slot), KrefPut::Alive);
            prop_assert_eq!(destroyed.get(), 0);
        }

        prop_assert_eq!(Kmem::release(last), KrefPut::Released);
        prop_assert_eq!(destroyed.get(), 1);
    }
}
