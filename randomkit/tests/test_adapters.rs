//! Tests for the host interface adapters
//!
//! Both adapters drive a shared engine handle; duplication must produce an
//! independent engine with the same future.

use rand_core::{RngCore, SeedableRng};
use randomkit::adapters::{share, CoreRng, MathSource, Source64};
use randomkit::RandomKit;

#[test]
fn test_math_source_duplicate_is_independent() {
    let mut source = MathSource::new(7);
    let mut copy = source.duplicate();

    assert_eq!(copy.int63(), 1407639518939636932);
    assert_eq!(source.int63(), 1407639518939636932);

    // Advance only the copy
    copy.uint64();
    let next_copy = copy.uint64();
    let next_source = source.uint64();
    assert_ne!(next_copy, next_source);
}

#[test]
fn test_math_source_duplicate_mid_stream() {
    let mut source = MathSource::new(2024);
    for _ in 0..500 {
        source.uint64();
    }

    let mut copy = source.duplicate();
    for _ in 0..500 {
        assert_eq!(source.int63(), copy.int63());
    }
}

#[test]
fn test_adapters_share_one_engine() {
    let handle = share(RandomKit::new(7));
    let mut narrow = MathSource::from_shared(handle.clone());
    let mut core = CoreRng::from_shared(handle.clone());

    let mut reference = RandomKit::new(7);

    assert_eq!(narrow.uint64(), reference.next_u64());
    assert_eq!(core.next_u64(), reference.next_u64());
    assert_eq!(handle.borrow_mut().next_f64(), reference.next_f64());
    assert_eq!(handle.borrow().position(), reference.position());
}

#[test]
fn test_core_rng_seeding_matches_engine() {
    let mut adapter = CoreRng::seed_from_u64(7);
    let mut engine = RandomKit::new(7);

    for _ in 0..10 {
        assert_eq!(adapter.next_u32(), engine.next_u32());
    }
}

#[test]
fn test_core_rng_seed_is_masked() {
    let mut wide = CoreRng::seed_from_u64((5u64 << 32) | 7);
    let mut narrow = CoreRng::seed_from_u64(7);
    assert_eq!(wide.next_u64(), narrow.next_u64());
}

#[test]
fn test_core_rng_try_fill_bytes() {
    let mut adapter = CoreRng::seed_from_u64(7);
    let mut bytes = [0u8; 13];
    adapter.try_fill_bytes(&mut bytes).unwrap();

    // 13 bytes = one u64 chunk plus a five byte tail
    assert_eq!(&bytes[..8], &1407639518939636932u64.to_le_bytes());
    assert_eq!(adapter.handle().borrow().position(), 4);
}
