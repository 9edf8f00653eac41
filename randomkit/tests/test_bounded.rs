//! Tests for bounded integer sampling
//!
//! Range containment, power-of-two masking and argument validation.

use proptest::prelude::*;
use randomkit::{RandomError, RandomKit};

#[test]
fn test_index_zero_bound_is_rejected() {
    let mut rng = RandomKit::new(7);
    let before = rng.clone();

    let err = rng.next_index(0).unwrap_err();
    assert!(
        matches!(err, RandomError::InvalidArgument { operation: "next_index", .. }),
        "unexpected error {:?}",
        err
    );
    assert_eq!(rng, before, "failed call must not mutate state");
}

#[test]
fn test_int_negative_bound_is_rejected() {
    let mut rng = RandomKit::new(7);
    let before = rng.clone();

    assert!(rng.next_int(-3).is_err());
    assert_eq!(rng, before);
}

#[test]
fn test_int_matches_index() {
    let mut signed = RandomKit::new(11);
    let mut unsigned = RandomKit::new(11);

    for bound in [1i64, 2, 3, 10, 1000, i64::MAX] {
        assert_eq!(
            signed.next_int(bound).unwrap() as u64,
            unsigned.next_index(bound as u64).unwrap()
        );
    }
}

#[test]
fn test_full_width_span() {
    let mut rng = RandomKit::new(7);
    // mask is all ones, every 64-bit draw is accepted
    let mut raw = RandomKit::new(7);
    assert_eq!(rng.next_interval(u64::MAX), raw.next_u64());
}

#[test]
fn test_fill_in_range_matches_next_in_range() {
    let mut filled = RandomKit::new(99);
    let mut collected = RandomKit::new(99);

    let mut out = [0u64; 16];
    filled.fill_in_range(1_000, 5_000, &mut out);

    assert_eq!(out.to_vec(), collected.next_in_range(1_000, 5_000, 16));
}

proptest! {
    #[test]
    fn prop_index_within_bound(seed in any::<u32>(), bound in 1u64..=u64::MAX) {
        let mut rng = RandomKit::new(seed as u64);
        for _ in 0..8 {
            let value = rng.next_index(bound).unwrap();
            prop_assert!(value < bound, "{} not below {}", value, bound);
        }
    }

    #[test]
    fn prop_range_within_span(seed in any::<u32>(), low in 0u64..1 << 62, span in 0u64..1 << 62) {
        let mut rng = RandomKit::new(seed as u64);
        for value in rng.next_in_range(low, span, 8) {
            prop_assert!(value >= low && value <= low + span);
        }
    }

    #[test]
    fn prop_power_of_two_index_is_masked_u64(seed in any::<u32>(), shift in 0u32..64) {
        let bound = 1u64 << shift;
        let mut indexed = RandomKit::new(seed as u64);
        let mut raw = RandomKit::new(seed as u64);

        for _ in 0..4 {
            prop_assert_eq!(indexed.next_index(bound).unwrap(), raw.next_u64() & (bound - 1));
        }
    }
}
