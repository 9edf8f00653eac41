//! Tests for Fisher-Yates shuffling
//!
//! The swap closure is the only way the shuffle touches storage, so the
//! same draws permute any indexable structure identically.

use randomkit::RandomKit;
use std::collections::HashMap;

#[test]
fn test_shuffle_and_permutation_agree() {
    let mut shuffled = RandomKit::new(7);
    let mut permuted = RandomKit::new(7);

    let mut items: Vec<usize> = (0..50).collect();
    shuffled.shuffle_slice(&mut items);

    assert_eq!(items, permuted.permutation(50));
}

#[test]
fn test_shuffle_external_storage() {
    // Shuffle values held in a map keyed by position
    let mut storage: HashMap<usize, char> = "abcdefghij".chars().enumerate().collect();
    let mut rng = RandomKit::new(7);

    rng.shuffle(storage.len(), |i, j| {
        let a = storage[&i];
        let b = storage[&j];
        storage.insert(i, b);
        storage.insert(j, a);
    });

    let result: String = (0..10).map(|i| storage[&i]).collect();
    assert_eq!(result, "ifacbjhdge");
}

#[test]
fn test_permutation_does_not_touch_caller_data() {
    let mut rng = RandomKit::new(7);
    let original: Vec<usize> = (0..10).collect();
    let snapshot = original.clone();

    let perm = rng.permutation(original.len());

    assert_eq!(original, snapshot);
    assert_ne!(perm, original);
}

#[test]
fn test_permutation_of_zero_is_empty() {
    let mut rng = RandomKit::new(7);
    assert!(rng.permutation(0).is_empty());
    assert_eq!(rng.position(), 624);
}

#[test]
fn test_first_element_roughly_uniform() {
    let mut rng = RandomKit::new(1);
    let mut counts = [0usize; 5];
    let trials = 10_000;

    for _ in 0..trials {
        counts[rng.permutation(5)[0]] += 1;
    }

    for (value, count) in counts.iter().enumerate() {
        let share = *count as f64 / trials as f64;
        assert!(
            (share - 0.2).abs() < 0.03,
            "value {} lands first {:.3} of the time",
            value,
            share
        );
    }
}
