//! Property-based tests for the LazyIterator protocol.
//!
//! These properties relate the adapters to their definitions over plain
//! vectors, and check the exhaustion guarantees of `fuse`.

use lazyseq::iter::LazyIterator;
use lazyseq::optional::Optional;
use lazyseq::sources::{from_fn, from_slice, from_vec, repeat};
use proptest::prelude::*;

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-100..100_i32, 0..32)
}

// =============================================================================
// Source Laws
// =============================================================================

proptest! {
    /// collect_vec(from_slice(values)) == values
    #[test]
    fn prop_slice_roundtrip(values in arb_values()) {
        prop_assert_eq!(from_slice(&values).collect_vec(), values);
    }

    /// count(take(repeat(v), n)) == n
    #[test]
    fn prop_take_repeat_count(value: i32, count in 0..500_usize) {
        prop_assert_eq!(repeat(value).take(count).count(), count);
    }
}

// =============================================================================
// Adapter Laws
// =============================================================================

proptest! {
    /// map agrees with mapping over the vector.
    #[test]
    fn prop_map_matches_vec(values in arb_values()) {
        let expected: Vec<i32> = values.iter().map(|x| x * 3).collect();
        prop_assert_eq!(from_slice(&values).map(|x| x * 3).collect_vec(), expected);
    }

    /// filter agrees with filtering the vector.
    #[test]
    fn prop_filter_matches_vec(values in arb_values()) {
        let expected: Vec<i32> = values.iter().copied().filter(|x| x % 3 == 0).collect();
        prop_assert_eq!(from_slice(&values).filter(|x| x % 3 == 0).collect_vec(), expected);
    }

    /// take(n) ++ drop(n) reassembles the input.
    #[test]
    fn prop_take_drop_partition(values in arb_values(), count in 0..40_usize) {
        let mut reassembled = from_slice(&values).take(count).collect_vec();
        reassembled.extend(from_slice(&values).drop(count).collect_vec());
        prop_assert_eq!(reassembled, values);
    }

    /// take_while ++ drop_while reassembles the input.
    #[test]
    fn prop_take_while_drop_while_partition(values in arb_values(), bound: i32) {
        let mut reassembled = from_slice(&values).take_while(|x| *x < bound).collect_vec();
        reassembled.extend(from_slice(&values).drop_while(|x| *x < bound).collect_vec());
        prop_assert_eq!(reassembled, values);
    }

    /// chain agrees with concatenation.
    #[test]
    fn prop_chain_is_concatenation(left in arb_values(), right in arb_values()) {
        let expected: Vec<i32> = left.iter().chain(right.iter()).copied().collect();
        prop_assert_eq!(from_slice(&left).chain(from_slice(&right)).collect_vec(), expected);
    }

    /// flatten agrees with concatenating every inner vector.
    #[test]
    fn prop_flatten_is_concat(nested in prop::collection::vec(arb_values(), 0..8)) {
        let expected: Vec<i32> = nested.concat();
        let inners = nested.iter().map(|inner| from_slice(inner)).collect();
        prop_assert_eq!(from_vec(inners).flatten().collect_vec(), expected);
    }

    /// nth(i) agrees with indexing.
    #[test]
    fn prop_nth_matches_index(values in arb_values(), index in 0..40_usize) {
        let expected = Optional::from(values.get(index).copied());
        prop_assert_eq!(from_slice(&values).nth(index), expected);
    }
}

// =============================================================================
// Terminal Operation Laws
// =============================================================================

proptest! {
    /// An iterator is equal to itself; changing one element breaks equality.
    #[test]
    fn prop_equal_detects_difference(values in prop::collection::vec(any::<i32>(), 1..16), index in any::<prop::sample::Index>()) {
        prop_assert!(from_slice(&values).equal(from_slice(&values)));

        let mut changed = values.clone();
        let position = index.index(changed.len());
        changed[position] = changed[position].wrapping_add(1);
        prop_assert!(!from_slice(&values).equal(from_slice(&changed)));
    }

    /// all and any are duals.
    #[test]
    fn prop_all_any_duality(values in arb_values(), bound: i32) {
        let all = from_slice(&values).all(|x| x < bound);
        let any = from_slice(&values).any(|x| x >= bound);
        prop_assert_eq!(all, !any);
    }
}

// =============================================================================
// Fuse Laws
// =============================================================================

proptest! {
    /// Once a fused iterator reports exhaustion it stays exhausted, whatever
    /// the wrapped source does afterwards.
    #[test]
    fn prop_fuse_is_sticky(pattern in prop::collection::vec(any::<bool>(), 1..32), extra in 1..16_usize) {
        let mut cursor = 0;
        let source_pattern = pattern.clone();
        let mut fused = from_fn(move || {
            let present = source_pattern.get(cursor).copied().unwrap_or(true);
            cursor += 1;
            if present { Optional::Present(cursor) } else { Optional::Absent }
        })
        .fuse();

        let leading = pattern.iter().take_while(|present| **present).count();
        for _ in 0..leading {
            prop_assert!(fused.next().is_present());
        }
        if leading < pattern.len() {
            for _ in 0..extra {
                prop_assert!(fused.next().is_absent());
            }
        }
    }
}
