//! Property-based tests for Optional<T>.
//!
//! Checks the functor laws for `map` and the consistency of the extraction
//! operations with the standard `Option`.

use lazyseq::optional::Optional;
use proptest::prelude::*;

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_optional_i32() -> impl Strategy<Value = Optional<i32>> {
    any::<Option<i32>>().prop_map(Optional::from)
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// value.map(|x| x) == value
    #[test]
    fn prop_map_identity(value in arb_optional_i32()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    /// value.map(f).map(g) == value.map(|x| g(f(x)))
    #[test]
    fn prop_map_composition(value in arb_optional_i32()) {
        let function = |x: i32| x.wrapping_mul(3);
        let other = |x: i32| x.wrapping_sub(7);

        prop_assert_eq!(value.map(function).map(other), value.map(|x| other(function(x))));
    }
}

// =============================================================================
// Extraction Consistency
// =============================================================================

proptest! {
    /// Present values are immutable: repeated extraction yields the same value.
    #[test]
    fn prop_present_extraction_is_stable(x: i32) {
        let value = Optional::present(x);
        prop_assert_eq!(value.unwrap(), x);
        prop_assert_eq!(value.unwrap(), value.unwrap());
    }

    /// is_present and is_absent are complementary.
    #[test]
    fn prop_queries_are_complementary(value in arb_optional_i32()) {
        prop_assert_ne!(value.is_present(), value.is_absent());
    }

    /// unwrap_or agrees with Option::unwrap_or.
    #[test]
    fn prop_unwrap_or_matches_option(option: Option<i32>, default: i32) {
        prop_assert_eq!(Optional::from(option).unwrap_or(default), option.unwrap_or(default));
    }

    /// Converting to Option and back is lossless.
    #[test]
    fn prop_option_roundtrip(value in arb_optional_i32()) {
        let option: Option<i32> = value.into();
        prop_assert_eq!(Optional::from(option), value);
    }
}
