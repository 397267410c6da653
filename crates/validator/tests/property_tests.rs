//! Property tests for validator laws.

use intake_validator::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn min_length_accepts_iff_at_least(min in 0usize..16, input in ".{0,24}") {
        let valid = min_length(min).validate(&input).is_ok();
        prop_assert_eq!(valid, input.chars().count() >= min);
    }

    #[test]
    fn max_length_accepts_iff_at_most(max in 0usize..16, input in ".{0,24}") {
        let valid = max_length(max).validate(&input).is_ok();
        prop_assert_eq!(valid, input.chars().count() <= max);
    }

    #[test]
    fn exact_length_accepts_iff_equal(length in 0usize..16, input in ".{0,24}") {
        let valid = exact_length(length).validate(&input).is_ok();
        prop_assert_eq!(valid, input.chars().count() == length);
    }

    #[test]
    fn not_empty_accepts_iff_non_empty(input in ".{0,8}") {
        prop_assert_eq!(not_empty().validate(&input).is_ok(), !input.is_empty());
    }

    #[test]
    fn equals_accepts_iff_equal(expected in ".{0,8}", input in ".{0,8}") {
        let valid = equals(expected.clone()).validate(&input).is_ok();
        prop_assert_eq!(valid, input == expected);
    }

    #[test]
    fn and_passes_iff_both_pass(min in 0usize..8, max in 0usize..8, input in ".{0,12}") {
        let left = min_length(min).validate(&input).is_ok();
        let right = max_length(max).validate(&input).is_ok();
        let both = min_length(min).and(max_length(max)).validate(&input).is_ok();
        prop_assert_eq!(both, left && right);
    }

    #[test]
    fn or_passes_iff_either_passes(a in 0usize..8, b in 0usize..8, input in ".{0,12}") {
        let left = exact_length(a).validate(&input).is_ok();
        let right = exact_length(b).validate(&input).is_ok();
        let either = exact_length(a).or(exact_length(b)).validate(&input).is_ok();
        prop_assert_eq!(either, left || right);
    }

    #[test]
    fn not_inverts(min in 0usize..8, input in ".{0,12}") {
        let inner = min_length(min).validate(&input).is_ok();
        let inverted = not(min_length(min)).validate(&input).is_ok();
        prop_assert_eq!(inverted, !inner);
    }

    #[test]
    fn validation_is_idempotent(min in 0usize..8, input in ".{0,12}") {
        let v = min_length(min);
        let first = v.validate(&input).is_ok();
        let second = v.validate(&input).is_ok();
        prop_assert_eq!(first, second);
    }
}
