//! Property-based tests for the crate's algebraic contracts.

use proptest::prelude::*;
use u_seqkit::combinations::{combinations, CombinationGenerator};
use u_seqkit::delimited::DelimitedCodec;
use u_seqkit::equivalence::{
    distinct, symmetric_difference, EqualityStrategy, SequenceComparator,
};
use u_seqkit::grouping::ConditionalGrouper;

proptest! {
    #[test]
    fn combination_count_is_two_to_n_minus_one(
        values in proptest::collection::hash_set(0i32..100, 0..8),
    ) {
        let values: Vec<i32> = values.into_iter().collect();
        let n = values.len() as u32;
        prop_assert_eq!(combinations(&values).len(), 2usize.pow(n) - 1);
    }

    #[test]
    fn combinations_ignore_duplicates(
        values in proptest::collection::vec(0i32..10, 0..10),
    ) {
        let mut on_source = combinations(&values);
        let mut on_distinct = combinations(&distinct(&values));
        on_source.sort();
        on_distinct.sort();
        prop_assert_eq!(on_source, on_distinct);
    }

    #[test]
    fn combination_contents_never_repeat(
        values in proptest::collection::vec(0i32..6, 0..10),
    ) {
        let result = combinations(&values);
        let mut contents = result.clone();
        contents.sort();
        contents.dedup();
        prop_assert_eq!(contents.len(), result.len());
    }

    #[test]
    fn oversized_minimum_is_empty_not_error(
        values in proptest::collection::vec(0i32..10, 0..6),
    ) {
        let beyond = distinct(&values).len() + 1;
        let result = CombinationGenerator::new()
            .with_minimum_items(beyond)
            .generate(&values)
            .unwrap();
        prop_assert!(result.is_empty());
    }

    #[test]
    fn combination_sizes_respect_window(
        values in proptest::collection::vec(0i32..20, 0..8),
        minimum in 1usize..4,
        extra in 0usize..3,
    ) {
        let maximum = minimum + extra;
        let result = CombinationGenerator::new()
            .with_minimum_items(minimum)
            .with_maximum_items(maximum)
            .generate(&values)
            .unwrap();
        prop_assert!(result.iter().all(|c| c.len() >= minimum && c.len() <= maximum));
    }

    #[test]
    fn symmetric_difference_with_self_is_empty(
        values in proptest::collection::vec(0i32..50, 0..20),
    ) {
        prop_assert!(symmetric_difference(&values, &values).is_empty());
    }

    #[test]
    fn symmetric_difference_is_symmetric(
        a in proptest::collection::vec(0i32..20, 0..15),
        b in proptest::collection::vec(0i32..20, 0..15),
    ) {
        let mut ab = symmetric_difference(&a, &b);
        let mut ba = symmetric_difference(&b, &a);
        ab.sort();
        ba.sort();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn symmetric_difference_output_is_distinct(
        a in proptest::collection::vec(0i32..10, 0..15),
        b in proptest::collection::vec(0i32..10, 0..15),
    ) {
        let out = symmetric_difference(&a, &b);
        prop_assert_eq!(distinct(&out).len(), out.len());
    }

    #[test]
    fn strategy_strength_ordering(
        a in proptest::collection::vec(0i32..5, 0..6),
        b in proptest::collection::vec(0i32..5, 0..6),
    ) {
        let sequence = SequenceComparator::new(EqualityStrategy::SequenceEqual)
            .are_equal(Some(a.as_slice()), Some(b.as_slice()));
        let unordered = SequenceComparator::new(EqualityStrategy::UnorderedEqual)
            .are_equal(Some(a.as_slice()), Some(b.as_slice()));
        let set = SequenceComparator::new(EqualityStrategy::SymmetricDifferenceEqual)
            .are_equal(Some(a.as_slice()), Some(b.as_slice()));
        prop_assert!(!sequence || unordered);
        prop_assert!(!unordered || set);
    }

    #[test]
    fn set_equality_matches_empty_symmetric_difference(
        a in proptest::collection::vec(0i32..8, 0..10),
        b in proptest::collection::vec(0i32..8, 0..10),
    ) {
        let set = SequenceComparator::new(EqualityStrategy::SymmetricDifferenceEqual)
            .are_equal(Some(a.as_slice()), Some(b.as_slice()));
        prop_assert_eq!(set, symmetric_difference(&a, &b).is_empty());
    }

    #[test]
    fn grouping_partitions_and_preserves_order(
        values in proptest::collection::vec(0u32..30, 0..20),
    ) {
        let grouper = ConditionalGrouper::new().with_selector(|v: &u32| v % 3);
        let groups = grouper.group_indices(&values);
        for (_, indices) in &groups {
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        }
        let mut covered: Vec<usize> = groups.into_iter().flat_map(|(_, idx)| idx).collect();
        covered.sort();
        prop_assert_eq!(covered, (0..values.len()).collect::<Vec<_>>());
    }

    #[test]
    fn zero_active_selectors_return_everything_in_order(
        values in proptest::collection::vec(0i32..100, 0..20),
    ) {
        let grouper: ConditionalGrouper<i32, i32> =
            ConditionalGrouper::new().with_unset_slot().with_unset_slot();
        let groups = grouper.group(&values);
        prop_assert_eq!(groups.len(), 1);
        prop_assert!(groups[0].key.is_empty());
        prop_assert_eq!(&groups[0].items, &values);
    }

    #[test]
    fn delimited_round_trip(
        values in proptest::collection::vec(proptest::option::of("[ab,\"x]{0,6}"), 1..8),
    ) {
        let codec = DelimitedCodec::new();
        let record = codec.join(&values);
        prop_assert_eq!(codec.split(&record).unwrap(), values);
    }
}
