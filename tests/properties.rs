#![cfg(feature = "sequence")]

use proptest::collection::vec;
use proptest::prelude::*;
use sequence_utils::sequence::{self, Sequence};

// A narrow value range so that duplicates and matches are common.
fn values() -> impl Strategy<Value = Vec<i8>> {
    vec(-6_i8..6, 0..40)
}

fn sequences() -> impl Strategy<Value = Sequence<i8>> {
    prop_oneof![
        1 => Just(Sequence::Absent),
        4 => values().prop_map(Sequence::from),
    ]
}

proptest! {
    #[test]
    fn merge_concatenates(first in sequences(), second in sequences()) {
        let merged = sequence::merge(first.clone(), second.clone());

        prop_assert!(merged.is_present());
        prop_assert_eq!(merged.len(), first.len() + second.len());
        prop_assert_eq!(&merged[..first.len()], &first[..]);
        prop_assert_eq!(&merged[first.len()..], &second[..]);
    }

    #[test]
    fn exclude_removes_only_target(elements in sequences(), target in -6_i8..6) {
        let expected: Vec<i8> = elements.iter().copied().filter(|v| *v != target).collect();
        let was_absent = elements.is_absent();
        let result = sequence::exclude(elements, &target);

        prop_assert_eq!(result.is_absent(), was_absent);
        prop_assert!(!result.iter().any(|v| *v == target));
        prop_assert_eq!(&result[..], &expected[..]);
    }

    #[test]
    fn contains_matches_linear_scan(elements in sequences(), target in -8_i8..8) {
        prop_assert_eq!(
            sequence::contains(&elements, &target),
            elements.iter().any(|v| *v == target)
        );
    }

    #[test]
    fn map_preserves_positions(elements in sequences()) {
        let f = |v: i8| i32::from(v) * 10 - 1;
        let result = sequence::map(elements.clone(), f);

        prop_assert!(result.is_present());
        prop_assert_eq!(result.len(), elements.len());
        for (index, value) in elements.iter().enumerate() {
            prop_assert_eq!(result[index], f(*value));
        }
    }

    #[test]
    fn filter_keeps_matches_in_order(elements in sequences(), modulus in 1_i8..4) {
        let predicate = |v: &i8| v.rem_euclid(modulus) == 0;
        let expected: Vec<i8> = elements.iter().copied().filter(predicate).collect();
        let result = sequence::filter(elements, predicate);

        prop_assert!(result.iter().all(predicate));
        prop_assert_eq!(&result[..], &expected[..]);
        prop_assert_eq!(result.is_absent(), expected.is_empty());
    }

    #[test]
    fn unique_keeps_first_occurrences(elements in sequences()) {
        let mut expected: Vec<i8> = Vec::new();
        for value in elements.iter() {
            if !expected.contains(value) {
                expected.push(*value);
            }
        }

        let len = elements.len();
        let result = sequence::unique(elements);

        prop_assert!(result.len() <= len);
        for (i, a) in result.iter().enumerate() {
            prop_assert!(!result[i + 1..].contains(a));
        }
        prop_assert_eq!(&result[..], &expected[..]);
        prop_assert_eq!(result.is_absent(), expected.is_empty());
    }
}

#[test]
fn merge_of_absent_is_present() {
    let merged = sequence::merge(Sequence::<i8>::absent(), Sequence::absent());
    assert_eq!(merged, Sequence::new());
    assert!(!merged.is_absent());
}

#[test]
fn concrete_scenarios() {
    assert_eq!(
        *sequence::merge(Sequence::from([7, 8, 9]), Sequence::from([10, 11, 12])),
        [7, 8, 9, 10, 11, 12]
    );
    assert_eq!(
        *sequence::exclude(Sequence::from([1, 2, 3, 3, 4, 3, 5]), &3),
        [1, 2, 4, 5]
    );
    assert!(sequence::contains(
        &Sequence::from(["alpha", "beta", "gamma"]),
        &"beta"
    ));
    assert_eq!(
        *sequence::map(Sequence::from([1, 2, 3]), |x| x * 10),
        [10, 20, 30]
    );
    assert_eq!(
        sequence::filter(Sequence::from([1, 2, 3, 4, 5]), |x| x % 2 == 0),
        Sequence::from([2, 4])
    );
    assert_eq!(
        sequence::filter(Sequence::from([1, 3, 5]), |x| x % 2 == 0),
        Sequence::Absent
    );
    assert_eq!(
        *sequence::unique(Sequence::from([1, 2, 2, 3, 4, 4, 5])),
        [1, 2, 3, 4, 5]
    );
}
