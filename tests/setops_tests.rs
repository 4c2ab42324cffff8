//! Unit tests for the set-algebra operations.
//!
//! These pin the documented first-occurrence ordering, the zero-input
//! edges, and the deliberately non-standard multi-sequence `difference`.

#![cfg(feature = "setops")]

use rstest::rstest;
use sequery::setops::{difference, distinct, intersection, union};

#[rstest]
fn distinct_removes_duplicates_in_first_occurrence_order() {
    assert_eq!(distinct(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
}

#[rstest]
fn distinct_of_empty_sequence_is_empty() {
    assert_eq!(distinct::<i32>(&[]), Vec::<i32>::new());
}

#[rstest]
fn distinct_works_on_unhashable_equality() {
    // Only PartialEq is required, so float elements are fine.
    assert_eq!(distinct(&[1.5, 2.5, 1.5]), vec![1.5, 2.5]);
}

#[rstest]
fn union_concatenates_then_deduplicates() {
    let low = [1, 2];
    let mid = [2, 3];
    let high = [3, 4];

    assert_eq!(union([&low[..], &mid[..], &high[..]]), vec![1, 2, 3, 4]);
}

#[rstest]
fn union_keeps_the_first_occurrence_across_sequences() {
    let first = ["b", "a"];
    let second = ["a", "c", "b"];

    assert_eq!(union([&first[..], &second[..]]), vec!["b", "a", "c"]);
}

#[rstest]
fn union_of_no_sequences_is_empty() {
    let sequences: Vec<&[i32]> = Vec::new();
    assert_eq!(union(sequences), Vec::<i32>::new());
}

#[rstest]
fn union_of_a_single_sequence_equals_distinct() {
    let sequence = [5, 5, 6];
    assert_eq!(union([&sequence[..]]), distinct(&sequence));
}

#[rstest]
fn intersection_keeps_elements_common_to_every_sequence() {
    let left = [1, 2, 3];
    let right = [2, 3, 4];

    assert_eq!(intersection([&left[..], &right[..]]), vec![2, 3]);
}

#[rstest]
fn intersection_of_disjoint_sequences_is_empty() {
    let left = [1, 2];
    let right = [3, 4];

    assert_eq!(intersection([&left[..], &right[..]]), Vec::<i32>::new());
}

#[rstest]
fn intersection_of_no_sequences_is_empty() {
    // The vacuous "common to all of nothing" is documented as empty.
    let sequences: Vec<&[i32]> = Vec::new();
    assert_eq!(intersection(sequences), Vec::<i32>::new());
}

#[rstest]
fn intersection_of_a_single_sequence_is_its_distinct_elements() {
    let sequence = [2, 1, 2, 3];
    assert_eq!(intersection([&sequence[..]]), vec![2, 1, 3]);
}

#[rstest]
fn intersection_order_follows_the_union_of_the_inputs() {
    let left = [3, 1, 2];
    let right = [2, 3];

    // Union order is [3, 1, 2]; of those, 3 and 2 survive.
    assert_eq!(intersection([&left[..], &right[..]]), vec![3, 2]);
}

#[rstest]
fn intersection_ignores_duplicates_inside_the_inputs() {
    let left = [2, 2, 5];
    let right = [5, 2, 2];

    assert_eq!(intersection([&left[..], &right[..]]), vec![2, 5]);
}

#[rstest]
fn difference_removes_elements_present_in_the_other_sequence() {
    let from = [1, 2, 3];
    assert_eq!(difference(&from, [&[2][..]]), vec![1, 3]);
}

#[rstest]
fn difference_with_no_other_sequences_is_empty() {
    let from = [1, 2, 3];
    let others: Vec<&[i32]> = Vec::new();
    assert_eq!(difference(&from, others), Vec::<i32>::new());
}

#[rstest]
fn difference_deduplicates_the_from_sequence() {
    let from = [1, 1, 2];
    assert_eq!(difference(&from, [&[2][..]]), vec![1]);
}

#[rstest]
fn difference_admits_elements_absent_from_at_least_one_other_sequence() {
    // Not a standard set difference: 2 is present in the first others
    // sequence but absent from the second, and 3 vice versa, so every
    // element of `from` is admitted. The first pass over [2] admits 1 and
    // 3; the second pass over [3] admits 2.
    let from = [1, 2, 3];
    let admitted = difference(&from, [&[2][..], &[3][..]]);
    assert_eq!(admitted, vec![1, 3, 2]);
}

#[rstest]
fn difference_of_identical_sequences_is_empty() {
    let from = [4, 5];
    assert_eq!(difference(&from, [&from[..]]), Vec::<i32>::new());
}
