//! Unit tests for grouping.
//!
//! These cover plain hashed grouping, the key-matching predicate, the
//! value transform, and the `Group` type's surface. Groups are looked up
//! by key, never by position - the output order is unspecified.

#![cfg(feature = "grouping")]

use rstest::rstest;
use sequery::grouping::{Group, group_by, group_by_full, group_by_matching};

fn group_with_key<'a, K: PartialEq, T>(groups: &'a [Group<K, T>], key: &K) -> &'a Group<K, T> {
    groups
        .iter()
        .find(|group| group.key() == key)
        .expect("expected a group for the key")
}

#[rstest]
fn parity_grouping_produces_two_groups_with_insertion_order_kept() {
    let numbers = [1, 2, 3, 4];
    let by_parity = group_by(&numbers, |number| number % 2);

    assert_eq!(by_parity.len(), 2);
    assert_eq!(group_with_key(&by_parity, &0).items(), &[2, 4]);
    assert_eq!(group_with_key(&by_parity, &1).items(), &[1, 3]);
}

#[rstest]
fn grouping_an_empty_sequence_produces_no_groups() {
    let numbers: [i32; 0] = [];
    assert!(group_by(&numbers, |number| number % 2).is_empty());
}

#[rstest]
fn grouping_preserves_every_item_exactly_once() {
    let words = ["ox", "elk", "owl", "eel", "emu"];
    let by_initial = group_by(&words, |word| word.as_bytes()[0]);

    let total: usize = by_initial.iter().map(Group::len).sum();
    assert_eq!(total, words.len());
}

#[rstest]
fn always_true_match_collapses_everything_into_the_first_key() {
    let numbers = [7, 8, 9];
    let collapsed = group_by_matching(&numbers, |number| *number, &|_, _| true);

    assert_eq!(collapsed.len(), 1);
    assert_eq!(*collapsed[0].key(), 7);
    assert_eq!(collapsed[0].items(), &[7, 8, 9]);
}

#[rstest]
fn never_true_match_degenerates_to_plain_grouping() {
    let numbers = [1, 2, 1];
    let groups = group_by_matching(&numbers, |number| *number, &|_, _| false);

    assert_eq!(groups.len(), 2);
    assert_eq!(group_with_key(&groups, &1).items(), &[1, 1]);
    assert_eq!(group_with_key(&groups, &2).items(), &[2]);
}

#[rstest]
fn case_insensitive_match_reuses_the_first_seen_casing() {
    let codes = ["DE", "fr", "de", "FR"];
    let by_country = group_by_matching(
        &codes,
        |code| (*code).to_string(),
        &|derived: &String, existing| derived.eq_ignore_ascii_case(existing),
    );

    assert_eq!(by_country.len(), 2);
    assert_eq!(group_with_key(&by_country, &"DE".to_string()).items(), &["DE", "de"]);
    assert_eq!(group_with_key(&by_country, &"fr".to_string()).items(), &["fr", "FR"]);
}

#[rstest]
fn value_transform_stores_transformed_items() {
    let numbers = [1, 2];
    let doubled = group_by_full(&numbers, |number| number % 2, None, Some(&|number| number * 2));

    assert_eq!(group_with_key(&doubled, &1).items(), &[2]);
    assert_eq!(group_with_key(&doubled, &0).items(), &[4]);
}

#[rstest]
fn key_derivation_ignores_the_value_transform() {
    let numbers = [3];
    let shifted = group_by_full(&numbers, |number| *number, None, Some(&|number| number + 100));

    assert_eq!(*shifted[0].key(), 3);
    assert_eq!(shifted[0].items(), &[103]);
}

#[rstest]
fn match_predicate_and_value_transform_combine() {
    let words = ["Ada", "ada", "Bo"].map(String::from);
    let upper = group_by_full(
        &words,
        |word| word.clone(),
        Some(&|derived: &String, existing| derived.eq_ignore_ascii_case(existing)),
        Some(&|word| word.to_uppercase()),
    );

    assert_eq!(upper.len(), 2);
    assert_eq!(group_with_key(&upper, &"Ada".to_string()).items(), &["ADA", "ADA"]);
    assert_eq!(group_with_key(&upper, &"Bo".to_string()).items(), &["BO"]);
}

#[rstest]
fn group_display_matches_the_documented_shape() {
    let numbers = [1, 2, 3, 4];
    let by_parity = group_by(&numbers, |number| number % 2);

    let odd = group_with_key(&by_parity, &1);
    assert_eq!(format!("{odd}"), "1: [1, 3]");
}

#[rstest]
fn group_iterates_items_in_insertion_order() {
    let numbers = [5, 6, 7];
    let groups = group_by(&numbers, |_| "all");

    let borrowed: Vec<&i32> = groups[0].iter().collect();
    assert_eq!(borrowed, vec![&5, &6, &7]);

    let owned: Vec<i32> = groups.into_iter().next().unwrap().into_iter().collect();
    assert_eq!(owned, vec![5, 6, 7]);
}

#[rstest]
fn groups_are_independent_of_each_other() {
    let numbers = [1, 2, 3];
    let mut groups = group_by(&numbers, |number| number % 2);

    let extended = groups
        .iter_mut()
        .find(|group| *group.key() == 0)
        .expect("expected the even group");
    extended.push(10);

    assert_eq!(group_with_key(&groups, &0).items(), &[2, 10]);
    assert_eq!(group_with_key(&groups, &1).items(), &[1, 3]);
}
