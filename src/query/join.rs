//! Predicate joins between two sequences.

use crate::grouping::{self, Group};
use std::hash::Hash;

/// Pairs each element of `sequence` with every element of `with_sequence`
/// that `matcher` accepts for it.
///
/// Pair order is the scan order: `sequence` outer, `with_sequence` inner.
/// Elements with no match contribute no pairs (an inner join).
///
/// # Examples
///
/// ```rust
/// use sequery::query::join;
///
/// let customers = ["ada", "brin"];
/// let orders = [("ada", 12), ("ada", 17), ("curt", 9)];
///
/// let placed = join(&customers, &orders, |customer, order| *customer == order.0);
/// assert_eq!(placed, vec![("ada", ("ada", 12)), ("ada", ("ada", 17))]);
/// ```
pub fn join<T, U, M>(sequence: &[T], with_sequence: &[U], mut matcher: M) -> Vec<(T, U)>
where
    T: Clone,
    U: Clone,
    M: FnMut(&T, &U) -> bool,
{
    let mut pairs = Vec::new();
    for left in sequence {
        for right in with_sequence {
            if matcher(left, right) {
                pairs.push((left.clone(), right.clone()));
            }
        }
    }
    pairs
}

/// Joins two sequences and groups the resulting pairs by their left
/// element.
///
/// Each group is keyed by an element of `sequence` that matched at least
/// once; its items are that element's pairs, in join order.
///
/// # Examples
///
/// ```rust
/// use sequery::query::join_group;
///
/// let customers = ["ada", "brin"];
/// let orders = [("ada", 12), ("ada", 17), ("brin", 3)];
///
/// let by_customer = join_group(&customers, &orders, |customer, order| *customer == order.0);
/// assert_eq!(by_customer.len(), 2);
///
/// let ada = by_customer.iter().find(|group| *group.key() == "ada").unwrap();
/// assert_eq!(ada.len(), 2);
/// ```
pub fn join_group<T, U, M>(
    sequence: &[T],
    with_sequence: &[U],
    matcher: M,
) -> Vec<Group<T, (T, U)>>
where
    T: Clone + Eq + Hash,
    U: Clone,
    M: FnMut(&T, &U) -> bool,
{
    let pairs = join(sequence, with_sequence, matcher);
    grouping::group_by(&pairs, |(left, _)| left.clone())
}
