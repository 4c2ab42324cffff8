//! Grouping a sequence by a derived key.
//!
//! This module groups the elements of a slice by a key derived from each
//! element, producing one [`Group`] per distinct key. Two optional hooks
//! adjust the pass:
//!
//! - a **key-matching predicate** that overrides key equality: before a new
//!   bucket is opened for a derived key, the existing group keys are scanned
//!   and the first one the predicate accepts is reused instead. This is a
//!   deliberate `O(n·k)` relaxation of hashed grouping to support fuzzy key
//!   equivalence; without it, bucketing is hash-based.
//! - a **value transform** applied to each item before it is appended to its
//!   group. The key is always derived from the untransformed item.
//!
//! Group order in the result is unspecified - consumers must not rely on
//! it, nor on any relation between item order across groups. Within a
//! group, items keep the order of their first appearance in the source
//! sequence.
//!
//! # Examples
//!
//! ```rust
//! use sequery::grouping::group_by;
//!
//! let words = ["apple", "banana", "avocado", "blueberry"];
//! let by_initial = group_by(&words, |word| word.as_bytes()[0]);
//!
//! let a_words = by_initial.iter().find(|group| *group.key() == b'a').unwrap();
//! assert_eq!(a_words.items(), &["apple", "avocado"]);
//! ```

mod group;

pub use group::Group;

use smallvec::SmallVec;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Grouping passes rarely produce many distinct keys; the accumulator keeps
/// up to this many groups inline before spilling to the heap.
const INLINE_GROUPS: usize = 8;

/// Groups the elements of `sequence` by the key `key_fn` derives from each.
///
/// Buckets are keyed by value equality and hashing. Within a group, items
/// keep their order of appearance in `sequence`; the order of the groups
/// themselves is unspecified.
///
/// # Examples
///
/// ```rust
/// use sequery::grouping::group_by;
///
/// let numbers = [1, 2, 3, 4];
/// let by_parity = group_by(&numbers, |number| number % 2);
///
/// assert_eq!(by_parity.len(), 2);
/// let even = by_parity.iter().find(|group| *group.key() == 0).unwrap();
/// assert_eq!(even.items(), &[2, 4]);
/// ```
pub fn group_by<T, K, F>(sequence: &[T], key_fn: F) -> Vec<Group<K, T>>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    group_by_full(sequence, key_fn, None, None)
}

/// Groups the elements of `sequence`, reusing an existing bucket whenever
/// `match_with` accepts its key for the newly derived one.
///
/// `match_with` receives the derived key first and an existing group key
/// second. Existing keys are scanned in the order their groups were
/// created; the first accepted key wins. If none is accepted, the derived
/// key opens a new bucket.
///
/// # Examples
///
/// ```rust
/// use sequery::grouping::group_by_matching;
///
/// let codes = ["US", "us", "JP"];
/// let by_country = group_by_matching(
///     &codes,
///     |code| (*code).to_string(),
///     &|derived: &String, existing| derived.eq_ignore_ascii_case(existing),
/// );
///
/// assert_eq!(by_country.len(), 2);
/// let us = by_country.iter().find(|group| group.key() == "US").unwrap();
/// assert_eq!(us.items(), &["US", "us"]);
/// ```
pub fn group_by_matching<T, K, F>(
    sequence: &[T],
    key_fn: F,
    match_with: &dyn Fn(&K, &K) -> bool,
) -> Vec<Group<K, T>>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    group_by_full(sequence, key_fn, Some(match_with), None)
}

/// The full grouping pass: derived keys, an optional key-matching
/// predicate, and an optional value transform.
///
/// For each item, in sequence order:
///
/// 1. `key_fn` derives the grouping key from the (untransformed) item;
/// 2. if `match_with` is given, existing group keys are scanned in group
///    creation order and the first key the predicate accepts replaces the
///    derived one - otherwise the derived key opens a new bucket on first
///    sight;
/// 3. if `value_as` is given, it transforms the item;
/// 4. the (possibly transformed) item is appended to the bucket.
///
/// Storage is an insertion-ordered arena of groups plus a hash index from
/// key to arena slot, so plain grouping stays `O(n)` while the predicate
/// scan is `O(n·k)` over `k` buckets.
///
/// # Examples
///
/// ```rust
/// use sequery::grouping::group_by_full;
///
/// // Group by parity, storing doubled values.
/// let numbers = [1, 2];
/// let doubled = group_by_full(
///     &numbers,
///     |number| number % 2,
///     None,
///     Some(&|number| number * 2),
/// );
///
/// let odd = doubled.iter().find(|group| *group.key() == 1).unwrap();
/// assert_eq!(odd.items(), &[2]);
/// let even = doubled.iter().find(|group| *group.key() == 0).unwrap();
/// assert_eq!(even.items(), &[4]);
/// ```
pub fn group_by_full<T, K, F>(
    sequence: &[T],
    mut key_fn: F,
    match_with: Option<&dyn Fn(&K, &K) -> bool>,
    value_as: Option<&dyn Fn(&T) -> T>,
) -> Vec<Group<K, T>>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut groups: SmallVec<[Group<K, T>; INLINE_GROUPS]> = SmallVec::new();
    let mut slots: HashMap<K, usize> = HashMap::new();

    for item in sequence {
        let derived = key_fn(item);

        let key = match match_with {
            Some(matches) => groups
                .iter()
                .map(Group::key)
                .find(|&existing| matches(&derived, existing))
                .cloned()
                .unwrap_or(derived),
            None => derived,
        };

        let slot = match slots.entry(key) {
            Entry::Occupied(occupied) => *occupied.get(),
            Entry::Vacant(vacant) => {
                let slot = groups.len();
                groups.push(Group::new(vacant.key().clone()));
                vacant.insert(slot);
                slot
            }
        };

        let value = value_as.map_or_else(|| item.clone(), |transform| transform(item));
        groups[slot].push(value);
    }

    groups.into_vec()
}
