//! The `Sequence` extension trait.

use crate::grouping::{self, Group};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// LINQ-style queries for ordered sequences.
///
/// Implemented for `[T]`, so the methods are available on slices, arrays,
/// and `Vec`s alike. Every method borrows the receiver and returns a new
/// value; the sequence itself is never mutated.
///
/// Absent results are expressed as `None` or an empty `Vec`, never by
/// panicking.
///
/// # Examples
///
/// ```rust
/// use sequery::query::Sequence;
///
/// let words = ["strap", "parts", "traps", "sun"];
///
/// assert_eq!(words.filter_indexed(|_, index| index % 2 == 0), vec!["strap", "traps"]);
/// assert!(words.exists(|word| word.len() == 3));
/// assert_eq!(words.index_of(&"sun"), Some(3));
/// ```
pub trait Sequence<T> {
    /// Clones the sequence into a `Vec`.
    fn to_array(&self) -> Vec<T>
    where
        T: Clone;

    /// Keeps the elements whose value and position satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::query::Sequence;
    ///
    /// let letters = ["a", "b", "c", "d"];
    /// let at_even_positions = letters.filter_indexed(|_, index| index % 2 == 0);
    /// assert_eq!(at_even_positions, vec!["a", "c"]);
    /// ```
    fn filter_indexed<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize) -> bool;

    /// Returns the first element satisfying `predicate`, or `None`.
    fn find_where<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// Returns the first element satisfying `predicate`, or the value
    /// produced by `fallback` when none does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::query::Sequence;
    ///
    /// let numbers = [1, 2, 3];
    /// assert_eq!(numbers.find_where_or(|n| *n > 2, || 0), 3);
    /// assert_eq!(numbers.find_where_or(|n| *n > 9, || 0), 0);
    /// ```
    fn find_where_or<P, F>(&self, predicate: P, fallback: F) -> T
    where
        T: Clone,
        P: FnMut(&T) -> bool,
        F: FnOnce() -> T;

    /// Returns whether any element satisfies `predicate`.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// Returns whether every element satisfies `predicate`.
    ///
    /// Vacuously true for an empty sequence.
    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// Maps each element to an optional sub-sequence and concatenates the
    /// produced sub-sequences, skipping the `None`s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::query::Sequence;
    ///
    /// let numbers = [1, 2, 3];
    /// let expanded = numbers.expand(|n| {
    ///     if n % 2 == 1 { Some(vec![*n, *n * 10]) } else { None }
    /// });
    /// assert_eq!(expanded, vec![1, 10, 3, 30]);
    /// ```
    fn expand<R, F>(&self, produce: F) -> Vec<R>
    where
        F: FnMut(&T) -> Option<Vec<R>>;

    /// Returns the first `count` elements, or the whole sequence when it
    /// is shorter than `count`.
    fn take_first(&self, count: usize) -> Vec<T>
    where
        T: Clone;

    /// Returns the elements after the first `count`, or an empty `Vec`
    /// when the sequence is shorter than `count`.
    fn skip_first(&self, count: usize) -> Vec<T>
    where
        T: Clone;

    /// Returns the leading elements for which `predicate` holds, stopping
    /// at the first that fails it.
    fn take_while_true<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// Skips the leading elements for which `predicate` holds and returns
    /// the rest, starting with the first that fails it.
    fn skip_while_true<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// Returns a sorted copy, ordered by `comparer`.
    ///
    /// The sort is the standard library's stable sort; equal elements keep
    /// their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::query::Sequence;
    ///
    /// let numbers = [3, 1, 2];
    /// assert_eq!(numbers.sorted_by(|a, b| a.cmp(b)), vec![1, 2, 3]);
    /// assert_eq!(numbers.sorted_by(|a, b| b.cmp(a)), vec![3, 2, 1]);
    /// ```
    fn sorted_by<C>(&self, comparer: C) -> Vec<T>
    where
        T: Clone,
        C: FnMut(&T, &T) -> Ordering;

    /// Returns a sorted copy, applying each comparer in turn until one
    /// breaks the tie.
    ///
    /// Later comparers only run when all earlier ones returned
    /// [`Ordering::Equal`]; two elements every comparer considers equal
    /// keep their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::query::Sequence;
    ///
    /// let points = [(1, "b"), (0, "c"), (1, "a")];
    /// let sorted = points.sorted_by_comparers(&[
    ///     &|left, right| left.0.cmp(&right.0),
    ///     &|left, right| left.1.cmp(right.1),
    /// ]);
    /// assert_eq!(sorted, vec![(0, "c"), (1, "a"), (1, "b")]);
    /// ```
    fn sorted_by_comparers(&self, comparers: &[&dyn Fn(&T, &T) -> Ordering]) -> Vec<T>
    where
        T: Clone;

    /// Returns the position of the first element equal to `needle`, or
    /// `None` when the sequence holds no such element.
    fn index_of(&self, needle: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Builds a map from derived key to element.
    ///
    /// When several elements derive the same key, the last occurrence
    /// wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::query::Sequence;
    ///
    /// let words = ["spin", "swim", "park"];
    /// let by_initial = words.to_dictionary(|word| word.as_bytes()[0]);
    /// assert_eq!(by_initial[&b's'], "swim");
    /// assert_eq!(by_initial[&b'p'], "park");
    /// ```
    fn to_dictionary<K, F>(&self, key_fn: F) -> HashMap<K, T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    /// Groups the elements by the key `key_fn` derives from each.
    ///
    /// See [`grouping::group_by`].
    fn group_by<K, F>(&self, key_fn: F) -> Vec<Group<K, T>>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K;

    /// Groups the elements, reusing an existing bucket whenever
    /// `match_with` accepts its key for the newly derived one.
    ///
    /// See [`grouping::group_by_matching`].
    fn group_by_matching<K, F>(
        &self,
        key_fn: F,
        match_with: &dyn Fn(&K, &K) -> bool,
    ) -> Vec<Group<K, T>>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K;

    /// The full grouping pass with an optional key-matching predicate and
    /// an optional value transform.
    ///
    /// See [`grouping::group_by_full`].
    fn group_by_full<K, F>(
        &self,
        key_fn: F,
        match_with: Option<&dyn Fn(&K, &K) -> bool>,
        value_as: Option<&dyn Fn(&T) -> T>,
    ) -> Vec<Group<K, T>>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K;
}

impl<T> Sequence<T> for [T] {
    fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_vec()
    }

    fn filter_indexed<P>(&self, mut predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .filter(|&(index, element)| predicate(element, index))
            .map(|(_, element)| element.clone())
            .collect()
    }

    fn find_where<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|&element| predicate(element))
    }

    fn find_where_or<P, F>(&self, predicate: P, fallback: F) -> T
    where
        T: Clone,
        P: FnMut(&T) -> bool,
        F: FnOnce() -> T,
    {
        self.find_where(predicate)
            .cloned()
            .unwrap_or_else(fallback)
    }

    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    fn expand<R, F>(&self, mut produce: F) -> Vec<R>
    where
        F: FnMut(&T) -> Option<Vec<R>>,
    {
        let mut expanded = Vec::new();
        for element in self {
            if let Some(mut produced) = produce(element) {
                expanded.append(&mut produced);
            }
        }
        expanded
    }

    fn take_first(&self, count: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().take(count).cloned().collect()
    }

    fn skip_first(&self, count: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().skip(count).cloned().collect()
    }

    fn take_while_true<P>(&self, mut predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .take_while(|&element| predicate(element))
            .cloned()
            .collect()
    }

    fn skip_while_true<P>(&self, mut predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .skip_while(|&element| predicate(element))
            .cloned()
            .collect()
    }

    fn sorted_by<C>(&self, comparer: C) -> Vec<T>
    where
        T: Clone,
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut sorted = self.to_vec();
        sorted.sort_by(comparer);
        sorted
    }

    fn sorted_by_comparers(&self, comparers: &[&dyn Fn(&T, &T) -> Ordering]) -> Vec<T>
    where
        T: Clone,
    {
        let mut sorted = self.to_vec();
        sorted.sort_by(|left, right| {
            comparers
                .iter()
                .map(|comparer| comparer(left, right))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });
        sorted
    }

    fn index_of(&self, needle: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == needle)
    }

    fn to_dictionary<K, F>(&self, mut key_fn: F) -> HashMap<K, T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut dictionary = HashMap::new();
        for element in self {
            dictionary.insert(key_fn(element), element.clone());
        }
        dictionary
    }

    fn group_by<K, F>(&self, key_fn: F) -> Vec<Group<K, T>>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        grouping::group_by(self, key_fn)
    }

    fn group_by_matching<K, F>(
        &self,
        key_fn: F,
        match_with: &dyn Fn(&K, &K) -> bool,
    ) -> Vec<Group<K, T>>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        grouping::group_by_matching(self, key_fn, match_with)
    }

    fn group_by_full<K, F>(
        &self,
        key_fn: F,
        match_with: Option<&dyn Fn(&K, &K) -> bool>,
        value_as: Option<&dyn Fn(&T) -> T>,
    ) -> Vec<Group<K, T>>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        grouping::group_by_full(self, key_fn, match_with, value_as)
    }
}
