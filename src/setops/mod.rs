//! Set algebra over ordered sequences.
//!
//! This module provides [`distinct`], [`union`], [`intersection`], and
//! [`difference`] over one or more sequences of equatable elements. The
//! operations only require [`PartialEq`] - there is no hashing requirement -
//! so membership checks are linear scans and the overall cost is `O(n·m)`.
//! That trade-off is deliberate: the inputs are small, in-memory,
//! caller-owned slices, and value equality is the only relation the element
//! type has to offer.
//!
//! All results are new `Vec`s in **first-occurrence order**: an element
//! appears at the position of its first appearance across the inputs, and
//! never twice.
//!
//! # Examples
//!
//! ```rust
//! use sequery::setops::{distinct, union, intersection, difference};
//!
//! let first = [1, 2];
//! let second = [2, 3];
//!
//! assert_eq!(union([&first[..], &second[..]]), vec![1, 2, 3]);
//! assert_eq!(intersection([&first[..], &second[..]]), vec![2]);
//! assert_eq!(difference(&first, [&second[..]]), vec![1]);
//! assert_eq!(distinct(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
//! ```

/// Returns the elements of `sequence` in first-occurrence order with
/// duplicates removed.
///
/// Equality is the element type's value equality. Equivalent to
/// [`union`] over the single input sequence.
///
/// # Examples
///
/// ```rust
/// use sequery::setops::distinct;
///
/// assert_eq!(distinct(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// assert_eq!(distinct::<i32>(&[]), Vec::<i32>::new());
/// ```
///
/// # Laws
///
/// - **Idempotence**: `distinct(&distinct(xs)) == distinct(xs)`
/// - **Union consistency**: `distinct(xs) == union([xs])`
pub fn distinct<T>(sequence: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    union([sequence])
}

/// Concatenates the input sequences in argument order, then removes
/// duplicates by equality, keeping first-occurrence order across the
/// concatenation.
///
/// Accepts anything that iterates over slices: an array of slices, a
/// `Vec<&[T]>`, or an iterator producing them. Zero input sequences yield
/// an empty result.
///
/// # Examples
///
/// ```rust
/// use sequery::setops::union;
///
/// let low = [1, 2];
/// let mid = [2, 3];
/// let high = [3, 4];
///
/// assert_eq!(union([&low[..], &mid[..], &high[..]]), vec![1, 2, 3, 4]);
/// ```
pub fn union<'a, T, I>(sequences: I) -> Vec<T>
where
    T: Clone + PartialEq + 'a,
    I: IntoIterator<Item = &'a [T]>,
{
    let mut merged = Vec::new();
    for sequence in sequences {
        for element in sequence {
            if !merged.contains(element) {
                merged.push(element.clone());
            }
        }
    }
    merged
}

/// Returns the elements common to **every** input sequence.
///
/// The candidates are `union` of the inputs, so the result follows
/// first-occurrence order and contains no duplicates. A candidate survives
/// only if each input sequence holds at least one element equal to it.
///
/// Zero input sequences yield an empty result: the vacuous "common to all
/// of nothing" is not honored, because there are no candidates to begin
/// with.
///
/// # Examples
///
/// ```rust
/// use sequery::setops::intersection;
///
/// let left = [1, 2, 3];
/// let right = [2, 3, 4];
/// assert_eq!(intersection([&left[..], &right[..]]), vec![2, 3]);
///
/// let disjoint = [9, 10];
/// assert_eq!(intersection([&left[..], &disjoint[..]]), Vec::<i32>::new());
/// ```
pub fn intersection<'a, T, I>(sequences: I) -> Vec<T>
where
    T: Clone + PartialEq + 'a,
    I: IntoIterator<Item = &'a [T]>,
{
    let sequences: Vec<&[T]> = sequences.into_iter().collect();
    let candidates = union(sequences.iter().copied());

    let mut common = Vec::new();
    for candidate in candidates {
        if sequences
            .iter()
            .all(|sequence| sequence.contains(&candidate))
        {
            common.push(candidate);
        }
    }
    common
}

/// Returns the elements of `from` that are absent from **at least one** of
/// the `others` sequences, deduplicated, in the order the scan admits them.
///
/// This is **not** the standard set difference. The scan walks the `others`
/// sequences in argument order and, within each, walks `from` in order: an
/// element is admitted the first time it is missing from the `others`
/// sequence currently under inspection. With several `others` sequences, an
/// element of `from` present in one but missing from another is therefore
/// still included - absence from *all* of them is not required.
///
/// Zero `others` sequences yield an empty result, since no pass ever admits
/// anything.
///
/// # Examples
///
/// ```rust
/// use sequery::setops::difference;
///
/// let from = [1, 2, 3];
/// assert_eq!(difference(&from, [&[2][..]]), vec![1, 3]);
///
/// // 2 is missing from [3] and 3 is missing from [2], so both qualify:
/// // the first pass admits 1 and 3, the second admits 2.
/// assert_eq!(difference(&from, [&[2][..], &[3][..]]), vec![1, 3, 2]);
/// ```
pub fn difference<'a, T, I>(from: &[T], others: I) -> Vec<T>
where
    T: Clone + PartialEq + 'a,
    I: IntoIterator<Item = &'a [T]>,
{
    let mut admitted = Vec::new();
    for other in others {
        for element in from {
            if !other.contains(element) && !admitted.contains(element) {
                admitted.push(element.clone());
            }
        }
    }
    admitted
}
