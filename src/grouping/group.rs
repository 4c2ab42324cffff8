//! The `Group` type - a key paired with the items assigned to it.

use std::fmt;
use std::slice;
use std::vec;

/// A key paired with the ordered collection of items assigned to it during
/// a grouping pass.
///
/// A `Group` is created once per distinct key encountered by
/// [`group_by_full`](super::group_by_full) and its relatives, has items
/// appended only during that pass, and is exclusively owned by the caller
/// afterward. Within a group, item order is insertion order - the order of
/// first appearance in the source sequence.
///
/// # Examples
///
/// ```rust
/// use sequery::grouping::group_by;
///
/// let numbers = [1, 2, 3, 4];
/// let groups = group_by(&numbers, |number| number % 2);
///
/// let odd = groups.iter().find(|group| *group.key() == 1).unwrap();
/// assert_eq!(odd.items(), &[1, 3]);
/// assert_eq!(odd.len(), 2);
/// assert_eq!(format!("{odd}"), "1: [1, 3]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, T> {
    key: K,
    items: Vec<T>,
}

impl<K, T> Group<K, T> {
    /// Creates a new, empty group for the given key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::grouping::Group;
    ///
    /// let group: Group<&str, i32> = Group::new("evens");
    /// assert!(group.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            items: Vec::new(),
        }
    }

    /// Appends an item to the group.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Returns the group's key.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the group's items, in insertion order.
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the number of items in the group.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the group holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the group's items.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the group and returns its key and items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::grouping::group_by;
    ///
    /// let groups = group_by(&[1, 3], |number| number % 2);
    /// let (key, items) = groups.into_iter().next().unwrap().into_parts();
    /// assert_eq!(key, 1);
    /// assert_eq!(items, vec![1, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.items)
    }
}

impl<K, T> IntoIterator for Group<K, T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Group<K, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K: fmt::Display, T: fmt::Display> fmt::Display for Group<K, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: [", self.key)?;
        for (position, item) in self.items.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{item}")?;
        }
        formatter.write_str("]")
    }
}

// Grouping results may be handed across threads by the caller.
static_assertions::assert_impl_all!(Group<i32, String>: Send, Sync, Clone);
