//! LINQ-style queries over slices.
//!
//! This module provides the [`Sequence`] extension trait - filtering,
//! searching, slicing, sorting, and dictionary/group conversions for any
//! slice - together with the predicate joins [`join`] and [`join_group`].
//!
//! All of these are thin wrappers over the standard library's iteration,
//! filtering, and sorting primitives: the receiver is never mutated and
//! every operation returns a freshly allocated result. The interesting
//! algorithmic behavior lives in [`setops`](crate::setops) and
//! [`grouping`](crate::grouping); this trait exists so querying code reads
//! uniformly.
//!
//! # Examples
//!
//! ```rust
//! use sequery::query::Sequence;
//!
//! let scores = [71, 89, 64, 95];
//!
//! assert_eq!(scores.find_where(|score| *score > 90), Some(&95));
//! assert_eq!(scores.take_first(2), vec![71, 89]);
//! assert_eq!(scores.sorted_by(|a, b| a.cmp(b)), vec![64, 71, 89, 95]);
//! ```

mod join;
mod sequence;

pub use join::{join, join_group};
pub use sequence::Sequence;
