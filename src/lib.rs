//! # sequery
//!
//! LINQ-style query, set-algebra, and grouping helpers for ordered
//! sequences.
//!
//! ## Overview
//!
//! This library is a collection of independent, stateless transformation
//! functions over slices. Every operation takes its input by reference and
//! produces a new `Vec`; nothing is mutated, shared, or retained across
//! calls. It includes:
//!
//! - **Set algebra**: [`distinct`](setops::distinct), [`union`](setops::union),
//!   [`intersection`](setops::intersection), [`difference`](setops::difference)
//!   over sequences of equatable elements
//! - **Grouping**: [`group_by`](grouping::group_by) with an optional custom
//!   key-equivalence predicate and an optional value transform
//! - **Queries**: the [`Sequence`](query::Sequence) extension trait
//!   (filtering, slicing, searching, sorting) plus predicate joins
//! - **Aggregation**: sums, extrema, and averages over numeric projections
//! - **Text & dates**: small comparator and calendar-date conveniences
//!
//! ## Feature Flags
//!
//! - `setops`: multi-sequence set algebra
//! - `grouping`: `Group` and the `group_by` family
//! - `query`: the `Sequence` extension trait and joins
//! - `aggregate`: numeric folds (`sum`, `min_of`, `max_of`, `avg`)
//! - `text`: string comparators and helpers
//! - `date`: calendar-date parsing and formatting (pulls in `chrono`)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use sequery::prelude::*;
//!
//! let weekdays = ["mon", "tue", "wed"];
//! let weekend = ["sat", "sun", "mon"];
//!
//! let all_days = union([&weekdays[..], &weekend[..]]);
//! assert_eq!(all_days, vec!["mon", "tue", "wed", "sat", "sun"]);
//!
//! let by_first_letter = all_days.group_by(|day| day.as_bytes()[0]);
//! assert_eq!(by_first_letter.len(), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits, and functions.
///
/// # Usage
///
/// ```rust
/// use sequery::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "setops")]
    pub use crate::setops::*;

    #[cfg(feature = "grouping")]
    pub use crate::grouping::*;

    #[cfg(feature = "query")]
    pub use crate::query::*;

    #[cfg(feature = "aggregate")]
    pub use crate::aggregate::*;

    #[cfg(feature = "text")]
    pub use crate::text::*;

    #[cfg(feature = "date")]
    pub use crate::date::*;
}

#[cfg(feature = "setops")]
pub mod setops;

#[cfg(feature = "grouping")]
pub mod grouping;

#[cfg(feature = "query")]
pub mod query;

#[cfg(feature = "aggregate")]
pub mod aggregate;

#[cfg(feature = "text")]
pub mod text;

#[cfg(feature = "date")]
pub mod date;
