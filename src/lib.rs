//! `ordered_search` finds partition points and lower bounds
//! in sorted slices.
//!
//! Every search works on a subrange `[low, high)` of a slice and
//! returns an index in `[low, high]`. It performs no allocation and
//! calls the predicate O(log(high - low)) times.
//!
//! # Examples
//!
//! ```
//! use ordered_search::{lower_bound, lower_bound_by, Error};
//!
//! let a = [1, 3, 3, 5, 7];
//!
//! // first index whose element is >= the value
//! assert_eq!(lower_bound(&a, 0, a.len(), &3), Ok(1));
//! assert_eq!(lower_bound(&a, 0, a.len(), &8), Ok(5));
//!
//! // first index where the predicate stops holding
//! assert_eq!(lower_bound_by(&a, 0, a.len(), |x| *x < 5), Ok(3));
//!
//! // bad ranges are rejected rather than clamped
//! assert_eq!(
//!     lower_bound(&a, 0, 9, &3),
//!     Err(Error::OutOfBounds { high: 9, len: 5 })
//! );
//! ```
#![cfg_attr(test, deny(warnings))]
#![deny(missing_docs)]
#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(rust_2018_idioms)]

mod binary_search;
mod config;
mod ints;
mod result;

pub use {
    self::{
        binary_search::{
            binary_search, lower_bound, lower_bound_by,
            lower_bound_by_unchecked, lower_bound_unchecked,
        },
        config::Config,
        ints::{lower_bound_ints, lower_bound_ints_by},
        result::{Error, Result},
    },
};
