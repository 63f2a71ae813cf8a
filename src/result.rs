use std::{
    error::Error as StdError,
    fmt::{self, Display},
};

/// The top-level result type for searches that validate
/// their inputs.
pub type Result<T> = std::result::Result<T, Error>;

/// An Error type describing the ways a caller can hand
/// a search something it cannot give a meaningful answer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The lower bound of the searched range is past its upper bound.
    InvalidRange {
        /// The requested lower bound.
        low: usize,
        /// The requested upper bound.
        high: usize,
    },
    /// The upper bound of the searched range is past the end
    /// of the sequence.
    OutOfBounds {
        /// The requested upper bound.
        high: usize,
        /// The length of the sequence.
        len: usize,
    },
    /// The predicate was not a true-prefix, false-suffix partition
    /// of the range. Only detected when partition verification is
    /// enabled in the `Config`.
    NotPartitioned {
        /// The first index at which the predicate held after
        /// having failed earlier in the range.
        at: usize,
    },
}

impl StdError for Error {}

impl Display for Error {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;

        match *self {
            InvalidRange { low, high } => write!(
                f,
                "Invalid range: low bound {} is greater than high bound {}",
                low, high
            ),
            OutOfBounds { high, len } => write!(
                f,
                "High bound {} is out of bounds for a sequence of length {}",
                high, len
            ),
            NotPartitioned { at } => write!(
                f,
                "Predicate is not partitioned: it holds again at index {} \
                 after failing earlier in the range",
                at
            ),
        }
    }
}

#[test]
fn test_error_display() {
    assert_eq!(
        Error::InvalidRange { low: 4, high: 2 }.to_string(),
        "Invalid range: low bound 4 is greater than high bound 2"
    );
    assert_eq!(
        Error::OutOfBounds { high: 9, len: 5 }.to_string(),
        "High bound 9 is out of bounds for a sequence of length 5"
    );
    assert!(Error::NotPartitioned { at: 3 }.to_string().contains("index 3"));
}
