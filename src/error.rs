//! Error type shared by every module of the crate.
//!
//! The library reports failures through one enum, [`AdtError`], returned
//! inside a [`Result`]. Absence (the head of an empty list, the tail of an
//! empty stream) is not an error: it is reported as `None`.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::AdtError;
//! use monadkit::persistent::List;
//!
//! let list: List<i32> = (1..=3).collect();
//! assert_eq!(list.at(1), Ok(&2));
//! assert_eq!(
//!     list.at(5),
//!     Err(AdtError::InvalidIndex { index: 5, length: 3 })
//! );
//! ```

/// Errors reported by pattern dispatch, positional access and the numeric helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdtError {
    /// A runtime [`Pattern`](crate::variant::Pattern) had no handler for the
    /// tag of the value it was applied to.
    #[error("non-exhaustive match: no handler for tag `{tag}` of `{type_name}`")]
    NonExhaustiveMatch {
        /// Name of the matched type.
        type_name: &'static str,
        /// Name of the tag the value was constructed with.
        tag: &'static str,
    },

    /// A positional lookup was out of range.
    #[error("invalid index {index} for a sequence of length {length}")]
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// The length of the sequence.
        length: usize,
    },

    /// A numeric helper received zero or a negative number.
    #[error("argument not positive: {argument}")]
    NotPositive {
        /// The rejected argument.
        argument: i64,
    },

    /// `gcd(0, 0)` has no value.
    #[error("gcd(0, 0) is not defined")]
    UndefinedGcd,

    /// A numeric result does not fit in `i64`.
    #[error("{operation} overflowed i64")]
    Overflow {
        /// The helper whose result overflowed.
        operation: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AdtError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn non_exhaustive_match_display_names_type_and_tag() {
        let error = AdtError::NonExhaustiveMatch {
            type_name: "List<i32>",
            tag: "cons",
        };
        assert_eq!(
            error.to_string(),
            "non-exhaustive match: no handler for tag `cons` of `List<i32>`"
        );
    }

    #[rstest]
    #[case(AdtError::InvalidIndex { index: 4, length: 2 }, "invalid index 4 for a sequence of length 2")]
    #[case(AdtError::NotPositive { argument: -3 }, "argument not positive: -3")]
    #[case(AdtError::UndefinedGcd, "gcd(0, 0) is not defined")]
    #[case(AdtError::Overflow { operation: "gcd" }, "gcd overflowed i64")]
    fn error_display(#[case] error: AdtError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&AdtError::UndefinedGcd);
    }
}
