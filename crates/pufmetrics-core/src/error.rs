//! Error types for metric evaluation and response parsing.
//!
//! Metric functions fail in exactly two ways: the responses they compare do
//! not share a bit length, or a collection is too small for the metric to be
//! defined. Parsing text or bytes into a [`Response`](crate::Response) has its
//! own error type so the metric taxonomy stays closed.

use thiserror::Error;

/// Precondition violation raised by a metric before any computation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    /// Two responses compared together differ in bit length.
    #[error("length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch {
        /// Bit length of the reference response.
        expected: usize,
        /// Bit length of the offending response.
        actual: usize,
    },
    /// A collection (or a response) is smaller than the metric requires.
    #[error("insufficient data: need at least {required} {what}, got {actual}")]
    InsufficientData {
        /// What was counted: "responses", "bits" or "bit positions".
        what: &'static str,
        /// Minimum count the metric needs.
        required: usize,
        /// Count actually supplied.
        actual: usize,
    },
}

impl MetricError {
    pub(crate) fn insufficient(what: &'static str, required: usize, actual: usize) -> Self {
        Self::InsufficientData {
            what,
            required,
            actual,
        }
    }

    /// Stable short name for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LengthMismatch { .. } => "length_mismatch",
            Self::InsufficientData { .. } => "insufficient_data",
        }
    }
}

/// Failure to build a [`Response`](crate::Response) from external data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseResponseError {
    /// A character other than '0' or '1' was found.
    #[error("invalid symbol {symbol:?} at index {index}: responses may only contain '0' and '1'")]
    InvalidSymbol { index: usize, symbol: char },
    /// The byte buffer holds fewer bits than requested.
    #[error("requested {n_bits} bits but only {available} are available")]
    TooFewBytes { n_bits: usize, available: usize },
}

/// Result alias used by every metric.
pub type Result<T> = std::result::Result<T, MetricError>;
