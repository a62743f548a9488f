//! Bit-distance primitives.
//!
//! Every pairwise metric reduces to [`hamming_distance`]; the collection
//! validator here is shared by all collection-level metrics so that length
//! and count preconditions are checked once, before any work is done.

use crate::error::{MetricError, Result};
use crate::response::Response;

/// Number of bit positions where `a` and `b` differ.
pub fn hamming_distance(a: &Response, b: &Response) -> Result<usize> {
    if a.len() != b.len() {
        return Err(MetricError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.words()
        .iter()
        .zip(b.words())
        .map(|(x, y)| (x ^ y).count_ones() as usize)
        .sum())
}

/// Fraction of bits in `actual` that differ from `expected`, in `[0, 1]`.
pub fn bit_error_rate(expected: &Response, actual: &Response) -> Result<f64> {
    let errors = hamming_distance(expected, actual)?;
    let n_bits = require_bits(expected)?;
    Ok(errors as f64 / n_bits as f64)
}

/// Reject zero-bit responses for metrics that normalize by bit length.
pub(crate) fn require_bits(response: &Response) -> Result<usize> {
    match response.len() {
        0 => Err(MetricError::insufficient("bits", 1, 0)),
        n => Ok(n),
    }
}

/// Check that `responses` holds at least `min_count` responses of one
/// common length, and return that length.
pub(crate) fn validate_collection(responses: &[Response], min_count: usize) -> Result<usize> {
    if responses.len() < min_count {
        return Err(MetricError::insufficient(
            "responses",
            min_count,
            responses.len(),
        ));
    }
    let Some(first) = responses.first() else {
        return Ok(0);
    };
    let n_bits = first.len();
    if let Some(bad) = responses.iter().find(|r| r.len() != n_bits) {
        return Err(MetricError::LengthMismatch {
            expected: n_bits,
            actual: bad.len(),
        });
    }
    Ok(n_bits)
}

/// Sum of Hamming distances over all unordered pairs, and the pair count.
///
/// Callers must have validated the collection first.
pub(crate) fn pairwise_hamming_total(responses: &[Response]) -> Result<(usize, usize)> {
    let mut total = 0;
    let mut pairs = 0;
    for (i, a) in responses.iter().enumerate() {
        for b in &responses[i + 1..] {
            total += hamming_distance(a, b)?;
            pairs += 1;
        }
    }
    Ok((total, pairs))
}
