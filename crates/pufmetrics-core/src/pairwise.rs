//! Pairwise aggregate metrics.
//!
//! Each metric enumerates the `C(n, 2)` unordered pairs of a collection (or
//! compares every capture against the first one) and folds per-pair Hamming
//! distances into one scalar. Collections need at least two responses of a
//! common length; both preconditions are checked before any pair is visited.
//!
//! Two pairs of metrics share a computation but keep distinct names because
//! callers choose them for the population they describe:
//!
//! | Repeated captures of one instance | One capture per instance |
//! |-----------------------------------|--------------------------|
//! | [`intra_puf_variation`]           | [`inter_puf_variation`]  |
//! | [`avalanche_effect`]              | [`uniqueness`]           |

use log::debug;

use crate::distance::{
    bit_error_rate, hamming_distance, pairwise_hamming_total, require_bits, validate_collection,
};
use crate::error::Result;
use crate::response::Response;

/// Mean pairwise Hamming distance over all pairs in `responses`.
fn mean_pairwise_distance(responses: &[Response]) -> Result<f64> {
    validate_collection(responses, 2)?;
    let (total, pairs) = pairwise_hamming_total(responses)?;
    Ok(total as f64 / pairs as f64)
}

/// Mean pairwise Hamming distance normalized by bit length, in `[0, 1]`.
fn normalized_pairwise_distance(responses: &[Response]) -> Result<f64> {
    let n_bits = validate_collection(responses, 2)?;
    require_bits(&responses[0])?;
    let (total, pairs) = pairwise_hamming_total(responses)?;
    Ok(total as f64 / (pairs * n_bits) as f64)
}

/// Mean Hamming distance between repeated captures of one PUF instance.
///
/// Measured in bits; lower is better (0 means every capture is identical).
pub fn intra_puf_variation(responses: &[Response]) -> Result<f64> {
    debug!("intra_puf_variation: {} captures", responses.len());
    mean_pairwise_distance(responses)
}

/// Mean Hamming distance between responses of distinct PUF instances.
///
/// Measured in bits; ideally half the response length.
pub fn inter_puf_variation(responses: &[Response]) -> Result<f64> {
    debug!("inter_puf_variation: {} instances", responses.len());
    mean_pairwise_distance(responses)
}

/// Uniqueness across PUF instances: `2 / (k (k - 1)) * Σ HD(i, j) / n_bits`.
///
/// In `[0, 1]`, ideal 0.5.
pub fn uniqueness(responses: &[Response]) -> Result<f64> {
    debug!("uniqueness: {} instances", responses.len());
    normalized_pairwise_distance(responses)
}

/// Output sensitivity to perturbed inputs or operating conditions.
///
/// Same reduction as [`uniqueness`], applied to responses of one instance.
/// Ideal 0.5.
pub fn avalanche_effect(responses: &[Response]) -> Result<f64> {
    debug!("avalanche_effect: {} responses", responses.len());
    normalized_pairwise_distance(responses)
}

/// Reproducibility of `responses[0]` across the remaining captures.
///
/// `1 - Σ HD(ref, r_k) / ((n - 1) * n_bits)`; 1.0 means every capture
/// reproduced the reference exactly.
pub fn reliability(responses: &[Response]) -> Result<f64> {
    let n_bits = validate_collection(responses, 2)?;
    let reference = &responses[0];
    require_bits(reference)?;
    debug!(
        "reliability: {} captures of {} bits",
        responses.len(),
        n_bits
    );

    let mut total = 0;
    for capture in &responses[1..] {
        total += hamming_distance(reference, capture)?;
    }
    Ok(1.0 - total as f64 / ((responses.len() - 1) * n_bits) as f64)
}

/// Bit error rate of every capture against the reference `responses[0]`.
///
/// One entry per capture after the first.
pub fn bit_error_rates(responses: &[Response]) -> Result<Vec<f64>> {
    validate_collection(responses, 2)?;
    let reference = &responses[0];
    responses[1..]
        .iter()
        .map(|capture| bit_error_rate(reference, capture))
        .collect()
}

/// Mean fraction of agreeing bit positions over all pairs.
///
/// The complement of [`avalanche_effect`] on the same collection.
pub fn correlation_coefficient(responses: &[Response]) -> Result<f64> {
    let n_bits = validate_collection(responses, 2)?;
    require_bits(&responses[0])?;
    debug!(
        "correlation_coefficient: {} responses of {} bits",
        responses.len(),
        n_bits
    );

    let mut sum = 0.0;
    let mut pairs = 0usize;
    for (i, a) in responses.iter().enumerate() {
        for b in &responses[i + 1..] {
            let matches = n_bits - hamming_distance(a, b)?;
            sum += matches as f64 / n_bits as f64;
            pairs += 1;
        }
    }
    Ok(sum / pairs as f64)
}
