//! Per-bit distributional metrics.
//!
//! Across a collection of responses, the values seen at one bit position form
//! an empirical Bernoulli distribution. The metrics here compute statistics of
//! those distributions (bias, Shannon entropy, min-entropy) and of the joint
//! distributions of position pairs (mutual information), then aggregate
//! across positions.
//!
//! Zero-probability outcomes contribute exactly 0 to every entropy and
//! mutual-information sum, following the limit `p log2 p -> 0`.

use log::{debug, trace};

use crate::distance::{require_bits, validate_collection};
use crate::error::{MetricError, Result};
use crate::response::Response;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Transpose a validated collection: column `i` holds bit `i` of every
/// response, in collection order.
fn columns(responses: &[Response], n_bits: usize) -> Vec<Response> {
    let mut cols = vec![Vec::with_capacity(responses.len()); n_bits];
    for response in responses {
        for (i, bit) in response.iter().enumerate() {
            cols[i].push(bit);
        }
    }
    cols.iter().map(|c| Response::from_bits(c)).collect()
}

/// Number of responses with a 1 in both columns.
fn ones_in_both(a: &Response, b: &Response) -> usize {
    a.words()
        .iter()
        .zip(b.words())
        .map(|(x, y)| (x & y).count_ones() as usize)
        .sum()
}

/// Shannon entropy in bits of an empirical distribution given as counts.
fn shannon(counts: &[usize], total: usize) -> f64 {
    let n = total as f64;
    let mut h = 0.0;
    for &c in counts {
        if c > 0 {
            let p = c as f64 / n;
            h -= p * p.log2();
        }
    }
    h
}

/// Min-entropy in bits of a two-symbol distribution, capped by its Shannon
/// entropy so rounding can never reorder the two.
fn binary_min_entropy(ones: usize, total: usize, shannon_h: f64) -> f64 {
    let p_max = ones.max(total - ones) as f64 / total as f64;
    (-p_max.log2()).max(0.0).min(shannon_h)
}

/// Mutual information in bits between two binary columns.
fn pair_mutual_information(total: usize, ones_x: usize, ones_y: usize, both: usize) -> f64 {
    let c10 = ones_x - both;
    let c01 = ones_y - both;
    let c00 = total - both - c10 - c01;
    let joint = [(c00, 0, 0), (c01, 0, 1), (c10, 1, 0), (both, 1, 1)];

    let n = total as f64;
    let p_x = [(total - ones_x) as f64 / n, ones_x as f64 / n];
    let p_y = [(total - ones_y) as f64 / n, ones_y as f64 / n];

    let mut mi = 0.0;
    for (count, x, y) in joint {
        if count > 0 {
            let p_xy = count as f64 / n;
            mi += p_xy * (p_xy / (p_x[x] * p_y[y])).log2();
        }
    }
    // Rounding can leave a tiny negative residue for independent columns.
    mi.max(0.0)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

// ---------------------------------------------------------------------------
// Single-response metrics
// ---------------------------------------------------------------------------

/// Percentage of '1' bits in a single response, in `[0, 100]`. Ideal 50.
pub fn uniformity(response: &Response) -> Result<f64> {
    let n_bits = require_bits(response)?;
    Ok(response.count_ones() as f64 / n_bits as f64 * 100.0)
}

// ---------------------------------------------------------------------------
// Collection metrics
// ---------------------------------------------------------------------------

/// Fraction of responses with a '1' at each bit position.
///
/// One value in `[0, 1]` per position; ideal 0.5 everywhere. A position
/// near 0 or 1 is aliased: it carries the same value on most instances.
pub fn bit_aliasing(responses: &[Response]) -> Result<Vec<f64>> {
    let n_bits = validate_collection(responses, 2)?;
    debug!(
        "bit_aliasing: {} responses of {} bits",
        responses.len(),
        n_bits
    );
    let n = responses.len() as f64;
    Ok(columns(responses, n_bits)
        .iter()
        .map(|col| col.count_ones() as f64 / n)
        .collect())
}

/// Shannon entropy of each bit position across the collection, in bits.
pub fn bit_entropies(responses: &[Response]) -> Result<Vec<f64>> {
    let n_bits = validate_collection(responses, 2)?;
    let total = responses.len();
    Ok(columns(responses, n_bits)
        .iter()
        .map(|col| shannon(&[col.count_zeros(), col.count_ones()], total))
        .collect())
}

/// Mean per-position Shannon entropy, in `[0, 1]` bits per position.
pub fn entropy(responses: &[Response]) -> Result<f64> {
    let per_bit = bit_entropies(responses)?;
    require_bits(&responses[0])?;
    debug!(
        "entropy: {} responses of {} bits",
        responses.len(),
        per_bit.len()
    );
    Ok(mean(&per_bit))
}

/// Min-entropy of each bit position, `-log2(max(p0, p1))`.
///
/// Each value is at most the Shannon entropy of the same position.
pub fn bit_min_entropies(responses: &[Response]) -> Result<Vec<f64>> {
    let n_bits = validate_collection(responses, 2)?;
    let total = responses.len();
    Ok(columns(responses, n_bits)
        .iter()
        .map(|col| {
            let ones = col.count_ones();
            let h = shannon(&[total - ones, ones], total);
            binary_min_entropy(ones, total, h)
        })
        .collect())
}

/// Mean per-position min-entropy, in `[0, 1]`; never above [`entropy`].
pub fn min_entropy(responses: &[Response]) -> Result<f64> {
    let per_bit = bit_min_entropies(responses)?;
    require_bits(&responses[0])?;
    debug!(
        "min_entropy: {} responses of {} bits",
        responses.len(),
        per_bit.len()
    );
    Ok(mean(&per_bit))
}

/// Pairwise mutual information between all bit positions.
///
/// Symmetric `n_bits x n_bits` matrix. Off-diagonal entries are `I(X_i; X_j)`;
/// the diagonal is `I(X_i; X_i) = H(X_i)`.
pub fn mutual_information_matrix(responses: &[Response]) -> Result<Vec<Vec<f64>>> {
    let n_bits = validate_collection(responses, 2)?;
    let total = responses.len();
    let cols = columns(responses, n_bits);
    let ones: Vec<usize> = cols.iter().map(Response::count_ones).collect();

    let mut matrix = vec![vec![0.0; n_bits]; n_bits];
    for i in 0..n_bits {
        matrix[i][i] = shannon(&[total - ones[i], ones[i]], total);
        for j in i + 1..n_bits {
            let both = ones_in_both(&cols[i], &cols[j]);
            let mi = pair_mutual_information(total, ones[i], ones[j], both);
            matrix[i][j] = mi;
            matrix[j][i] = mi;
        }
    }
    Ok(matrix)
}

/// Mean mutual information over all unordered pairs of bit positions.
///
/// In bits, `>= 0`; ideally near 0. Cost is `O(n_bits^2 * n)`.
pub fn mutual_information(responses: &[Response]) -> Result<f64> {
    let n_bits = validate_collection(responses, 2)?;
    if n_bits < 2 {
        return Err(MetricError::insufficient("bit positions", 2, n_bits));
    }
    debug!(
        "mutual_information: {} responses of {} bits, {} position pairs",
        responses.len(),
        n_bits,
        n_bits * (n_bits - 1) / 2
    );

    let total = responses.len();
    let cols = columns(responses, n_bits);
    let ones: Vec<usize> = cols.iter().map(Response::count_ones).collect();

    let mut sum = 0.0;
    for i in 0..n_bits {
        for j in i + 1..n_bits {
            let both = ones_in_both(&cols[i], &cols[j]);
            let mi = pair_mutual_information(total, ones[i], ones[j], both);
            trace!("mutual_information: I({i}; {j}) = {mi:.6}");
            sum += mi;
        }
    }
    Ok(sum / (n_bits * (n_bits - 1) / 2) as f64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
