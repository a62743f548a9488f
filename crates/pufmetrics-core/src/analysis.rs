//! Composite reports over a response collection.
//!
//! A collection means one of two things: repeated captures of a single PUF
//! instance, or one capture from each of many instances. Each has its own
//! report builder that runs every metric meaningful for that population.

use std::fmt;

use log::debug;

use crate::distance::validate_collection;
use crate::error::Result;
use crate::pairwise::{
    avalanche_effect, bit_error_rates, correlation_coefficient, inter_puf_variation,
    intra_puf_variation, reliability, uniqueness,
};
use crate::positional::{bit_aliasing, entropy, min_entropy, mutual_information, uniformity};
use crate::response::Response;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Options for [`analyze_population`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Compute mean pairwise mutual information. Quadratic in response length.
    pub mutual_information: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            mutual_information: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Metrics for repeated captures of one PUF instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureReport {
    pub captures: usize,
    pub n_bits: usize,
    /// Mean pairwise Hamming distance, in bits.
    pub intra_puf_variation: f64,
    pub reliability: f64,
    pub avalanche_effect: f64,
    /// Bit error rate of each capture against the first.
    pub bit_error_rates: Vec<f64>,
    /// Mean uniformity across captures, in percent.
    pub mean_uniformity: f64,
}

/// Metrics for one capture from each of many PUF instances.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationReport {
    pub instances: usize,
    pub n_bits: usize,
    /// Mean pairwise Hamming distance, in bits.
    pub inter_puf_variation: f64,
    pub uniqueness: f64,
    pub correlation_coefficient: f64,
    /// Fraction of instances with a '1' at each position.
    pub bit_aliasing: Vec<f64>,
    pub entropy: f64,
    pub min_entropy: f64,
    /// `None` when disabled in [`AnalysisConfig`].
    pub mutual_information: Option<f64>,
    /// Mean uniformity across instances, in percent.
    pub mean_uniformity: f64,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

fn mean_uniformity(responses: &[Response]) -> Result<f64> {
    let mut sum = 0.0;
    for response in responses {
        sum += uniformity(response)?;
    }
    Ok(sum / responses.len() as f64)
}

/// Run every capture-level metric on repeated captures of one instance.
///
/// `responses[0]` is the reference for [`reliability`] and the error rates.
pub fn analyze_captures(responses: &[Response]) -> Result<CaptureReport> {
    let n_bits = validate_collection(responses, 2)?;
    debug!("analyze_captures: {} captures of {n_bits} bits", responses.len());
    Ok(CaptureReport {
        captures: responses.len(),
        n_bits,
        intra_puf_variation: intra_puf_variation(responses)?,
        reliability: reliability(responses)?,
        avalanche_effect: avalanche_effect(responses)?,
        bit_error_rates: bit_error_rates(responses)?,
        mean_uniformity: mean_uniformity(responses)?,
    })
}

/// Run every population-level metric on one capture per instance.
pub fn analyze_population(
    responses: &[Response],
    config: &AnalysisConfig,
) -> Result<PopulationReport> {
    let n_bits = validate_collection(responses, 2)?;
    debug!(
        "analyze_population: {} instances of {n_bits} bits (mutual information: {})",
        responses.len(),
        config.mutual_information
    );
    let mi = if config.mutual_information {
        Some(mutual_information(responses)?)
    } else {
        None
    };
    Ok(PopulationReport {
        instances: responses.len(),
        n_bits,
        inter_puf_variation: inter_puf_variation(responses)?,
        uniqueness: uniqueness(responses)?,
        correlation_coefficient: correlation_coefficient(responses)?,
        bit_aliasing: bit_aliasing(responses)?,
        entropy: entropy(responses)?,
        min_entropy: min_entropy(responses)?,
        mutual_information: mi,
        mean_uniformity: mean_uniformity(responses)?,
    })
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

fn write_list(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
    write!(f, "[")?;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{v:.4}")?;
    }
    write!(f, "]")
}

impl fmt::Display for CaptureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Captures:            {} x {} bits", self.captures, self.n_bits)?;
        writeln!(f, "Intra-PUF variation: {:.4} bits", self.intra_puf_variation)?;
        writeln!(f, "Reliability:         {:.4}", self.reliability)?;
        writeln!(f, "Avalanche effect:    {:.4}", self.avalanche_effect)?;
        write!(f, "Bit error rates:     ")?;
        write_list(f, &self.bit_error_rates)?;
        writeln!(f)?;
        write!(f, "Mean uniformity:     {:.2}%", self.mean_uniformity)
    }
}

impl fmt::Display for PopulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Instances:               {} x {} bits", self.instances, self.n_bits)?;
        writeln!(f, "Inter-PUF variation:     {:.4} bits", self.inter_puf_variation)?;
        writeln!(f, "Uniqueness:              {:.4}", self.uniqueness)?;
        writeln!(f, "Correlation coefficient: {:.4}", self.correlation_coefficient)?;
        write!(f, "Bit aliasing:            ")?;
        write_list(f, &self.bit_aliasing)?;
        writeln!(f)?;
        writeln!(f, "Entropy:                 {:.4} bits/position", self.entropy)?;
        writeln!(f, "Min-entropy:             {:.4} bits/position", self.min_entropy)?;
        match self.mutual_information {
            Some(mi) => writeln!(f, "Mutual information:      {mi:.4} bits")?,
            None => writeln!(f, "Mutual information:      (skipped)")?,
        }
        write!(f, "Mean uniformity:         {:.2}%", self.mean_uniformity)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
