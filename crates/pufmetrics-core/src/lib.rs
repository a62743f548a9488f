//! # pufmetrics-core
//!
//! **Quality metrics for Physically Unclonable Function responses.**
//!
//! A PUF turns manufacturing variation into a device-unique binary response.
//! A good PUF reproduces its own response under noise, differs from every
//! other instance, and emits unbiased, independent bits. This crate scores
//! those properties over response sets that are already in memory.
//!
//! ## Quick Start
//!
//! ```
//! use pufmetrics_core::{Response, reliability, uniqueness};
//!
//! let parse = |items: &[&str]| -> Vec<Response> {
//!     items.iter().map(|s| s.parse().unwrap()).collect()
//! };
//!
//! // Same device, three operating conditions.
//! let captures = parse(&["11001010", "11001011", "11011010"]);
//! assert_eq!(reliability(&captures).unwrap(), 0.875);
//!
//! // Three devices, one condition.
//! let devices = parse(&["11001010", "10101010", "11101010"]);
//! let u = uniqueness(&devices).unwrap();
//! assert!(u > 0.0 && u < 0.5);
//! ```
//!
//! ## Architecture
//!
//! Distance primitives → pairwise aggregates → per-bit distributions
//!
//! - [`distance`]: Hamming distance and bit error rate between two responses.
//! - [`pairwise`]: reductions over all response pairs (variation,
//!   uniqueness, avalanche effect, correlation) or against a reference
//!   capture (reliability).
//! - [`positional`]: per-position statistics across a collection (uniformity,
//!   bit aliasing, Shannon entropy, min-entropy, mutual information).
//! - [`analysis`]: composite reports for capture sets and device populations.
//!
//! Every function is pure: inputs are borrowed immutably, nothing is cached,
//! and independent calls may run on separate threads. Preconditions (equal
//! lengths, minimum collection size) are checked before any computation and
//! reported as a [`MetricError`].

pub mod analysis;
pub mod distance;
pub mod error;
pub mod pairwise;
pub mod positional;
pub mod response;

pub use analysis::{
    AnalysisConfig, CaptureReport, PopulationReport, analyze_captures, analyze_population,
};
pub use distance::{bit_error_rate, hamming_distance};
pub use error::{MetricError, ParseResponseError, Result};
pub use pairwise::{
    avalanche_effect, bit_error_rates, correlation_coefficient, inter_puf_variation,
    intra_puf_variation, reliability, uniqueness,
};
pub use positional::{
    bit_aliasing, bit_entropies, bit_min_entropies, entropy, min_entropy, mutual_information,
    mutual_information_matrix, uniformity,
};
pub use response::Response;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
