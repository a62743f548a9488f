//! Integration tests for pufmetrics-core.
//!
//! These run the public API over the two reference sample sets (three
//! captures of one PUF, one capture each from three PUFs) and over seeded
//! synthetic populations large enough for the statistics to settle.

use pufmetrics_core::{
    AnalysisConfig, MetricError, Response, analyze_captures, analyze_population,
    avalanche_effect, bit_aliasing, bit_error_rate, bit_error_rates, bit_min_entropies,
    correlation_coefficient, entropy, hamming_distance, inter_puf_variation, intra_puf_variation,
    min_entropy, mutual_information, mutual_information_matrix, reliability, uniformity,
    uniqueness,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn parse_all(items: &[&str]) -> Vec<Response> {
    items.iter().map(|s| s.parse().unwrap()).collect()
}

/// Same PUF under three conditions.
fn same_puf() -> Vec<Response> {
    parse_all(&["11001010", "11001011", "11011010"])
}

/// Three PUF instances under one condition.
fn many_pufs() -> Vec<Response> {
    parse_all(&["11001010", "10101010", "11101010"])
}

fn random_population(instances: usize, n_bits: usize, seed: u64) -> Vec<Response> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..instances)
        .map(|_| {
            let bits: Vec<bool> = (0..n_bits).map(|_| rng.random_bool(0.5)).collect();
            Response::from_bits(&bits)
        })
        .collect()
}

/// Noisy re-reads of one reference response, each bit flipped with `flip_p`.
fn noisy_captures(reference: &Response, captures: usize, flip_p: f64, seed: u64) -> Vec<Response> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = vec![reference.clone()];
    for _ in 1..captures {
        let bits: Vec<bool> = reference
            .iter()
            .map(|b| b ^ rng.random_bool(flip_p))
            .collect();
        out.push(Response::from_bits(&bits));
    }
    out
}

#[test]
fn reference_session_distance_primitives() {
    let captures = same_puf();
    assert_eq!(hamming_distance(&captures[0], &captures[1]).unwrap(), 1);
    assert_eq!(bit_error_rate(&captures[0], &captures[1]).unwrap(), 0.125);
}

#[test]
fn reference_session_collection_metrics() {
    let captures = same_puf();
    let pufs = many_pufs();

    let intra = intra_puf_variation(&captures).unwrap();
    let d01 = hamming_distance(&captures[0], &captures[1]).unwrap();
    let d02 = hamming_distance(&captures[0], &captures[2]).unwrap();
    let d12 = hamming_distance(&captures[1], &captures[2]).unwrap();
    assert!((intra - (d01 + d02 + d12) as f64 / 3.0).abs() < 1e-12);

    assert!((inter_puf_variation(&pufs).unwrap() - 4.0 / 3.0).abs() < 1e-12);
    assert_eq!(uniqueness(&pufs).unwrap(), avalanche_effect(&pufs).unwrap());
    assert!((reliability(&captures).unwrap() - 0.875).abs() < 1e-12);
    assert_eq!(uniformity(&captures[0]).unwrap(), 50.0);

    let aliasing = bit_aliasing(&captures).unwrap();
    assert_eq!(aliasing.len(), 8);
    assert!(aliasing.iter().all(|p| (0.0..=1.0).contains(p)));

    let cc = correlation_coefficient(&pufs).unwrap();
    assert!((cc - 20.0 / 24.0).abs() < 1e-12);

    let h = entropy(&captures).unwrap();
    let h_min = min_entropy(&captures).unwrap();
    assert!(h_min <= h);
    assert!((0.0..=1.0).contains(&h));

    let mi = mutual_information(&pufs).unwrap();
    assert!(mi >= 0.0);
}

#[test]
fn random_population_scores_near_ideal() {
    let pufs = random_population(400, 64, 0xdeadbeef);

    let u = uniqueness(&pufs).unwrap();
    assert!((u - 0.5).abs() < 0.02, "uniqueness {u}");

    let h = entropy(&pufs).unwrap();
    assert!(h > 0.98, "entropy {h}");

    for p in bit_aliasing(&pufs).unwrap() {
        assert!((p - 0.5).abs() < 0.1, "aliasing {p}");
    }
}

#[test]
fn independent_positions_have_low_mutual_information() {
    let pufs = random_population(4096, 8, 0xcafebabe);
    let mi = mutual_information(&pufs).unwrap();
    assert!(mi < 0.005, "mutual information {mi}");
}

#[test]
fn duplicated_position_carries_its_entropy() {
    // Position 3 is a copy of position 0.
    let mut rng = StdRng::seed_from_u64(7);
    let pufs: Vec<Response> = (0..256)
        .map(|_| {
            let mut bits: Vec<bool> = (0..6).map(|_| rng.random_bool(0.3)).collect();
            bits[3] = bits[0];
            Response::from_bits(&bits)
        })
        .collect();
    let matrix = mutual_information_matrix(&pufs).unwrap();
    assert!((matrix[0][3] - matrix[0][0]).abs() < 1e-12);
    assert!(matrix[0][3] > 0.5);
}

#[test]
fn noisy_captures_reliability_tracks_noise() {
    let reference = random_population(1, 512, 11).remove(0);
    let captures = noisy_captures(&reference, 20, 0.05, 12);

    let rel = reliability(&captures).unwrap();
    assert!((rel - 0.95).abs() < 0.02, "reliability {rel}");

    let rates = bit_error_rates(&captures).unwrap();
    assert_eq!(rates.len(), 19);
    let mean = rates.iter().sum::<f64>() / rates.len() as f64;
    assert!((rel - (1.0 - mean)).abs() < 1e-12);

    let report = analyze_captures(&captures).unwrap();
    assert_eq!(report.reliability, rel);
    assert!(report.intra_puf_variation > 0.0);
}

#[test]
fn population_report_matches_individual_metrics() {
    let pufs = random_population(32, 24, 99);
    let report = analyze_population(&pufs, &AnalysisConfig::default()).unwrap();
    assert_eq!(report.instances, 32);
    assert_eq!(report.n_bits, 24);
    assert_eq!(report.uniqueness, uniqueness(&pufs).unwrap());
    assert_eq!(report.entropy, entropy(&pufs).unwrap());
    assert_eq!(report.min_entropy, min_entropy(&pufs).unwrap());
    assert_eq!(report.mutual_information, Some(mutual_information(&pufs).unwrap()));
    assert_eq!(report.bit_aliasing, bit_aliasing(&pufs).unwrap());
}

#[test]
fn long_responses_span_words() {
    let pufs = random_population(6, 300, 5);
    let per_bit = bit_min_entropies(&pufs).unwrap();
    assert_eq!(per_bit.len(), 300);
    let d = hamming_distance(&pufs[0], &pufs[1]).unwrap();
    let naive = pufs[0]
        .iter()
        .zip(pufs[1].iter())
        .filter(|(a, b)| a != b)
        .count();
    assert_eq!(d, naive);
}

#[test]
fn every_length_sensitive_function_rejects_mismatch() {
    let ragged = parse_all(&["1100", "1010", "110"]);
    let results = [
        intra_puf_variation(&ragged),
        inter_puf_variation(&ragged),
        uniqueness(&ragged),
        reliability(&ragged),
        avalanche_effect(&ragged),
        correlation_coefficient(&ragged),
        entropy(&ragged),
        mutual_information(&ragged),
        min_entropy(&ragged),
    ];
    for result in results {
        assert_eq!(
            result.unwrap_err(),
            MetricError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }
    assert!(matches!(
        bit_aliasing(&ragged),
        Err(MetricError::LengthMismatch { .. })
    ));
    assert!(matches!(
        hamming_distance(&ragged[0], &ragged[2]),
        Err(MetricError::LengthMismatch { .. })
    ));
}

#[test]
fn every_collection_function_rejects_small_collections() {
    let one = parse_all(&["1100"]);
    let none: Vec<Response> = Vec::new();
    for input in [&one, &none] {
        let results = [
            intra_puf_variation(input),
            inter_puf_variation(input),
            uniqueness(input),
            reliability(input),
            avalanche_effect(input),
            correlation_coefficient(input),
            entropy(input),
            mutual_information(input),
            min_entropy(input),
        ];
        for result in results {
            assert!(matches!(
                result,
                Err(MetricError::InsufficientData {
                    what: "responses",
                    required: 2,
                    ..
                })
            ));
        }
        assert!(matches!(
            bit_aliasing(input),
            Err(MetricError::InsufficientData { .. })
        ));
    }
}
