//! Basic PUF metrics example.
//!
//! Scores two small sample sets: three captures of one PUF under varying
//! conditions, and one capture each from three PUF instances.
//!
//! Run: `cargo run --example basic`

use pufmetrics_core::{
    AnalysisConfig, Response, analyze_captures, analyze_population, avalanche_effect,
    bit_aliasing, bit_error_rate, correlation_coefficient, entropy, hamming_distance,
    inter_puf_variation, intra_puf_variation, min_entropy, mutual_information, reliability,
    uniformity, uniqueness,
};

fn parse_all(items: &[&str]) -> Result<Vec<Response>, pufmetrics_core::ParseResponseError> {
    items.iter().map(|s| s.parse()).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Same PUF: normal, slightly varied, and another condition
    let captures = parse_all(&["11001010", "11001011", "11011010"])?;
    // Three PUF instances under the same condition
    let pufs = parse_all(&["11001010", "10101010", "11101010"])?;

    println!("Hamming distance:        {}", hamming_distance(&captures[0], &captures[1])?);
    println!("Bit error rate:          {}", bit_error_rate(&captures[0], &captures[1])?);
    println!("Intra-PUF variation:     {:.4}", intra_puf_variation(&captures)?);
    println!("Inter-PUF variation:     {:.4}", inter_puf_variation(&pufs)?);
    println!("Uniqueness:              {:.4}", uniqueness(&pufs)?);
    println!("Reliability:             {:.4}", reliability(&captures)?);
    println!("Avalanche effect:        {:.4}", avalanche_effect(&captures)?);
    println!("Uniformity:              {:.2}%", uniformity(&captures[0])?);
    println!("Bit aliasing:            {:?}", bit_aliasing(&captures)?);
    println!("Correlation coefficient: {:.4}", correlation_coefficient(&pufs)?);
    println!("Entropy:                 {:.4}", entropy(&captures)?);
    println!("Mutual information:      {:.4}", mutual_information(&pufs)?);
    println!("Min-entropy:             {:.4}", min_entropy(&captures)?);

    println!("\n--- Capture report ---\n{}", analyze_captures(&captures)?);
    println!(
        "\n--- Population report ---\n{}",
        analyze_population(&pufs, &AnalysisConfig::default())?
    );
    Ok(())
}
