use pufmetrics_core::{Response, bit_error_rate, hamming_distance};

use super::CommandResult;

pub fn run(expected: &str, actual: &str) -> CommandResult {
    let expected: Response = expected.parse()?;
    let actual: Response = actual.parse()?;

    println!("Hamming distance: {}", hamming_distance(&expected, &actual)?);
    println!("Bit error rate:   {:.4}", bit_error_rate(&expected, &actual)?);
    Ok(())
}
