use pufmetrics_core::{AnalysisConfig, analyze_population};

use super::{CommandResult, parse_responses};

pub fn run(args: &[String], config: &AnalysisConfig) -> CommandResult {
    let responses = parse_responses(args)?;
    log::info!("scoring {} instances", responses.len());
    let report = analyze_population(&responses, config)?;
    println!("{report}");

    let aliased: Vec<usize> = report
        .bit_aliasing
        .iter()
        .enumerate()
        .filter(|(_, p)| **p == 0.0 || **p == 1.0)
        .map(|(i, _)| i)
        .collect();
    if !aliased.is_empty() {
        println!("\nFully aliased positions: {aliased:?}");
    }
    Ok(())
}
