use pufmetrics_core::analyze_captures;

use super::{CommandResult, parse_responses};

pub fn run(args: &[String]) -> CommandResult {
    let responses = parse_responses(args)?;
    log::info!("scoring {} captures", responses.len());
    println!("{}", analyze_captures(&responses)?);
    Ok(())
}
