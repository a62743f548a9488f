use pufmetrics_core::{Response, uniformity};

use super::CommandResult;

pub fn run(response: &str) -> CommandResult {
    let response: Response = response.parse()?;
    println!("Uniformity: {:.2}%", uniformity(&response)?);
    Ok(())
}
