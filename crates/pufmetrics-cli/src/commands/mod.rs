pub mod captures;
pub mod distance;
pub mod population;
pub mod uniformity;

use pufmetrics_core::Response;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Parse every argument as a response, reporting the first bad one by
/// position.
pub fn parse_responses(args: &[String]) -> Result<Vec<Response>, Box<dyn std::error::Error>> {
    args.iter()
        .enumerate()
        .map(|(i, s)| {
            s.parse::<Response>()
                .map_err(|e| -> Box<dyn std::error::Error> {
                    format!("response #{} ({s}): {e}", i + 1).into()
                })
        })
        .collect()
}
