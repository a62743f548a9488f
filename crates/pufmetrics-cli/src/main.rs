//! CLI for pufmetrics: score PUF response sets from the command line.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pufmetrics")]
#[command(about = "pufmetrics: quality metrics for PUF responses")]
#[command(version = pufmetrics_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hamming distance and bit error rate between two responses
    Distance {
        /// Reference (expected) response, e.g. 11001010
        expected: String,
        /// Observed response of the same length
        actual: String,
    },

    /// Repeated captures of one PUF instance: variation, reliability,
    /// avalanche effect, per-capture bit error rates.
    /// The first response is the reference.
    Captures {
        /// Two or more responses of equal length
        #[arg(required = true, num_args = 2..)]
        responses: Vec<String>,
    },

    /// One capture per PUF instance: inter-PUF variation, uniqueness,
    /// correlation, bit aliasing, entropy, min-entropy, mutual information.
    Population {
        /// Two or more responses of equal length
        #[arg(required = true, num_args = 2..)]
        responses: Vec<String>,

        /// Skip mean pairwise mutual information (quadratic in response length)
        #[arg(long)]
        no_mutual_information: bool,
    },

    /// Percentage of '1' bits in a single response
    Uniformity {
        /// Response to score
        response: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Distance { expected, actual } => commands::distance::run(&expected, &actual),
        Commands::Captures { responses } => commands::captures::run(&responses),
        Commands::Population {
            responses,
            no_mutual_information,
        } => commands::population::run(
            &responses,
            &pufmetrics_core::AnalysisConfig {
                mutual_information: !no_mutual_information,
            },
        ),
        Commands::Uniformity { response } => commands::uniformity::run(&response),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
