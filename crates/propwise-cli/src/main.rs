mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::scenario::ScenarioArgs;
use commands::underwrite::UnderwriteArgs;

/// Residential investment property underwriting
#[derive(Parser)]
#[command(
    name = "propwise",
    version,
    about = "Residential investment property underwriting",
    long_about = "Analyze residential investment properties with decimal precision: \
                  financing terms, operating cash flow, four-component return \
                  decomposition, low/mid/high scenarios, optimization opportunities, \
                  risk scoring, and a buy/hold/pass recommendation."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Underwrite a single property
    Underwrite(UnderwriteArgs),
    /// Rank a candidate pool against a client scenario
    Scenario(ScenarioArgs),
    /// Print the built-in sample candidate pool
    SamplePool,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Underwrite(args) => commands::underwrite::run_underwrite(args),
        Commands::Scenario(args) => commands::scenario::run_scenario(args),
        Commands::SamplePool => commands::pool::run_sample_pool(),
        Commands::Version => {
            println!("propwise {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
