use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use propwise_core::sourcing::{self, ClientScenario};
use propwise_core::types::PropertyRecord;

use crate::commands::{build_underwriter, pool};
use crate::input;

/// Arguments for client-scenario pool comparison
#[derive(Args)]
pub struct ScenarioArgs {
    /// Path to JSON input file with the client scenario
    #[arg(long)]
    pub input: Option<String>,

    /// Scenario name
    #[arg(long)]
    pub name: Option<String>,

    /// Maximum out-of-pocket cash
    #[arg(long)]
    pub max_oop: Option<Decimal>,

    /// Maximum purchase price
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Minimum cash-on-cash return, percentage-scaled (9.0 for 9%)
    #[arg(long)]
    pub min_coc: Option<Decimal>,

    #[arg(long, default_value = "Houston, TX")]
    pub location: String,

    /// Path to JSON file with the candidate pool; omitted, the built-in
    /// sample pool is used
    #[arg(long)]
    pub pool: Option<String>,

    /// Path to JSON file overriding the default financial assumptions
    #[arg(long)]
    pub assumptions: Option<String>,

    /// Calendar year used by the property-age risk rule
    #[arg(long)]
    pub analysis_year: Option<i32>,
}

pub fn run_scenario(args: ScenarioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let scenario: ClientScenario = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ClientScenario {
            name: args.name.unwrap_or_else(|| "Client scenario".into()),
            max_out_of_pocket: args
                .max_oop
                .ok_or("--max-oop is required (or provide --input)")?,
            max_purchase_price: args
                .max_price
                .ok_or("--max-price is required (or provide --input)")?,
            min_cash_on_cash_return: args
                .min_coc
                .ok_or("--min-coc is required (or provide --input)")?,
            location: args.location,
            requirements: Vec::new(),
        }
    };

    let candidates: Vec<PropertyRecord> = match args.pool {
        Some(ref path) => input::file::read_json(path)?,
        None => pool::sample_pool(),
    };

    let underwriter = build_underwriter(args.assumptions.as_deref(), args.analysis_year)?;
    let analysis = sourcing::analyze_scenario(&underwriter, &scenario, &candidates)?;
    Ok(serde_json::to_value(analysis)?)
}
