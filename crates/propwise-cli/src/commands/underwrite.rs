use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use propwise_core::types::{PropertyRecord, PropertyType};

use crate::commands::build_underwriter;
use crate::input;

/// Arguments for single-property underwriting
#[derive(Args)]
pub struct UnderwriteArgs {
    /// Path to JSON input file with the property record
    #[arg(long)]
    pub input: Option<String>,

    /// Street address of the property
    #[arg(long)]
    pub address: Option<String>,

    /// Purchase price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Estimated monthly rent
    #[arg(long)]
    pub rent: Option<Decimal>,

    /// Living area in square feet
    #[arg(long, default_value = "1500")]
    pub square_footage: u32,

    #[arg(long, default_value = "3")]
    pub bedrooms: u32,

    #[arg(long, default_value = "2.0")]
    pub bathrooms: Decimal,

    #[arg(long, default_value = "2015")]
    pub year_built: i32,

    #[arg(long, default_value = "30")]
    pub days_on_market: u32,

    /// Opaque listing identifier
    #[arg(long)]
    pub listing_reference: Option<String>,

    /// Maximum cash available at closing (down payment plus closing costs)
    #[arg(long)]
    pub oop_requirement: Option<Decimal>,

    /// Path to JSON file overriding the default financial assumptions
    #[arg(long)]
    pub assumptions: Option<String>,

    /// Calendar year used by the property-age risk rule
    #[arg(long)]
    pub analysis_year: Option<i32>,
}

pub fn run_underwrite(args: UnderwriteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let property: PropertyRecord = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let address = args
            .address
            .ok_or("--address is required (or provide --input)")?;
        PropertyRecord {
            listing_reference: args
                .listing_reference
                .unwrap_or_else(|| format!("manual-{}", address.replace(' ', "-"))),
            address,
            purchase_price: args.price.ok_or("--price is required (or provide --input)")?,
            square_footage: args.square_footage,
            bedrooms: args.bedrooms,
            bathrooms: args.bathrooms,
            year_built: args.year_built,
            property_type: PropertyType::SingleFamily,
            estimated_monthly_rent: args
                .rent
                .ok_or("--rent is required (or provide --input)")?,
            days_on_market: args.days_on_market,
        }
    };

    let underwriter = build_underwriter(args.assumptions.as_deref(), args.analysis_year)?;
    let result = underwriter.underwrite(&property, args.oop_requirement)?;
    Ok(serde_json::to_value(result)?)
}
