use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use propwise_core::types::{PropertyRecord, PropertyType};

fn listing(
    address: &str,
    price: Decimal,
    square_footage: u32,
    bedrooms: u32,
    bathrooms: Decimal,
    year_built: i32,
    rent: Decimal,
    days_on_market: u32,
) -> PropertyRecord {
    PropertyRecord {
        address: address.into(),
        purchase_price: price,
        square_footage,
        bedrooms,
        bathrooms,
        year_built,
        property_type: PropertyType::SingleFamily,
        estimated_monthly_rent: rent,
        days_on_market,
        listing_reference: format!("sample/{}", address.replace(' ', "-").to_lowercase()),
    }
}

/// Fixed pool of realistic Houston-market candidates for demo runs.
/// Real analyses should supply their own pool via `--pool`.
pub fn sample_pool() -> Vec<PropertyRecord> {
    vec![
        listing(
            "2456 Oak Ridge Drive, Houston, TX 77056",
            dec!(325000),
            2150,
            3,
            dec!(2.5),
            2015,
            dec!(3200),
            45,
        ),
        listing(
            "1892 Pine Valley Lane, Houston, TX 77084",
            dec!(420000),
            2800,
            4,
            dec!(3.0),
            2018,
            dec!(3500),
            32,
        ),
        listing(
            "3421 Maple Street, Houston, TX 77002",
            dec!(285000),
            1800,
            3,
            dec!(2.0),
            2012,
            dec!(2400),
            28,
        ),
        listing(
            "5678 Elm Avenue, Houston, TX 77005",
            dec!(450000),
            3200,
            4,
            dec!(3.5),
            2020,
            dec!(3800),
            15,
        ),
        listing(
            "1234 Cedar Lane, Houston, TX 77006",
            dec!(380000),
            2400,
            3,
            dec!(2.5),
            2016,
            dec!(3000),
            22,
        ),
        listing(
            "7890 Birch Road, Houston, TX 77008",
            dec!(140000),
            1950,
            3,
            dec!(2.0),
            2014,
            dec!(2600),
            38,
        ),
        listing(
            "4567 Willow Way, Houston, TX 77009",
            dec!(120000),
            1450,
            3,
            dec!(2.0),
            2017,
            dec!(2300),
            25,
        ),
        listing(
            "2345 Spruce Circle, Houston, TX 77010",
            dec!(160000),
            2000,
            3,
            dec!(2.0),
            2013,
            dec!(2900),
            41,
        ),
    ]
}

pub fn run_sample_pool() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(sample_pool())?)
}
