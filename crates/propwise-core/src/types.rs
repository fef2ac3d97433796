use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
///
/// The one exception in this crate is `ReturnProfile`, whose components are
/// percentage-scaled (9.0 = 9%); see the `returns` module.
pub type Rate = Decimal;

/// Residential property classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    #[default]
    SingleFamily,
    Townhouse,
    Condo,
    MultiFamily,
    Other(String),
}

/// A candidate listing as supplied by an external sourcing collaborator
/// (scraper, generator, or manual entry). Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub address: String,
    pub purchase_price: Money,
    pub square_footage: u32,
    pub bedrooms: u32,
    pub bathrooms: Decimal,
    pub year_built: i32,
    pub property_type: PropertyType,
    pub estimated_monthly_rent: Money,
    pub days_on_market: u32,
    pub listing_reference: String,
}

impl PropertyRecord {
    /// Years since construction as of the given calendar year.
    pub fn age_in(&self, year: i32) -> i32 {
        year - self.year_built
    }
}
