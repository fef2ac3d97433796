//! Financing and operating assumptions bound to an analysis.
//!
//! There is no process-wide configuration: callers construct (or deserialize)
//! a `FinancialAssumptions`, validate it once, and pass it into every call.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::UnderwritingError;
use crate::types::{Money, Rate};
use crate::PropwiseResult;

/// Immutable financing and operating-cost assumptions.
///
/// Rates are decimals (0.065 = 6.5%). The fixed utility-style items are
/// monthly dollar amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialAssumptions {
    pub down_payment_fraction: Rate,
    pub annual_interest_rate: Rate,
    pub loan_term_years: u32,
    pub appreciation_rate: Rate,
    pub marginal_tax_rate: Rate,
    /// Straight-line residential depreciation period (years).
    pub depreciation_period_years: Decimal,
    pub property_tax_rate: Rate,
    pub insurance_rate: Rate,
    pub maintenance_rate: Rate,
    pub management_fee_fraction: Rate,
    pub vacancy_rate: Rate,
    pub closing_costs_fraction: Rate,
    pub internet: Money,
    pub water: Money,
    pub electricity: Money,
    pub natural_gas: Money,
    pub pest_control: Money,
    pub pool_maintenance: Money,
}

impl Default for FinancialAssumptions {
    fn default() -> Self {
        Self {
            down_payment_fraction: dec!(0.20),
            annual_interest_rate: dec!(0.065),
            loan_term_years: 30,
            appreciation_rate: dec!(0.03),
            marginal_tax_rate: dec!(0.25),
            depreciation_period_years: dec!(27.5),
            property_tax_rate: dec!(0.025),
            insurance_rate: dec!(0.008),
            maintenance_rate: dec!(0.015),
            management_fee_fraction: dec!(0.08),
            vacancy_rate: dec!(0.05),
            closing_costs_fraction: dec!(0.03),
            internet: dec!(100),
            water: dec!(60),
            electricity: dec!(300),
            natural_gas: dec!(0),
            pest_control: dec!(50),
            pool_maintenance: dec!(150),
        }
    }
}

impl FinancialAssumptions {
    /// Enforce the lending-policy ranges before any derived computation.
    pub fn validate(&self) -> PropwiseResult<()> {
        if self.down_payment_fraction < dec!(0.20) {
            return Err(UnderwritingError::InvalidInput {
                field: "down_payment_fraction".into(),
                reason: "Down payment must be at least 20%".into(),
            });
        }

        if self.annual_interest_rate <= Decimal::ZERO {
            return Err(UnderwritingError::InvalidInput {
                field: "annual_interest_rate".into(),
                reason: "Interest rate must be positive".into(),
            });
        }

        if self.annual_interest_rate >= dec!(0.20) {
            return Err(UnderwritingError::InvalidInput {
                field: "annual_interest_rate".into(),
                reason: "Interest rate must be below 20%".into(),
            });
        }

        if self.loan_term_years == 0 {
            return Err(UnderwritingError::InvalidInput {
                field: "loan_term_years".into(),
                reason: "Loan term must be at least 1 year".into(),
            });
        }

        if self.depreciation_period_years <= Decimal::ZERO {
            return Err(UnderwritingError::InvalidInput {
                field: "depreciation_period_years".into(),
                reason: "Depreciation period must be positive".into(),
            });
        }

        let non_negative_rates = [
            ("appreciation_rate", self.appreciation_rate),
            ("marginal_tax_rate", self.marginal_tax_rate),
            ("property_tax_rate", self.property_tax_rate),
            ("insurance_rate", self.insurance_rate),
            ("maintenance_rate", self.maintenance_rate),
            ("management_fee_fraction", self.management_fee_fraction),
            ("vacancy_rate", self.vacancy_rate),
            ("closing_costs_fraction", self.closing_costs_fraction),
        ];
        for (field, rate) in non_negative_rates {
            if rate < Decimal::ZERO {
                return Err(UnderwritingError::InvalidInput {
                    field: field.into(),
                    reason: "Rate must not be negative".into(),
                });
            }
        }

        Ok(())
    }
}
