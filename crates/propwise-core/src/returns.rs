//! Four-component return decomposition.
//!
//! Every component is an annual dollar benefit normalized against the cash
//! invested (the down payment) and expressed as a percentage (9.0 = 9%),
//! rounded to two decimals. The blended total is the sum of the rounded
//! components.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assumptions::FinancialAssumptions;
use crate::cash_flow::CashFlowResult;
use crate::mortgage::{self, MortgageTerms};
use crate::types::Money;
use crate::PropwiseResult;

/// Share of purchase price treated as depreciable building value.
const DEPRECIABLE_BASIS: Decimal = dec!(0.8);

/// Percentage return components, each normalized against the down payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnProfile {
    pub cash_on_cash: Decimal,
    pub appreciation: Decimal,
    pub tax_savings: Decimal,
    pub principal_paydown: Decimal,
    /// Sum of the four components above.
    pub total_return: Decimal,
}

/// Annual benefit over cash invested, as a rounded percentage.
///
/// A non-positive down payment is a valid degenerate state, not an error;
/// the component is simply zero.
fn component(annual_benefit: Money, down_payment: Money) -> Decimal {
    if down_payment <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (annual_benefit / down_payment * dec!(100)).round_dp(2)
}

/// Decompose the first-year return into its four components.
pub fn decompose_returns(
    purchase_price: Money,
    terms: &MortgageTerms,
    cash_flow: &CashFlowResult,
    assumptions: &FinancialAssumptions,
) -> PropwiseResult<ReturnProfile> {
    let amortization = mortgage::first_year_amortization(
        terms.loan_amount,
        assumptions.annual_interest_rate,
        assumptions.loan_term_years,
    )?;

    let cash_on_cash = component(cash_flow.annual_cash_flow, terms.down_payment);

    let annual_appreciation = purchase_price * assumptions.appreciation_rate;
    let appreciation = component(annual_appreciation, terms.down_payment);

    // Straight-line depreciation of the building portion of the price
    let annual_depreciation =
        purchase_price * DEPRECIABLE_BASIS / assumptions.depreciation_period_years;
    let annual_tax_savings = annual_depreciation * assumptions.marginal_tax_rate;
    let tax_savings = component(annual_tax_savings, terms.down_payment);

    let principal_paydown = component(amortization.annual_principal, terms.down_payment);

    let total_return = cash_on_cash + appreciation + tax_savings + principal_paydown;

    Ok(ReturnProfile {
        cash_on_cash,
        appreciation,
        tax_savings,
        principal_paydown,
        total_return,
    })
}
