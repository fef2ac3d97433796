//! Net operating income and cash flow after debt service.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Monthly and annual cash position of a financed rental.
///
/// Invariant: `annual_cash_flow == monthly_cash_flow * 12`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowResult {
    pub monthly_rent: Money,
    pub monthly_expenses: Money,
    pub net_operating_income: Money,
    pub monthly_cash_flow: Money,
    pub annual_cash_flow: Money,
}

/// Combine rent, operating expenses, and debt service.
///
/// NOI is rent minus the full expense total (the vacancy reserve is one of
/// the expense lines, not a haircut on rent).
pub fn compute_cash_flow(
    monthly_rent: Money,
    monthly_expenses: Money,
    monthly_mortgage_payment: Money,
) -> CashFlowResult {
    let net_operating_income = monthly_rent - monthly_expenses;
    let monthly_cash_flow = net_operating_income - monthly_mortgage_payment;
    let annual_cash_flow = monthly_cash_flow * dec!(12);

    CashFlowResult {
        monthly_rent,
        monthly_expenses,
        net_operating_income,
        monthly_cash_flow,
        annual_cash_flow,
    }
}
