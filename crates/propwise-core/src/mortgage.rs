//! Amortizing-loan primitives and financing terms.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assumptions::FinancialAssumptions;
use crate::error::UnderwritingError;
use crate::types::{Money, Rate};
use crate::PropwiseResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Financing terms derived from a purchase price and assumptions.
///
/// Invariant: `down_payment + loan_amount == purchase_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageTerms {
    pub down_payment: Money,
    pub loan_amount: Money,
    pub monthly_payment: Money,
    pub closing_costs: Money,
    /// Cash required at purchase: down payment plus closing costs.
    pub total_out_of_pocket: Money,
}

/// First-year amortization split of an amortizing loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSummary {
    pub monthly_payment: Money,
    pub annual_interest: Money,
    pub annual_principal: Money,
    pub remaining_balance: Money,
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// Standard fixed-rate mortgage payment: P = L * r(1+r)^n / ((1+r)^n - 1)
/// where r is the monthly rate and n the number of monthly payments.
///
/// A zero rate degenerates to straight-line repayment `L / n`.
pub fn monthly_payment(
    loan_amount: Money,
    annual_rate: Rate,
    term_years: u32,
) -> PropwiseResult<Money> {
    if loan_amount < Decimal::ZERO {
        return Err(UnderwritingError::InvalidInput {
            field: "loan_amount".into(),
            reason: "Loan amount must not be negative".into(),
        });
    }

    if term_years == 0 {
        return Err(UnderwritingError::InvalidInput {
            field: "term_years".into(),
            reason: "Loan term must be at least 1 year".into(),
        });
    }

    let monthly_rate = annual_rate / dec!(12);
    let num_payments = term_years * 12;

    if monthly_rate.is_zero() {
        return Ok(loan_amount / Decimal::from(num_payments));
    }

    // (1 + r)^n via iterative multiplication
    let mut compound = Decimal::ONE;
    for _ in 0..num_payments {
        compound *= Decimal::ONE + monthly_rate;
    }

    let numerator = loan_amount * monthly_rate * compound;
    let denominator = compound - Decimal::ONE;

    Ok(numerator / denominator)
}

/// Walk the first twelve rows of the amortization schedule, splitting each
/// payment into interest (balance * r) and principal (payment - interest).
pub fn first_year_amortization(
    loan_amount: Money,
    annual_rate: Rate,
    term_years: u32,
) -> PropwiseResult<AmortizationSummary> {
    let payment = monthly_payment(loan_amount, annual_rate, term_years)?;
    let monthly_rate = annual_rate / dec!(12);

    let mut balance = loan_amount;
    let mut total_interest = Decimal::ZERO;
    let mut total_principal = Decimal::ZERO;

    for _ in 0..12 {
        let interest = balance * monthly_rate;
        let principal = payment - interest;
        total_interest += interest;
        total_principal += principal;
        balance -= principal;
    }

    Ok(AmortizationSummary {
        monthly_payment: payment,
        annual_interest: total_interest,
        annual_principal: total_principal,
        remaining_balance: balance,
    })
}

/// Derive financing terms for a purchase under the given assumptions.
pub fn compute_terms(
    purchase_price: Money,
    assumptions: &FinancialAssumptions,
) -> PropwiseResult<MortgageTerms> {
    if purchase_price <= Decimal::ZERO {
        return Err(UnderwritingError::InvalidInput {
            field: "purchase_price".into(),
            reason: "Purchase price must be positive".into(),
        });
    }

    let down_payment = purchase_price * assumptions.down_payment_fraction;
    let loan_amount = purchase_price - down_payment;
    let payment = monthly_payment(
        loan_amount,
        assumptions.annual_interest_rate,
        assumptions.loan_term_years,
    )?;
    let closing_costs = purchase_price * assumptions.closing_costs_fraction;

    Ok(MortgageTerms {
        down_payment,
        loan_amount,
        monthly_payment: payment,
        closing_costs,
        total_out_of_pocket: down_payment + closing_costs,
    })
}
