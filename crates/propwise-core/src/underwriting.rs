//! Composes the full analysis pipeline for one property.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assumptions::FinancialAssumptions;
use crate::cash_flow::{compute_cash_flow, CashFlowResult};
use crate::error::UnderwritingError;
use crate::expenses::{compute_expenses, OperatingExpenseBreakdown};
use crate::mortgage::{self, MortgageTerms};
use crate::optimization::{generate_opportunities, OptimizationOpportunity};
use crate::recommendation::{recommend, Recommendation};
use crate::returns::{decompose_returns, ReturnProfile};
use crate::risk::{assess_risk, RiskAssessment};
use crate::scenarios::{run_scenarios, ScenarioSet};
use crate::types::{Money, PropertyRecord};
use crate::PropwiseResult;

/// Complete analysis for one property. Pure function output with no
/// independent lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnderwritingResult {
    pub property: PropertyRecord,
    pub assumptions: FinancialAssumptions,
    pub mortgage: MortgageTerms,
    pub expenses: OperatingExpenseBreakdown,
    pub cash_flow: CashFlowResult,
    pub returns: ReturnProfile,
    /// Headline cash-on-cash figure, percentage-scaled.
    pub coc_return: Decimal,
    pub scenarios: ScenarioSet,
    pub optimization_opportunities: Vec<OptimizationOpportunity>,
    pub risk_assessment: RiskAssessment,
    pub recommendation: Recommendation,
}

/// Stateless underwriting engine: validated assumptions plus the calendar
/// year used for property-age rules. Shareable across threads; every call
/// allocates its result fresh.
#[derive(Debug, Clone)]
pub struct Underwriter {
    assumptions: FinancialAssumptions,
    analysis_year: i32,
}

impl Default for Underwriter {
    fn default() -> Self {
        Self {
            assumptions: FinancialAssumptions::default(),
            analysis_year: Utc::now().year(),
        }
    }
}

impl Underwriter {
    pub fn new(assumptions: FinancialAssumptions) -> PropwiseResult<Self> {
        assumptions.validate()?;
        Ok(Self {
            assumptions,
            analysis_year: Utc::now().year(),
        })
    }

    /// Pin the calendar year used by the age rules.
    pub fn with_analysis_year(mut self, year: i32) -> Self {
        self.analysis_year = year;
        self
    }

    pub fn assumptions(&self) -> &FinancialAssumptions {
        &self.assumptions
    }

    fn validate_property(&self, property: &PropertyRecord) -> PropwiseResult<()> {
        if property.purchase_price <= Decimal::ZERO {
            return Err(UnderwritingError::InvalidInput {
                field: "purchase_price".into(),
                reason: "Purchase price must be positive".into(),
            });
        }

        if property.estimated_monthly_rent < Decimal::ZERO {
            return Err(UnderwritingError::InvalidInput {
                field: "estimated_monthly_rent".into(),
                reason: "Estimated rent must not be negative".into(),
            });
        }

        Ok(())
    }

    /// Run the full pipeline: financing terms, expenses, cash flow, return
    /// decomposition, scenarios, optimization catalog, risk rules, and the
    /// final recommendation, in that order.
    ///
    /// `oop_requirement` of `None` means no cash ceiling. Validation errors
    /// surface immediately; nothing is computed for a rejected record.
    pub fn underwrite(
        &self,
        property: &PropertyRecord,
        oop_requirement: Option<Money>,
    ) -> PropwiseResult<UnderwritingResult> {
        self.assumptions.validate()?;
        self.validate_property(property)?;

        log::debug!(
            "underwriting {} (price {})",
            property.address,
            property.purchase_price
        );

        let mortgage = mortgage::compute_terms(property.purchase_price, &self.assumptions)?;

        let expenses = compute_expenses(
            property.purchase_price,
            property.estimated_monthly_rent,
            &self.assumptions,
        );
        let monthly_expenses = expenses.monthly_total();

        let cash_flow = compute_cash_flow(
            property.estimated_monthly_rent,
            monthly_expenses,
            mortgage.monthly_payment,
        );

        let returns =
            decompose_returns(property.purchase_price, &mortgage, &cash_flow, &self.assumptions)?;
        let coc_return = returns.cash_on_cash;

        let scenarios = run_scenarios(
            property.estimated_monthly_rent,
            monthly_expenses,
            &mortgage,
        );

        let optimization_opportunities = generate_opportunities(&cash_flow, expenses.management);

        let risk_assessment = assess_risk(property, &cash_flow, coc_return, self.analysis_year);

        let recommendation = recommend(
            coc_return,
            &risk_assessment,
            mortgage.total_out_of_pocket,
            oop_requirement,
        );

        log::debug!(
            "{}: coc {}%, {}",
            property.address,
            coc_return,
            recommendation
        );

        Ok(UnderwritingResult {
            property: property.clone(),
            assumptions: self.assumptions.clone(),
            mortgage,
            expenses,
            cash_flow,
            returns,
            coc_return,
            scenarios,
            optimization_opportunities,
            risk_assessment,
            recommendation,
        })
    }
}
