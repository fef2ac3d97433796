//! Catalog of discrete value-add opportunities for an analyzed property.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::cash_flow::CashFlowResult;
use crate::risk::RiskLevel;
use crate::types::Money;

/// Return on an opportunity's investment.
///
/// Zero-investment opportunities with a positive benefit have no finite
/// ratio; the tagged variant forces consumers to handle that case instead
/// of comparing against a float infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Roi {
    Finite(Decimal),
    Infinite,
}

impl Roi {
    /// Annual benefit over investment, guarded for zero investment.
    pub fn from_cash_flows(investment: Money, annual_benefit: Money) -> Self {
        if investment.is_zero() {
            if annual_benefit > Decimal::ZERO {
                Roi::Infinite
            } else {
                Roi::Finite(Decimal::ZERO)
            }
        } else {
            Roi::Finite(annual_benefit / investment)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpportunityCategory {
    Revenue,
    Expense,
    Improvement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One improvement action with its cost/benefit profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationOpportunity {
    pub category: OpportunityCategory,
    pub title: String,
    pub description: String,
    pub investment: Money,
    pub annual_benefit: Money,
    pub roi: Roi,
    pub implementation_time: String,
    pub priority: Priority,
    pub risk_level: RiskLevel,
}

/// Evaluate the opportunity catalog against the property's current numbers.
///
/// The rental-rate and self-management entries only appear when their
/// underlying benefit is positive; the three improvement entries are
/// unconditional.
pub fn generate_opportunities(
    cash_flow: &CashFlowResult,
    management_fee: Money,
) -> Vec<OptimizationOpportunity> {
    let mut opportunities = Vec::new();

    // 1. Rental rate: assume 10% of market upside
    let current_rent = cash_flow.monthly_rent;
    let market_rent = current_rent * dec!(1.10);
    let rent_increase = market_rent - current_rent;
    if rent_increase > Decimal::ZERO {
        let annual_benefit = rent_increase * dec!(12);
        opportunities.push(OptimizationOpportunity {
            category: OpportunityCategory::Revenue,
            title: "Rental Rate Optimization".into(),
            description: format!(
                "Increase rent from ${} to ${}/month",
                current_rent.round_dp(0),
                market_rent.round_dp(0)
            ),
            investment: Decimal::ZERO,
            annual_benefit,
            roi: Roi::from_cash_flows(Decimal::ZERO, annual_benefit),
            implementation_time: "Immediate".into(),
            priority: Priority::High,
            risk_level: RiskLevel::Low,
        });
    }

    // 2. Self-management
    if management_fee > Decimal::ZERO {
        let annual_benefit = management_fee * dec!(12);
        opportunities.push(OptimizationOpportunity {
            category: OpportunityCategory::Expense,
            title: "Self-Management".into(),
            description: format!(
                "Save ${}/month by self-managing",
                management_fee.round_dp(0)
            ),
            investment: Decimal::ZERO,
            annual_benefit,
            roi: Roi::from_cash_flows(Decimal::ZERO, annual_benefit),
            implementation_time: "Immediate".into(),
            priority: Priority::High,
            risk_level: RiskLevel::Medium,
        });
    }

    // 3. Energy efficiency
    let energy_investment = dec!(500);
    let energy_annual = dec!(50) * dec!(12);
    opportunities.push(OptimizationOpportunity {
        category: OpportunityCategory::Improvement,
        title: "Energy Efficiency".into(),
        description: "Install smart thermostat and LED lighting".into(),
        investment: energy_investment,
        annual_benefit: energy_annual,
        roi: Roi::from_cash_flows(energy_investment, energy_annual),
        implementation_time: "1 month".into(),
        priority: Priority::Medium,
        risk_level: RiskLevel::Low,
    });

    // 4. Curb appeal
    let curb_investment = dec!(2000);
    let curb_annual = dec!(100) * dec!(12);
    opportunities.push(OptimizationOpportunity {
        category: OpportunityCategory::Improvement,
        title: "Curb Appeal Enhancement".into(),
        description: "Landscaping and exterior improvements".into(),
        investment: curb_investment,
        annual_benefit: curb_annual,
        roi: Roi::from_cash_flows(curb_investment, curb_annual),
        implementation_time: "2 months".into(),
        priority: Priority::Medium,
        risk_level: RiskLevel::Low,
    });

    // 5. Kitchen update
    let kitchen_investment = dec!(5000);
    let kitchen_annual = dec!(150) * dec!(12);
    opportunities.push(OptimizationOpportunity {
        category: OpportunityCategory::Improvement,
        title: "Kitchen Updates".into(),
        description: "Minor kitchen refresh and updates".into(),
        investment: kitchen_investment,
        annual_benefit: kitchen_annual,
        roi: Roi::from_cash_flows(kitchen_investment, kitchen_annual),
        implementation_time: "3 months".into(),
        priority: Priority::Low,
        risk_level: RiskLevel::Medium,
    });

    opportunities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cash_flow::compute_cash_flow;
    use rust_decimal_macros::dec;

    fn reference_cash_flow() -> CashFlowResult {
        compute_cash_flow(dec!(2300), dec!(1439), dec!(606.79))
    }

    #[test]
    fn test_full_catalog_for_rented_property() {
        let opportunities = generate_opportunities(&reference_cash_flow(), dec!(184));
        assert_eq!(opportunities.len(), 5);

        let rental = &opportunities[0];
        assert_eq!(rental.category, OpportunityCategory::Revenue);
        assert_eq!(rental.annual_benefit, dec!(2760.00));
        assert_eq!(rental.roi, Roi::Infinite);

        let self_management = &opportunities[1];
        assert_eq!(self_management.annual_benefit, dec!(2208));
        assert_eq!(self_management.roi, Roi::Infinite);
    }

    #[test]
    fn test_improvement_rois_are_finite() {
        let opportunities = generate_opportunities(&reference_cash_flow(), dec!(184));

        let energy = &opportunities[2];
        assert_eq!(energy.roi, Roi::Finite(dec!(1.2)));

        let curb = &opportunities[3];
        assert_eq!(curb.roi, Roi::Finite(dec!(0.6)));

        let kitchen = &opportunities[4];
        assert_eq!(kitchen.roi, Roi::Finite(dec!(0.36)));
    }

    #[test]
    fn test_conditional_entries_omitted() {
        // Zero rent: no rental upside. Zero management fee: no self-management.
        let cash_flow = compute_cash_flow(dec!(0), dec!(1100), dec!(606.79));
        let opportunities = generate_opportunities(&cash_flow, dec!(0));

        assert_eq!(opportunities.len(), 3);
        assert!(opportunities
            .iter()
            .all(|o| o.category == OpportunityCategory::Improvement));
    }

    #[test]
    fn test_roi_guard_with_zero_benefit() {
        assert_eq!(
            Roi::from_cash_flows(dec!(0), dec!(0)),
            Roi::Finite(dec!(0))
        );
        assert_eq!(Roi::from_cash_flows(dec!(0), dec!(100)), Roi::Infinite);
        assert_eq!(
            Roi::from_cash_flows(dec!(200), dec!(100)),
            Roi::Finite(dec!(0.5))
        );
    }
}
