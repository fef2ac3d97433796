//! Rule-based risk scoring over market, cash-flow, return, and age signals.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::cash_flow::CashFlowResult;
use crate::types::PropertyRecord;

const MEDIUM_RISK_SCORE: u32 = 3;
const HIGH_RISK_SCORE: u32 = 5;

/// Cash-on-cash thresholds, percentage-scaled to match `ReturnProfile`.
const LOW_COC_PCT: Decimal = dec!(5.0);
const MODERATE_COC_PCT: Decimal = dec!(8.0);

const THIN_CASH_FLOW: Decimal = dec!(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// The signal families the rules draw from. Mitigation advice is emitted
/// once per triggered family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RiskCategory {
    MarketTiming,
    CashFlow,
    Return,
    PropertyAge,
}

impl RiskCategory {
    fn mitigation(&self) -> &'static str {
        match self {
            RiskCategory::MarketTiming => {
                "Conduct thorough market analysis and price optimization"
            }
            RiskCategory::CashFlow => "Implement optimization strategies to improve cash flow",
            RiskCategory::Return => "Consider alternative properties or financing options",
            RiskCategory::PropertyAge => {
                "Budget for increased maintenance and potential renovations"
            }
        }
    }
}

/// Accumulated rule triggers for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub mitigation_strategies: Vec<String>,
}

fn add_factor(
    factors: &mut Vec<String>,
    categories: &mut Vec<RiskCategory>,
    factor: &str,
    category: RiskCategory,
    points: u32,
) -> u32 {
    factors.push(factor.to_string());
    if !categories.contains(&category) {
        categories.push(category);
    }
    points
}

/// Evaluate every rule independently and accumulate points.
///
/// `coc_return` is percentage-scaled (9.0 = 9%), matching the scale the
/// return decomposer emits.
pub fn assess_risk(
    property: &PropertyRecord,
    cash_flow: &CashFlowResult,
    coc_return: Decimal,
    analysis_year: i32,
) -> RiskAssessment {
    let mut risk_score = 0u32;
    let mut factors: Vec<String> = Vec::new();
    let mut triggered: Vec<RiskCategory> = Vec::new();

    // Market timing
    if property.days_on_market > 90 {
        risk_score += add_factor(
            &mut factors,
            &mut triggered,
            "High days on market",
            RiskCategory::MarketTiming,
            2,
        );
    } else if property.days_on_market > 60 {
        risk_score += add_factor(
            &mut factors,
            &mut triggered,
            "Moderate days on market",
            RiskCategory::MarketTiming,
            1,
        );
    }

    // Cash flow
    if cash_flow.monthly_cash_flow < Decimal::ZERO {
        risk_score += add_factor(
            &mut factors,
            &mut triggered,
            "Negative cash flow",
            RiskCategory::CashFlow,
            3,
        );
    } else if cash_flow.monthly_cash_flow < THIN_CASH_FLOW {
        risk_score += add_factor(
            &mut factors,
            &mut triggered,
            "Low cash flow",
            RiskCategory::CashFlow,
            1,
        );
    }

    // Return
    if coc_return < LOW_COC_PCT {
        risk_score += add_factor(
            &mut factors,
            &mut triggered,
            "Low CoC return",
            RiskCategory::Return,
            2,
        );
    } else if coc_return < MODERATE_COC_PCT {
        risk_score += add_factor(
            &mut factors,
            &mut triggered,
            "Moderate CoC return",
            RiskCategory::Return,
            1,
        );
    }

    // Age
    if property.age_in(analysis_year) > 30 {
        risk_score += add_factor(
            &mut factors,
            &mut triggered,
            "Older property",
            RiskCategory::PropertyAge,
            1,
        );
    }

    let risk_level = if risk_score >= HIGH_RISK_SCORE {
        RiskLevel::High
    } else if risk_score >= MEDIUM_RISK_SCORE {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let mitigation_strategies = triggered
        .iter()
        .map(|c| c.mitigation().to_string())
        .collect();

    RiskAssessment {
        risk_score,
        risk_level,
        risk_factors: factors,
        mitigation_strategies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cash_flow::compute_cash_flow;
    use crate::types::PropertyType;
    use rust_decimal_macros::dec;

    fn property(days_on_market: u32, year_built: i32) -> PropertyRecord {
        PropertyRecord {
            address: "4567 Willow Way, Houston, TX 77009".into(),
            purchase_price: dec!(350000),
            square_footage: 2200,
            bedrooms: 3,
            bathrooms: dec!(2.5),
            year_built,
            property_type: PropertyType::SingleFamily,
            estimated_monthly_rent: dec!(2800),
            days_on_market,
            listing_reference: "listing-4567".into(),
        }
    }

    #[test]
    fn test_clean_property_scores_low() {
        let cash_flow = compute_cash_flow(dec!(2800), dec!(2000), dec!(500));
        let assessment = assess_risk(&property(20, 2018), &cash_flow, dec!(10.0), 2026);

        assert_eq!(assessment.risk_score, 0);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert!(assessment.risk_factors.is_empty());
        assert!(assessment.mitigation_strategies.is_empty());
    }

    #[test]
    fn test_negative_cash_flow_and_low_return_is_high_risk() {
        let cash_flow = compute_cash_flow(dec!(2200), dec!(2246), dec!(1643.38));
        let assessment = assess_risk(&property(45, 2015), &cash_flow, dec!(-31.19), 2026);

        // Negative cash flow (+3) and low CoC (+2)
        assert_eq!(assessment.risk_score, 5);
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert_eq!(
            assessment.risk_factors,
            vec!["Negative cash flow", "Low CoC return"]
        );
    }

    #[test]
    fn test_days_on_market_tiers() {
        let cash_flow = compute_cash_flow(dec!(2800), dec!(2000), dec!(500));

        let stale = assess_risk(&property(120, 2018), &cash_flow, dec!(10.0), 2026);
        assert_eq!(stale.risk_score, 2);
        assert_eq!(stale.risk_factors, vec!["High days on market"]);

        let slow = assess_risk(&property(75, 2018), &cash_flow, dec!(10.0), 2026);
        assert_eq!(slow.risk_score, 1);
        assert_eq!(slow.risk_factors, vec!["Moderate days on market"]);
    }

    #[test]
    fn test_moderate_coc_band() {
        let cash_flow = compute_cash_flow(dec!(2800), dec!(2000), dec!(500));
        let assessment = assess_risk(&property(20, 2018), &cash_flow, dec!(6.19), 2026);

        assert_eq!(assessment.risk_score, 1);
        assert_eq!(assessment.risk_factors, vec!["Moderate CoC return"]);
    }

    #[test]
    fn test_older_property_adds_a_point() {
        let cash_flow = compute_cash_flow(dec!(2800), dec!(2000), dec!(500));
        let assessment = assess_risk(&property(20, 1990), &cash_flow, dec!(10.0), 2026);

        assert_eq!(assessment.risk_score, 1);
        assert_eq!(assessment.risk_factors, vec!["Older property"]);
        assert_eq!(
            assessment.mitigation_strategies,
            vec!["Budget for increased maintenance and potential renovations"]
        );
    }

    #[test]
    fn test_one_mitigation_per_category() {
        // Thin cash flow (+1), moderate CoC (+1), moderate market (+1), old (+1)
        let cash_flow = compute_cash_flow(dec!(2800), dec!(2250), dec!(500));
        let assessment = assess_risk(&property(75, 1980), &cash_flow, dec!(6.0), 2026);

        assert_eq!(assessment.risk_score, 4);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
        assert_eq!(assessment.risk_factors.len(), 4);
        assert_eq!(assessment.mitigation_strategies.len(), 4);
    }
}
