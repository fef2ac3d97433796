//! Final buy/hold/pass decision.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::risk::{RiskAssessment, RiskLevel};
use crate::types::Money;

const STRONG_BUY_COC_PCT: Decimal = dec!(9.0);
const BUY_COC_PCT: Decimal = dec!(7.0);
const HOLD_COC_PCT: Decimal = dec!(5.0);

/// Labeled action for one analyzed property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "STRONG BUY - Excellent CoC return")]
    StrongBuy,
    #[serde(rename = "BUY - Good CoC return")]
    Buy,
    #[serde(rename = "HOLD - Acceptable CoC return")]
    Hold,
    #[serde(rename = "PASS - Exceeds OOP requirement")]
    PassOopRequirement,
    #[serde(rename = "PASS - High risk level")]
    PassHighRisk,
    #[serde(rename = "PASS - Insufficient CoC return")]
    PassLowReturn,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "STRONG BUY - Excellent CoC return",
            Recommendation::Buy => "BUY - Good CoC return",
            Recommendation::Hold => "HOLD - Acceptable CoC return",
            Recommendation::PassOopRequirement => "PASS - Exceeds OOP requirement",
            Recommendation::PassHighRisk => "PASS - High risk level",
            Recommendation::PassLowReturn => "PASS - Insufficient CoC return",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(
            self,
            Recommendation::PassOopRequirement
                | Recommendation::PassHighRisk
                | Recommendation::PassLowReturn
        )
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide in strict order: cash ceiling, risk gate, then return tiers.
///
/// `coc_return` is percentage-scaled; `oop_requirement` of `None` means
/// the buyer has no cash ceiling.
pub fn recommend(
    coc_return: Decimal,
    risk: &RiskAssessment,
    total_out_of_pocket: Money,
    oop_requirement: Option<Money>,
) -> Recommendation {
    if let Some(max_oop) = oop_requirement {
        if total_out_of_pocket > max_oop {
            return Recommendation::PassOopRequirement;
        }
    }

    if risk.risk_level == RiskLevel::High {
        return Recommendation::PassHighRisk;
    }

    if coc_return >= STRONG_BUY_COC_PCT {
        Recommendation::StrongBuy
    } else if coc_return >= BUY_COC_PCT {
        Recommendation::Buy
    } else if coc_return >= HOLD_COC_PCT {
        Recommendation::Hold
    } else {
        Recommendation::PassLowReturn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn risk_at(level: RiskLevel) -> RiskAssessment {
        RiskAssessment {
            risk_score: match level {
                RiskLevel::Low => 0,
                RiskLevel::Medium => 3,
                RiskLevel::High => 5,
            },
            risk_level: level,
            risk_factors: vec![],
            mitigation_strategies: vec![],
        }
    }

    #[test]
    fn test_return_tiers() {
        let low_risk = risk_at(RiskLevel::Low);

        assert_eq!(
            recommend(dec!(12.71), &low_risk, dec!(27600), None),
            Recommendation::StrongBuy
        );
        assert_eq!(
            recommend(dec!(8.36), &low_risk, dec!(27600), None),
            Recommendation::Buy
        );
        assert_eq!(
            recommend(dec!(6.19), &low_risk, dec!(27600), None),
            Recommendation::Hold
        );
        assert_eq!(
            recommend(dec!(4.71), &low_risk, dec!(59800), None),
            Recommendation::PassLowReturn
        );
    }

    #[test]
    fn test_boundary_values_inclusive() {
        let low_risk = risk_at(RiskLevel::Low);

        assert_eq!(
            recommend(dec!(9.0), &low_risk, dec!(10000), None),
            Recommendation::StrongBuy
        );
        assert_eq!(
            recommend(dec!(7.0), &low_risk, dec!(10000), None),
            Recommendation::Buy
        );
        assert_eq!(
            recommend(dec!(5.0), &low_risk, dec!(10000), None),
            Recommendation::Hold
        );
    }

    #[test]
    fn test_oop_ceiling_overrides_any_return() {
        let low_risk = risk_at(RiskLevel::Low);
        let rec = recommend(dec!(50.0), &low_risk, dec!(80000), Some(dec!(75000)));
        assert_eq!(rec, Recommendation::PassOopRequirement);
        assert!(rec.is_pass());
    }

    #[test]
    fn test_high_risk_gate_precedes_return_tiers() {
        let high_risk = risk_at(RiskLevel::High);
        assert_eq!(
            recommend(dec!(12.0), &high_risk, dec!(10000), None),
            Recommendation::PassHighRisk
        );
    }

    #[test]
    fn test_medium_risk_does_not_gate() {
        let medium_risk = risk_at(RiskLevel::Medium);
        assert_eq!(
            recommend(dec!(9.5), &medium_risk, dec!(10000), None),
            Recommendation::StrongBuy
        );
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(
            Recommendation::StrongBuy.to_string(),
            "STRONG BUY - Excellent CoC return"
        );
        assert_eq!(
            Recommendation::PassOopRequirement.to_string(),
            "PASS - Exceeds OOP requirement"
        );
    }
}
