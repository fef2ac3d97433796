//! Low / mid / high sensitivity analysis.
//!
//! Each scenario perturbs the base rent and expense total with fixed
//! multipliers and applies its own vacancy haircut to the rent actually
//! collected. Financing terms are never re-derived per scenario.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::cash_flow::{compute_cash_flow, CashFlowResult};
use crate::mortgage::MortgageTerms;
use crate::types::{Money, Rate};

struct ScenarioParams {
    rent_multiplier: Decimal,
    expense_multiplier: Decimal,
    vacancy_rate: Rate,
}

const LOW: ScenarioParams = ScenarioParams {
    rent_multiplier: dec!(0.90),
    expense_multiplier: dec!(1.10),
    vacancy_rate: dec!(0.08),
};

const MID: ScenarioParams = ScenarioParams {
    rent_multiplier: dec!(1.00),
    expense_multiplier: dec!(1.00),
    vacancy_rate: dec!(0.05),
};

const HIGH: ScenarioParams = ScenarioParams {
    rent_multiplier: dec!(1.10),
    expense_multiplier: dec!(0.90),
    vacancy_rate: dec!(0.03),
};

/// One perturbed rendition of the base case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Headline scenario rent (before the vacancy haircut).
    pub rent: Money,
    /// Perturbed monthly expense total.
    pub expenses: Money,
    pub vacancy_rate: Rate,
    pub cash_flow: CashFlowResult,
    /// Cash-on-cash return for this scenario, percentage-scaled.
    pub cash_on_cash: Decimal,
}

/// The three deterministic perturbations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub low: ScenarioOutcome,
    pub mid: ScenarioOutcome,
    pub high: ScenarioOutcome,
}

fn run_one(
    base_rent: Money,
    base_expenses: Money,
    terms: &MortgageTerms,
    params: &ScenarioParams,
) -> ScenarioOutcome {
    let rent = base_rent * params.rent_multiplier;
    let collected_rent = rent * (Decimal::ONE - params.vacancy_rate);
    let expenses = base_expenses * params.expense_multiplier;

    let cash_flow = compute_cash_flow(collected_rent, expenses, terms.monthly_payment);

    let cash_on_cash = if terms.down_payment <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        (cash_flow.annual_cash_flow / terms.down_payment * dec!(100)).round_dp(2)
    };

    ScenarioOutcome {
        rent,
        expenses,
        vacancy_rate: params.vacancy_rate,
        cash_flow,
        cash_on_cash,
    }
}

/// Recompute cash flow and cash-on-cash under each perturbation,
/// independently of the others.
pub fn run_scenarios(
    base_rent: Money,
    base_expenses: Money,
    terms: &MortgageTerms,
) -> ScenarioSet {
    ScenarioSet {
        low: run_one(base_rent, base_expenses, terms, &LOW),
        mid: run_one(base_rent, base_expenses, terms, &MID),
        high: run_one(base_rent, base_expenses, terms, &HIGH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::FinancialAssumptions;
    use crate::mortgage::compute_terms;
    use rust_decimal_macros::dec;

    fn reference_terms() -> MortgageTerms {
        compute_terms(dec!(325000), &FinancialAssumptions::default()).unwrap()
    }

    #[test]
    fn test_multipliers_applied() {
        let terms = reference_terms();
        let set = run_scenarios(dec!(2200), dec!(2246), &terms);

        assert_eq!(set.low.rent, dec!(1980.00));
        assert_eq!(set.mid.rent, dec!(2200.00));
        assert_eq!(set.high.rent, dec!(2420.00));

        assert_eq!(set.low.expenses, dec!(2470.60));
        assert_eq!(set.mid.expenses, dec!(2246.00));
        assert_eq!(set.high.expenses, dec!(2021.40));

        assert_eq!(set.low.vacancy_rate, dec!(0.08));
        assert_eq!(set.mid.vacancy_rate, dec!(0.05));
        assert_eq!(set.high.vacancy_rate, dec!(0.03));
    }

    #[test]
    fn test_vacancy_haircuts_collected_rent() {
        let terms = reference_terms();
        let set = run_scenarios(dec!(2200), dec!(2246), &terms);

        assert_eq!(set.low.cash_flow.monthly_rent, dec!(1821.600));
        assert_eq!(set.mid.cash_flow.monthly_rent, dec!(2090.00));
        assert_eq!(set.high.cash_flow.monthly_rent, dec!(2347.400));
    }

    #[test]
    fn test_scenario_ordering() {
        let terms = reference_terms();
        let set = run_scenarios(dec!(2200), dec!(2246), &terms);

        assert!(set.low.cash_on_cash <= set.mid.cash_on_cash);
        assert!(set.mid.cash_on_cash <= set.high.cash_on_cash);
    }

    #[test]
    fn test_financing_shared_across_scenarios() {
        let terms = reference_terms();
        let set = run_scenarios(dec!(2200), dec!(2246), &terms);

        let payment = terms.monthly_payment;
        for outcome in [&set.low, &set.mid, &set.high] {
            assert_eq!(
                outcome.cash_flow.net_operating_income - outcome.cash_flow.monthly_cash_flow,
                payment
            );
        }
    }
}
