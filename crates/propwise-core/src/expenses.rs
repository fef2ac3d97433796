//! Monthly operating-expense model.
//!
//! Rate-derived lines scale with purchase price (annual rate / 12) or with
//! rent (fee fraction); the utility-style lines are fixed dollar amounts from
//! the assumptions. Every line is exposed individually so reporting layers
//! can break the total down.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assumptions::FinancialAssumptions;
use crate::types::Money;

/// Itemized monthly operating expenses for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingExpenseBreakdown {
    pub internet: Money,
    pub water: Money,
    pub electricity: Money,
    pub natural_gas: Money,
    pub pest_control: Money,
    pub pool_maintenance: Money,
    pub property_tax: Money,
    pub insurance: Money,
    pub maintenance: Money,
    pub management: Money,
    /// Reserve for vacancy loss, carried as an expense line rather than a
    /// haircut on rent.
    pub vacancy: Money,
}

/// Rolled-up view of the breakdown for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseGroups {
    pub utilities: Money,
    pub upkeep: Money,
    pub taxes_and_insurance: Money,
    pub management: Money,
    pub vacancy: Money,
}

impl OperatingExpenseBreakdown {
    /// Sum of every line item.
    pub fn monthly_total(&self) -> Money {
        self.internet
            + self.water
            + self.electricity
            + self.natural_gas
            + self.pest_control
            + self.pool_maintenance
            + self.property_tax
            + self.insurance
            + self.maintenance
            + self.management
            + self.vacancy
    }

    pub fn grouped(&self) -> ExpenseGroups {
        ExpenseGroups {
            utilities: self.internet + self.water + self.electricity + self.natural_gas,
            upkeep: self.pest_control + self.pool_maintenance + self.maintenance,
            taxes_and_insurance: self.property_tax + self.insurance,
            management: self.management,
            vacancy: self.vacancy,
        }
    }
}

/// Derive the monthly expense breakdown for a property.
pub fn compute_expenses(
    purchase_price: Money,
    monthly_rent: Money,
    assumptions: &FinancialAssumptions,
) -> OperatingExpenseBreakdown {
    OperatingExpenseBreakdown {
        internet: assumptions.internet,
        water: assumptions.water,
        electricity: assumptions.electricity,
        natural_gas: assumptions.natural_gas,
        pest_control: assumptions.pest_control,
        pool_maintenance: assumptions.pool_maintenance,
        property_tax: purchase_price * assumptions.property_tax_rate / dec!(12),
        insurance: purchase_price * assumptions.insurance_rate / dec!(12),
        maintenance: purchase_price * assumptions.maintenance_rate / dec!(12),
        management: monthly_rent * assumptions.management_fee_fraction,
        vacancy: monthly_rent * assumptions.vacancy_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_items_for_reference_property() {
        let assumptions = FinancialAssumptions::default();
        let expenses = compute_expenses(dec!(120000), dec!(2300), &assumptions);

        assert_eq!(expenses.property_tax, dec!(250));
        assert_eq!(expenses.insurance, dec!(80));
        assert_eq!(expenses.maintenance, dec!(150));
        assert_eq!(expenses.management, dec!(184.00));
        assert_eq!(expenses.vacancy, dec!(115.00));
        assert_eq!(expenses.monthly_total(), dec!(1439.00));
    }

    #[test]
    fn test_total_equals_sum_of_groups() {
        let assumptions = FinancialAssumptions::default();
        let expenses = compute_expenses(dec!(325000), dec!(2200), &assumptions);
        let groups = expenses.grouped();

        let regrouped = groups.utilities
            + groups.upkeep
            + groups.taxes_and_insurance
            + groups.management
            + groups.vacancy;
        assert_eq!(expenses.monthly_total(), regrouped);
    }

    #[test]
    fn test_zero_rent_still_carries_fixed_costs() {
        let assumptions = FinancialAssumptions::default();
        let expenses = compute_expenses(dec!(200000), dec!(0), &assumptions);

        assert_eq!(expenses.management, dec!(0));
        assert_eq!(expenses.vacancy, dec!(0));
        // Fixed items and price-derived items remain
        assert!(expenses.monthly_total() > dec!(660));
    }
}
