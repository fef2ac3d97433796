//! Client-scenario comparison over a pool of candidate properties.
//!
//! The pool itself comes from an external sourcing collaborator; this module
//! only filters, underwrites, and ranks.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, PropertyRecord};
use crate::underwriting::{Underwriter, UnderwritingResult};
use crate::PropwiseResult;

/// A client's acquisition constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientScenario {
    pub name: String,
    pub max_out_of_pocket: Money,
    pub max_purchase_price: Money,
    /// Minimum acceptable cash-on-cash return, percentage-scaled (9.0 = 9%).
    pub min_cash_on_cash_return: Decimal,
    pub location: String,
    pub requirements: Vec<String>,
}

/// Aggregates over the qualifying results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub total_out_of_pocket: Money,
    pub average_coc_return: Decimal,
    pub average_monthly_cash_flow: Money,
}

/// Ranked outcome of one client-scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioAnalysis {
    pub properties_found: usize,
    /// Qualifying results, best cash-on-cash first.
    pub recommendations: Vec<UnderwritingResult>,
    /// `None` when nothing qualified.
    pub summary: Option<ScenarioSummary>,
}

/// Portfolio-level roll-up across a set of underwriting results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub total_properties: usize,
    pub total_cash_invested: Money,
    pub total_annual_cash_flow: Money,
    pub average_cash_on_cash: Decimal,
    pub average_appreciation: Decimal,
    pub average_tax_savings: Decimal,
    pub average_principal_paydown: Decimal,
    pub average_total_return: Decimal,
    /// Total annual cash flow over total cash invested, percentage-scaled.
    pub portfolio_cash_on_cash: Decimal,
}

/// Underwrite every candidate within the client's price ceiling, keep the
/// ones inside the cash and return constraints, and rank them.
///
/// Any validation failure in the pool propagates; a bad record is a data
/// problem the caller has to see, not something to skip silently.
pub fn analyze_scenario(
    underwriter: &Underwriter,
    scenario: &ClientScenario,
    pool: &[PropertyRecord],
) -> PropwiseResult<ScenarioAnalysis> {
    log::info!(
        "analyzing scenario '{}' over {} candidates",
        scenario.name,
        pool.len()
    );

    let mut recommendations: Vec<UnderwritingResult> = Vec::new();

    for property in pool {
        if property.purchase_price > scenario.max_purchase_price {
            continue;
        }

        let result = underwriter.underwrite(property, Some(scenario.max_out_of_pocket))?;

        if result.mortgage.total_out_of_pocket <= scenario.max_out_of_pocket
            && result.coc_return >= scenario.min_cash_on_cash_return
        {
            recommendations.push(result);
        }
    }

    recommendations.sort_by(|a, b| b.coc_return.cmp(&a.coc_return));

    let summary = summarize(&recommendations);

    Ok(ScenarioAnalysis {
        properties_found: recommendations.len(),
        recommendations,
        summary,
    })
}

fn summarize(results: &[UnderwritingResult]) -> Option<ScenarioSummary> {
    if results.is_empty() {
        return None;
    }

    let count = Decimal::from(results.len());
    let total_oop: Money = results.iter().map(|r| r.mortgage.total_out_of_pocket).sum();
    let coc_sum: Decimal = results.iter().map(|r| r.coc_return).sum();
    let cash_flow_sum: Money = results.iter().map(|r| r.cash_flow.monthly_cash_flow).sum();

    Some(ScenarioSummary {
        total_out_of_pocket: total_oop,
        average_coc_return: coc_sum / count,
        average_monthly_cash_flow: cash_flow_sum / count,
    })
}

/// Roll a set of results up into portfolio totals and averages.
pub fn portfolio_metrics(results: &[UnderwritingResult]) -> PortfolioMetrics {
    if results.is_empty() {
        return PortfolioMetrics::default();
    }

    let count = Decimal::from(results.len());
    let total_cash_invested: Money = results.iter().map(|r| r.mortgage.down_payment).sum();
    let total_annual_cash_flow: Money =
        results.iter().map(|r| r.cash_flow.annual_cash_flow).sum();

    let portfolio_cash_on_cash = if total_cash_invested <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        total_annual_cash_flow / total_cash_invested * dec!(100)
    };

    let average = |f: fn(&UnderwritingResult) -> Decimal| -> Decimal {
        results.iter().map(f).sum::<Decimal>() / count
    };

    PortfolioMetrics {
        total_properties: results.len(),
        total_cash_invested,
        total_annual_cash_flow,
        average_cash_on_cash: average(|r| r.returns.cash_on_cash),
        average_appreciation: average(|r| r.returns.appreciation),
        average_tax_savings: average(|r| r.returns.tax_savings),
        average_principal_paydown: average(|r| r.returns.principal_paydown),
        average_total_return: average(|r| r.returns.total_return),
        portfolio_cash_on_cash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PropertyType;
    use rust_decimal_macros::dec;

    fn property(address: &str, price: Decimal, rent: Decimal) -> PropertyRecord {
        PropertyRecord {
            address: address.into(),
            purchase_price: price,
            square_footage: 1500,
            bedrooms: 3,
            bathrooms: dec!(2.0),
            year_built: 2015,
            property_type: PropertyType::SingleFamily,
            estimated_monthly_rent: rent,
            days_on_market: 25,
            listing_reference: format!("listing-{address}"),
        }
    }

    fn underwriter() -> Underwriter {
        Underwriter::default().with_analysis_year(2026)
    }

    fn scenario() -> ClientScenario {
        ClientScenario {
            name: "Cash-constrained buyer".into(),
            max_out_of_pocket: dec!(30000),
            max_purchase_price: dec!(200000),
            min_cash_on_cash_return: dec!(8.0),
            location: "Houston, TX".into(),
            requirements: vec!["Minimum 8% CoC return".into()],
        }
    }

    #[test]
    fn test_filters_and_ranks_by_coc() {
        let pool = vec![
            property("A St", dec!(120000), dec!(2200)), // CoC 8.36
            property("B St", dec!(120000), dec!(2300)), // CoC 12.71
            property("C St", dec!(325000), dec!(2200)), // over price ceiling
            property("D St", dec!(120000), dec!(2000)), // CoC below minimum
        ];

        let analysis = analyze_scenario(&underwriter(), &scenario(), &pool).unwrap();

        assert_eq!(analysis.properties_found, 2);
        assert_eq!(analysis.recommendations[0].property.address, "B St");
        assert_eq!(analysis.recommendations[1].property.address, "A St");

        let summary = analysis.summary.unwrap();
        assert_eq!(summary.total_out_of_pocket, dec!(55200));
    }

    #[test]
    fn test_oop_ceiling_excludes_expensive_entry() {
        let mut tight = scenario();
        tight.max_purchase_price = dec!(500000);
        tight.max_out_of_pocket = dec!(28000);

        // Qualifying on return but OOP is 74,750
        let pool = vec![property("E St", dec!(325000), dec!(6000))];
        let analysis = analyze_scenario(&underwriter(), &tight, &pool).unwrap();

        assert_eq!(analysis.properties_found, 0);
        assert!(analysis.summary.is_none());
    }

    #[test]
    fn test_portfolio_metrics_roll_up() {
        let engine = underwriter();
        let results = vec![
            engine
                .underwrite(&property("A St", dec!(120000), dec!(2300)), None)
                .unwrap(),
            engine
                .underwrite(&property("B St", dec!(120000), dec!(2200)), None)
                .unwrap(),
        ];

        let metrics = portfolio_metrics(&results);
        assert_eq!(metrics.total_properties, 2);
        assert_eq!(metrics.total_cash_invested, dec!(48000));
        assert_eq!(
            metrics.average_cash_on_cash,
            (dec!(12.71) + dec!(8.36)) / dec!(2)
        );
        assert!(metrics.portfolio_cash_on_cash > Decimal::ZERO);
    }

    #[test]
    fn test_portfolio_metrics_empty() {
        let metrics = portfolio_metrics(&[]);
        assert_eq!(metrics.total_properties, 0);
        assert_eq!(metrics.portfolio_cash_on_cash, Decimal::ZERO);
    }
}
