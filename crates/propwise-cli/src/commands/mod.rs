pub mod pool;
pub mod scenario;
pub mod underwrite;

use propwise_core::assumptions::FinancialAssumptions;
use propwise_core::underwriting::Underwriter;

use crate::input;

/// Build an underwriter from an optional assumptions file and analysis year.
pub fn build_underwriter(
    assumptions_path: Option<&str>,
    analysis_year: Option<i32>,
) -> Result<Underwriter, Box<dyn std::error::Error>> {
    let assumptions: FinancialAssumptions = match assumptions_path {
        Some(path) => input::file::read_json(path)?,
        None => FinancialAssumptions::default(),
    };

    let mut underwriter = Underwriter::new(assumptions)?;
    if let Some(year) = analysis_year {
        underwriter = underwriter.with_analysis_year(year);
    }
    Ok(underwriter)
}
