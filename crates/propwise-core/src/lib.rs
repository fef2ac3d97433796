pub mod assumptions;
pub mod cash_flow;
pub mod error;
pub mod expenses;
pub mod mortgage;
pub mod optimization;
pub mod recommendation;
pub mod returns;
pub mod risk;
pub mod scenarios;
pub mod sourcing;
pub mod types;
pub mod underwriting;

pub use error::UnderwritingError;
pub use types::*;

/// Standard result type for all propwise operations
pub type PropwiseResult<T> = Result<T, UnderwritingError>;
