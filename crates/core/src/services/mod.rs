pub mod resolver;
pub mod valuation;
