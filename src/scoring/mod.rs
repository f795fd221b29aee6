//! Aggregation and risk classification.

mod aggregate;
mod risk;

pub use aggregate::aggregate;
pub use risk::{RiskLevel, classify_risk};
