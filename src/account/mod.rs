//! Account records, per-account analysis, and CSV ingestion

mod analyzer;
mod data;
pub mod loader;

pub use analyzer::AccountAnalyzer;
pub use data::{Account, AccountKind, AnalyzedAccount, RiskTier};
