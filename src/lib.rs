//! Debt Resolution Engine - financial trajectory modeling for consumer debt portfolios
//!
//! This library provides:
//! - Per-account interest rate inference and minimum-payment amortization
//! - Portfolio aggregation (totals, weighted rates, DTI, score recovery projection)
//! - Competing payoff strategy simulation (minimum payments, settlement, consolidation loan)
//! - Rule-based strategy recommendation
//!
//! All computations are pure functions of their inputs: the engine performs no
//! I/O, reads no clock, and holds no mutable state. Rate and settlement figures
//! are documented heuristic approximations, not guarantees.

pub mod account;
pub mod amortization;
pub mod assumptions;
pub mod engine;
pub mod error;
pub mod portfolio;
pub mod scenario;

// Re-export commonly used types
pub use account::{Account, AccountAnalyzer, AccountKind, AnalyzedAccount, RiskTier};
pub use amortization::{Payoff, PaymentPolicy};
pub use assumptions::Assumptions;
pub use engine::{ClientRecord, DebtEngine, EngineParams, PortfolioReport};
pub use error::EngineError;
pub use portfolio::{PortfolioAggregator, PortfolioMetrics, ScoreProjection};
pub use scenario::{
    Recommendation, ScenarioComparator, ScenarioInputs, ScenarioOutcome, ScenarioReport, Strategy,
};
