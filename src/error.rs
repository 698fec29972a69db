//! Engine error taxonomy
//!
//! Only truly malformed input aborts a call. Non-convergent amortization and
//! infeasible scenarios are modeled outcomes (`Payoff::Unbounded`,
//! `ScenarioOutcome::Infeasible`), never errors.

use thiserror::Error;

/// Errors raised at the engine boundary
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// Account with malformed or negative monetary fields, rejected at construction
    #[error("invalid account for {creditor}: {reason}")]
    InvalidAccount { creditor: String, reason: String },
}

impl EngineError {
    pub(crate) fn invalid_account(creditor: &str, reason: impl Into<String>) -> Self {
        EngineError::InvalidAccount {
            creditor: creditor.to_string(),
            reason: reason.into(),
        }
    }
}
