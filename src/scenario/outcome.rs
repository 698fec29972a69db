//! Scenario outcome, comparison, and recommendation structures

use serde::{Deserialize, Serialize};

/// The three competing payoff strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Keep making minimum payments
    Current,
    /// Negotiated settlement program
    Resolution,
    /// Debt consolidation loan
    Loan,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Current => "current",
            Strategy::Resolution => "resolution",
            Strategy::Loan => "loan",
        }
    }
}

/// Numeric figures for a feasible strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFigures {
    /// Months to debt-free
    pub months: u32,

    /// Monthly payment under the strategy
    pub monthly_payment: f64,

    /// Annual rate driving the schedule (None for the fee-based program)
    pub annual_rate: Option<f64>,

    /// Total amount paid over the strategy's life
    pub total_paid: f64,

    /// Interest or program fees included in `total_paid`
    pub interest_or_fees: f64,

    /// Total paid under the current path minus this strategy's total,
    /// when the current path converges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_vs_current: Option<f64>,

    /// Human-readable one-line summary
    pub summary: String,
}

/// Outcome of simulating one strategy
///
/// Infeasibility is a normal modeled result carrying a displayable reason,
/// never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioOutcome {
    Feasible(ScenarioFigures),
    Infeasible { reason: String },
}

impl ScenarioOutcome {
    pub fn is_feasible(&self) -> bool {
        matches!(self, ScenarioOutcome::Feasible(_))
    }

    pub fn figures(&self) -> Option<&ScenarioFigures> {
        match self {
            ScenarioOutcome::Feasible(figures) => Some(figures),
            ScenarioOutcome::Infeasible { .. } => None,
        }
    }

    pub fn infeasible_reason(&self) -> Option<&str> {
        match self {
            ScenarioOutcome::Feasible(_) => None,
            ScenarioOutcome::Infeasible { reason } => Some(reason),
        }
    }
}

/// One row of the side-by-side comparison table (feasible strategies only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub strategy: Strategy,
    pub months: u32,
    pub monthly_payment: f64,
    pub total_paid: f64,
}

/// Side-by-side comparison across feasible strategies
///
/// The resolution path is feasible by construction, so the table is never
/// empty and both winners are always defined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    pub lowest_monthly_payment: Strategy,
    pub lowest_total_cost: Strategy,
}

/// Rule-based recommendation derived from the three outcomes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub strategy: Strategy,

    /// Why this strategy fits the client's profile
    pub reason: String,

    /// Suggested next step
    pub action: String,

    /// Balance forgiven under the recommended program, where applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_savings: Option<f64>,

    /// Months saved vs the current path, where the current path converges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months_saved: Option<i64>,
}

/// Full scenario report for one client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub current: ScenarioOutcome,
    pub resolution: ScenarioOutcome,
    pub loan: ScenarioOutcome,
    pub comparison: Comparison,
    pub recommendation: Recommendation,
}
