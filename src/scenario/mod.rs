//! Payoff strategy simulation and comparison

mod comparator;
mod outcome;

pub use comparator::{ScenarioComparator, ScenarioInputs, ASSUMED_MIN_PAYMENT_PCT};
pub use outcome::{
    Comparison, ComparisonRow, Recommendation, ScenarioFigures, ScenarioOutcome, ScenarioReport,
    Strategy,
};
