//! Portfolio aggregation and score recovery projection

mod aggregator;
mod metrics;
mod score;

pub use aggregator::{PortfolioAggregator, ASSUMED_PROGRAM_MONTHS, UNBOUNDED_PAYOFF_DAMPING_MONTHS};
pub use metrics::PortfolioMetrics;
pub use score::{ScoreBand, ScoreProjection};
