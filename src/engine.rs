//! Engine facade: pre-built assumptions plus tunable parameters
//!
//! Builds the analyzer, aggregator, and comparator once and runs whole
//! portfolios through them. Analysis across accounts is embarrassingly
//! parallel; the rayon path preserves input order, so parallel output is
//! identical to sequential output.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::account::{Account, AccountAnalyzer, AnalyzedAccount};
use crate::amortization::DEFAULT_MAX_MONTHS;
use crate::assumptions::Assumptions;
use crate::error::EngineError;
use crate::portfolio::{PortfolioAggregator, PortfolioMetrics, ScoreProjection};
use crate::scenario::{ScenarioComparator, ScenarioInputs, ScenarioReport};

/// Caller-tunable engine parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineParams {
    /// Settlement value as a percentage of balance
    pub settlement_percent: f64,

    /// Settlement program fee as a percentage of enrolled debt
    pub program_fee_percent: f64,

    /// Amortization iteration cap
    pub max_simulation_months: u32,

    /// Include secured (auto/mortgage) debt in settlement totals
    pub settle_secured_debt: bool,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            settlement_percent: 50.0,
            program_fee_percent: 25.0,
            max_simulation_months: DEFAULT_MAX_MONTHS,
            settle_secured_debt: false,
        }
    }
}

/// A client's portfolio as submitted for analysis
///
/// `monthly_income` is required; when the true figure is unknown the caller
/// supplies an explicit estimate. The engine never invents one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub credit_score: u16,
    pub monthly_income: f64,
    pub accounts: Vec<Account>,
}

/// Analyzer/aggregator output for one client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub accounts: Vec<AnalyzedAccount>,
    pub metrics: PortfolioMetrics,
    pub score_projection: ScoreProjection,
}

/// Pre-configured engine for analyzing portfolios and comparing strategies
#[derive(Debug, Clone)]
pub struct DebtEngine {
    assumptions: Assumptions,
    params: EngineParams,
}

impl DebtEngine {
    /// Engine with default underwriting assumptions and parameters
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default_underwriting(),
            params: EngineParams::default(),
        }
    }

    /// Engine with custom parameters
    pub fn with_params(params: EngineParams) -> Self {
        Self {
            assumptions: Assumptions::default_underwriting(),
            params,
        }
    }

    /// Engine with fully custom assumptions and parameters
    pub fn with_assumptions(assumptions: Assumptions, params: EngineParams) -> Self {
        Self {
            assumptions,
            params,
        }
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Analyze every account and fold the portfolio as of the given date
    ///
    /// Fails on the first malformed account; missing optional data degrades
    /// to documented defaults.
    pub fn analyze_portfolio(
        &self,
        client: &ClientRecord,
        as_of: NaiveDate,
    ) -> Result<PortfolioReport, EngineError> {
        let analyzer = AccountAnalyzer::new(self.assumptions.clone(), self.params.clone());

        let accounts: Vec<AnalyzedAccount> = client
            .accounts
            .par_iter()
            .map(|account| analyzer.analyze(account, as_of))
            .collect::<Result<_, _>>()?;

        let aggregator = PortfolioAggregator::new(self.params.clone());
        let metrics = aggregator.aggregate(&accounts, client.monthly_income);
        let score_projection = ScoreProjection::from_current(client.credit_score);

        Ok(PortfolioReport {
            accounts,
            metrics,
            score_projection,
        })
    }

    /// Compare the three payoff strategies for aggregate inputs
    pub fn compare_scenarios(&self, inputs: &ScenarioInputs) -> ScenarioReport {
        let comparator = ScenarioComparator::new(self.assumptions.clone(), self.params.clone());
        comparator.compare(inputs)
    }

    /// Full pipeline: analyze the portfolio, then compare strategies on the
    /// resulting aggregate totals
    pub fn run(
        &self,
        client: &ClientRecord,
        as_of: NaiveDate,
    ) -> Result<(PortfolioReport, ScenarioReport), EngineError> {
        let portfolio = self.analyze_portfolio(client, as_of)?;
        let inputs = ScenarioInputs::from_metrics(
            &portfolio.metrics,
            client.credit_score,
            client.monthly_income,
        );
        let scenarios = self.compare_scenarios(&inputs);
        Ok((portfolio, scenarios))
    }
}

impl Default for DebtEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountKind;
    use approx::assert_relative_eq;

    fn sample_client() -> ClientRecord {
        ClientRecord {
            credit_score: 640,
            monthly_income: 4_200.0,
            accounts: vec![
                Account::new("Amex", AccountKind::Revolving, 5_000.0, 150.0)
                    .unwrap()
                    .with_stated_rate(20.0)
                    .with_credit_limit(8_000.0),
                Account::new("Capital One", AccountKind::Revolving, 3_500.0, 90.0).unwrap(),
                Account::new("Auto Lender", AccountKind::Auto, 11_000.0, 340.0).unwrap(),
                Account::new("Paid Card", AccountKind::Revolving, 0.0, 0.0).unwrap(),
            ],
        }
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn full_pipeline_runs() {
        let engine = DebtEngine::new();
        let (portfolio, scenarios) = engine.run(&sample_client(), as_of()).unwrap();

        assert_eq!(portfolio.accounts.len(), 4);
        assert_eq!(portfolio.metrics.active_accounts, 3);
        assert_relative_eq!(portfolio.metrics.total_debt, 19_500.0, epsilon = 1e-9);
        assert!(scenarios.resolution.is_feasible());
    }

    #[test]
    fn aggregate_balances_match_account_sums() {
        let engine = DebtEngine::new();
        let report = engine.analyze_portfolio(&sample_client(), as_of()).unwrap();

        let active_sum: f64 = report
            .accounts
            .iter()
            .filter(|a| a.is_active())
            .map(|a| a.account.balance)
            .sum();
        assert_relative_eq!(report.metrics.total_debt, active_sum, epsilon = 1e-9);
        assert_relative_eq!(
            report.metrics.secured_debt + report.metrics.unsecured_debt,
            report.metrics.total_debt,
            epsilon = 1e-9
        );
    }

    #[test]
    fn parallel_analysis_is_deterministic() {
        let engine = DebtEngine::new();
        let client = sample_client();

        let first = engine.run(&client, as_of()).unwrap();
        let second = engine.run(&client, as_of()).unwrap();

        assert_eq!(
            serde_json::to_string(&first.0).unwrap(),
            serde_json::to_string(&second.0).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&first.1).unwrap(),
            serde_json::to_string(&second.1).unwrap()
        );
    }

    #[test]
    fn malformed_account_rejected() {
        let engine = DebtEngine::new();
        let mut client = sample_client();
        client.accounts[1].balance = -10.0;

        let err = engine.analyze_portfolio(&client, as_of()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidAccount { .. }));
    }

    #[test]
    fn settlement_percent_parameter_flows_through() {
        let mut params = EngineParams::default();
        params.settlement_percent = 40.0;
        let engine = DebtEngine::with_params(params);

        let report = engine.analyze_portfolio(&sample_client(), as_of()).unwrap();
        let amex = &report.accounts[0];
        assert_relative_eq!(amex.settlement_estimate, 2_000.0, epsilon = 1e-9);
        assert_relative_eq!(amex.savings_if_settled, 3_000.0, epsilon = 1e-9);
    }
}
