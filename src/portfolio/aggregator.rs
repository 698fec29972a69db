//! Folds analyzed accounts into portfolio-level metrics

use super::metrics::PortfolioMetrics;
use crate::account::AnalyzedAccount;
use crate::engine::EngineParams;

/// Damping value for unbounded payoff schedules in the average-payoff
/// computation. Keeps a single pathological account from pulling the mean to
/// infinity; a deliberate, documented choice rather than a modeling claim.
pub const UNBOUNDED_PAYOFF_DAMPING_MONTHS: u32 = 120;

/// Assumed settlement program length for the supplemental savings figures
pub const ASSUMED_PROGRAM_MONTHS: u32 = 30;

/// Folds a sequence of analyzed accounts plus client income into
/// `PortfolioMetrics`
///
/// Pure fold with no account-ordering dependence: every sum and average is
/// symmetric in its inputs.
#[derive(Debug, Clone)]
pub struct PortfolioAggregator {
    params: EngineParams,
}

impl PortfolioAggregator {
    pub fn new(params: EngineParams) -> Self {
        Self { params }
    }

    /// Aggregate analyzed accounts
    ///
    /// `monthly_income` must be supplied by the caller, estimated externally
    /// if unknown; the engine never invents an income figure. A non-positive
    /// income yields a zero DTI rather than an error.
    pub fn aggregate(
        &self,
        accounts: &[AnalyzedAccount],
        monthly_income: f64,
    ) -> PortfolioMetrics {
        let active: Vec<&AnalyzedAccount> = accounts.iter().filter(|a| a.is_active()).collect();

        let total_debt: f64 = active.iter().map(|a| a.account.balance).sum();
        let secured_debt: f64 = active
            .iter()
            .filter(|a| a.account.kind.is_secured())
            .map(|a| a.account.balance)
            .sum();
        let unsecured_debt = total_debt - secured_debt;

        let total_monthly_payments: f64 = active.iter().map(|a| a.account.monthly_payment).sum();

        let weighted_average_rate = if total_debt > 0.0 {
            active
                .iter()
                .map(|a| a.estimated_annual_rate * a.account.balance)
                .sum::<f64>()
                / total_debt
        } else {
            0.0
        };

        let total_interest_paid: f64 = active.iter().map(|a| a.interest_paid_to_date).sum();
        let total_remaining_interest: f64 = active
            .iter()
            .map(|a| a.payoff_at_minimum.interest_or_zero())
            .sum();

        // Secured debt is typically excluded from settlement programs; the
        // caller opts in via settle_secured_debt.
        let eligible: Vec<&AnalyzedAccount> = active
            .iter()
            .copied()
            .filter(|a| self.params.settle_secured_debt || !a.account.kind.is_secured())
            .collect();
        let total_settlement_estimate: f64 = eligible.iter().map(|a| a.settlement_estimate).sum();
        let eligible_debt: f64 = eligible.iter().map(|a| a.account.balance).sum();
        let total_savings_if_settled = eligible_debt - total_settlement_estimate;

        let average_months_to_payoff = if active.is_empty() {
            0.0
        } else {
            active
                .iter()
                .map(|a| {
                    a.payoff_at_minimum
                        .months_or(UNBOUNDED_PAYOFF_DAMPING_MONTHS) as f64
                })
                .sum::<f64>()
                / active.len() as f64
        };

        let payment_savings =
            total_monthly_payments - total_settlement_estimate / ASSUMED_PROGRAM_MONTHS as f64;
        let months_saved = average_months_to_payoff - ASSUMED_PROGRAM_MONTHS as f64;

        let debt_to_income_percent = if monthly_income > 0.0 {
            total_monthly_payments / monthly_income * 100.0
        } else {
            0.0
        };

        PortfolioMetrics {
            total_debt,
            secured_debt,
            unsecured_debt,
            total_monthly_payments,
            weighted_average_rate,
            total_interest_paid,
            total_remaining_interest,
            total_settlement_estimate,
            total_savings_if_settled,
            average_months_to_payoff,
            settlement_program_months: ASSUMED_PROGRAM_MONTHS,
            payment_savings,
            months_saved,
            debt_to_income_percent,
            active_accounts: active.len(),
            total_accounts: accounts.len(),
        }
    }
}
