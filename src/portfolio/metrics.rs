//! Portfolio-level metric structures

use serde::{Deserialize, Serialize};

/// Aggregate figures folded from a set of analyzed accounts
///
/// Zero-balance accounts are excluded from all sums but counted in
/// `total_accounts`. Unbounded payoff schedules contribute zero to the
/// interest totals and a damped 120 months to the payoff average.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Sum of active account balances
    pub total_debt: f64,

    /// Active debt on auto/mortgage accounts
    pub secured_debt: f64,

    /// Active debt on everything else
    pub unsecured_debt: f64,

    /// Sum of reported monthly payments across active accounts
    pub total_monthly_payments: f64,

    /// Balance-weighted average rate across active accounts (0 if no debt)
    pub weighted_average_rate: f64,

    /// Interest already paid across active accounts
    pub total_interest_paid: f64,

    /// Remaining interest at minimum payments (unbounded schedules excluded)
    pub total_remaining_interest: f64,

    /// Sum of settlement estimates across settlement-eligible accounts
    pub total_settlement_estimate: f64,

    /// Eligible balance forgiven if everything settles at the estimate
    pub total_savings_if_settled: f64,

    /// Mean months to payoff across active accounts, unbounded damped to 120
    pub average_months_to_payoff: f64,

    /// Assumed settlement program length used for the savings figures below
    pub settlement_program_months: u32,

    /// Current monthly payments minus the implied program payment
    pub payment_savings: f64,

    /// Average payoff months minus the program length
    pub months_saved: f64,

    /// Monthly payments as a percentage of monthly income (0 if income unknown)
    pub debt_to_income_percent: f64,

    /// Accounts with a balance
    pub active_accounts: usize,

    /// All accounts, including paid-off ones
    pub total_accounts: usize,
}
