//! Per-account analysis: rate inference, amortization, settlement, risk

use chrono::NaiveDate;

use super::data::{Account, AccountKind, AnalyzedAccount, RiskTier};
use crate::amortization::{simulate_minimum_payments, PaymentPolicy};
use crate::assumptions::Assumptions;
use crate::engine::EngineParams;
use crate::error::EngineError;

/// Transforms one `Account` into one `AnalyzedAccount`
///
/// Stateless and deterministic: the same account, as-of date, and assumptions
/// always produce the same output. Rate estimates are best-effort heuristics;
/// a stated APR is always taken verbatim.
#[derive(Debug, Clone)]
pub struct AccountAnalyzer {
    assumptions: Assumptions,
    params: EngineParams,
}

impl AccountAnalyzer {
    /// Create an analyzer with the given assumptions and engine parameters
    pub fn new(assumptions: Assumptions, params: EngineParams) -> Self {
        Self {
            assumptions,
            params,
        }
    }

    /// Analyze a single account as of the supplied date
    ///
    /// Fails only on malformed monetary fields; missing optional data
    /// degrades to documented defaults.
    pub fn analyze(
        &self,
        account: &Account,
        as_of: NaiveDate,
    ) -> Result<AnalyzedAccount, EngineError> {
        account.validate()?;

        let months_since_opened = account.months_since_opened(as_of);
        let estimated_annual_rate = self.estimate_annual_rate(account, months_since_opened);
        let interest_paid_to_date = interest_paid_to_date(account, months_since_opened);

        let policy = match account.kind {
            AccountKind::Revolving => PaymentPolicy::RevolvingMinimum,
            _ => PaymentPolicy::Fixed(account.monthly_payment),
        };
        let payoff_at_minimum = simulate_minimum_payments(
            account.balance,
            estimated_annual_rate,
            policy,
            self.params.max_simulation_months,
        );

        let settlement_estimate = account.balance * self.params.settlement_percent / 100.0;
        let savings_if_settled = account.balance - settlement_estimate;

        let utilization_percent = match account.credit_limit {
            Some(limit) if limit > 0.0 => account.balance / limit * 100.0,
            _ => 0.0,
        };

        Ok(AnalyzedAccount {
            account: account.clone(),
            months_since_opened,
            estimated_annual_rate,
            interest_paid_to_date,
            payoff_at_minimum,
            settlement_estimate,
            savings_if_settled,
            utilization_percent,
            risk_tier: RiskTier::from_rate(estimated_annual_rate),
        })
    }

    /// Best-effort annual rate estimate
    ///
    /// Stated rate verbatim; installment/auto reverse-engineered from payment
    /// history when the original amount and elapsed months are known; revolving
    /// from the issuer table; everything else a flat kind default.
    fn estimate_annual_rate(&self, account: &Account, months_since_opened: u32) -> f64 {
        if let Some(rate) = account.stated_annual_rate {
            return rate;
        }

        match account.kind {
            AccountKind::Installment | AccountKind::Auto => {
                if let Some(rate) = implied_installment_rate(account, months_since_opened) {
                    return rate;
                }
                match account.kind {
                    AccountKind::Auto => self.assumptions.kind_rates.auto,
                    _ => self.assumptions.kind_rates.installment,
                }
            }
            AccountKind::Revolving => self.assumptions.issuer_rates.rate_for(&account.creditor),
            AccountKind::Mortgage => self.assumptions.kind_rates.other,
        }
    }
}

/// Reverse-engineer an installment rate from payments made so far
///
/// Total paid minus principal reduction gives implied interest paid;
/// annualized against the average balance over the period. Requires the
/// original amount, elapsed months, a payment, and a live balance.
fn implied_installment_rate(account: &Account, months_since_opened: u32) -> Option<f64> {
    let original = account.credit_limit?;
    if months_since_opened == 0 || account.monthly_payment <= 0.0 || account.balance <= 0.0 {
        return None;
    }

    let months = months_since_opened as f64;
    let total_paid = account.monthly_payment * months;
    let principal_paid = original - account.balance;
    let interest_paid = total_paid - principal_paid;

    if interest_paid <= 0.0 {
        return None;
    }

    let avg_balance = (original + account.balance) / 2.0;
    if avg_balance <= 0.0 {
        return None;
    }
    let annual_interest = interest_paid / months * 12.0;
    Some(annual_interest / avg_balance * 100.0)
}

/// Interest paid since opening: payments made minus principal retired, floored
/// at zero. Zero when the payment or elapsed months are unknown.
fn interest_paid_to_date(account: &Account, months_since_opened: u32) -> f64 {
    if account.monthly_payment <= 0.0 || months_since_opened == 0 {
        return 0.0;
    }

    let total_paid = account.monthly_payment * months_since_opened as f64;
    let original = account.credit_limit.unwrap_or(account.balance);
    let principal_paid = original - account.balance;

    (total_paid - principal_paid).max(0.0)
}
