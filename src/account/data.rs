//! Account records and per-account analysis output

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::amortization::Payoff;
use crate::error::EngineError;

/// Kind of credit account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Credit cards and lines of credit
    Revolving,
    /// Generic installment loans (personal, student, etc.)
    Installment,
    /// Auto loans
    Auto,
    /// Mortgages
    Mortgage,
}

impl AccountKind {
    /// Secured debt is backed by collateral and typically excluded from
    /// settlement programs
    pub fn is_secured(&self) -> bool {
        matches!(self, AccountKind::Auto | AccountKind::Mortgage)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Revolving => "revolving",
            AccountKind::Installment => "installment",
            AccountKind::Auto => "auto",
            AccountKind::Mortgage => "mortgage",
        }
    }
}

/// Risk tier derived solely from the estimated annual rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Pure threshold function: >= 20% high, >= 10% medium, else low
    pub fn from_rate(annual_rate_pct: f64) -> Self {
        if annual_rate_pct >= 20.0 {
            RiskTier::High
        } else if annual_rate_pct >= 10.0 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }
}

/// A single credit account as reported, prior to analysis
///
/// Monetary fields must be finite and non-negative; everything optional
/// degrades to documented defaults during analysis rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Creditor name as reported (used for issuer rate lookup)
    pub creditor: String,

    /// Account kind
    pub kind: AccountKind,

    /// Current balance owed
    pub balance: f64,

    /// Credit limit for revolving accounts, original amount for loans
    #[serde(default)]
    pub credit_limit: Option<f64>,

    /// Reported monthly payment
    pub monthly_payment: f64,

    /// Date the account was opened
    #[serde(default)]
    pub date_opened: Option<NaiveDate>,

    /// Stated APR, authoritative when present
    #[serde(default)]
    pub stated_annual_rate: Option<f64>,

    /// Free-text payment history, advisory only
    #[serde(default)]
    pub payment_history: Option<String>,
}

impl Account {
    /// Create an account with the required fields, rejecting malformed money
    pub fn new(
        creditor: impl Into<String>,
        kind: AccountKind,
        balance: f64,
        monthly_payment: f64,
    ) -> Result<Self, EngineError> {
        let account = Self {
            creditor: creditor.into(),
            kind,
            balance,
            monthly_payment,
            credit_limit: None,
            date_opened: None,
            stated_annual_rate: None,
            payment_history: None,
        };
        account.validate()?;
        Ok(account)
    }

    pub fn with_credit_limit(mut self, limit: f64) -> Self {
        self.credit_limit = Some(limit);
        self
    }

    pub fn with_date_opened(mut self, date: NaiveDate) -> Self {
        self.date_opened = Some(date);
        self
    }

    pub fn with_stated_rate(mut self, annual_rate_pct: f64) -> Self {
        self.stated_annual_rate = Some(annual_rate_pct);
        self
    }

    pub fn with_payment_history(mut self, history: impl Into<String>) -> Self {
        self.payment_history = Some(history.into());
        self
    }

    /// Validate monetary fields
    ///
    /// Re-run at the analysis boundary so deserialized and builder-modified
    /// accounts get the same checks as constructed ones.
    pub fn validate(&self) -> Result<(), EngineError> {
        check_money(&self.creditor, "balance", self.balance)?;
        check_money(&self.creditor, "monthly_payment", self.monthly_payment)?;
        if let Some(limit) = self.credit_limit {
            check_money(&self.creditor, "credit_limit", limit)?;
        }
        if let Some(rate) = self.stated_annual_rate {
            if !rate.is_finite() || rate < 0.0 {
                return Err(EngineError::invalid_account(
                    &self.creditor,
                    format!("stated_annual_rate must be a non-negative percentage, got {rate}"),
                ));
            }
        }
        Ok(())
    }

    /// Whole months elapsed between opening and the as-of date
    ///
    /// Derived from the supplied as-of date, never the system clock, so
    /// repeated analysis of the same input is bit-identical.
    pub fn months_since_opened(&self, as_of: NaiveDate) -> u32 {
        match self.date_opened {
            Some(opened) => {
                let months = (as_of.year() - opened.year()) * 12
                    + (as_of.month() as i32 - opened.month() as i32);
                months.max(0) as u32
            }
            None => 0,
        }
    }
}

fn check_money(creditor: &str, field: &str, value: f64) -> Result<(), EngineError> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::invalid_account(
            creditor,
            format!("{field} must be a non-negative amount, got {value}"),
        ));
    }
    Ok(())
}

/// An account augmented with derived financial figures
///
/// Immutable once computed: a pure function of the account, the as-of date,
/// and the engine's assumptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedAccount {
    /// The input account
    #[serde(flatten)]
    pub account: Account,

    /// Whole months since the account was opened (0 when unknown)
    pub months_since_opened: u32,

    /// Stated APR, or the best-effort estimate
    pub estimated_annual_rate: f64,

    /// Interest paid since opening, reconstructed from payment history
    pub interest_paid_to_date: f64,

    /// Months to payoff and remaining interest under minimum payments,
    /// or `Unbounded` when minimums never retire the balance
    pub payoff_at_minimum: Payoff,

    /// Estimated negotiated settlement value
    pub settlement_estimate: f64,

    /// Balance forgiven if settled at the estimate
    pub savings_if_settled: f64,

    /// Balance as a percentage of the known limit (0 when no limit known)
    pub utilization_percent: f64,

    /// Risk tier from the estimated rate
    pub risk_tier: RiskTier,
}

impl AnalyzedAccount {
    /// Active accounts carry a balance and participate in aggregate sums
    pub fn is_active(&self) -> bool {
        self.account.balance > 0.0
    }

    /// Months to payoff at minimum payments, if bounded
    pub fn months_to_payoff_at_minimum(&self) -> Option<u32> {
        self.payoff_at_minimum.months()
    }

    /// Remaining interest at minimum payments, if bounded
    pub fn remaining_interest_at_minimum(&self) -> Option<f64> {
        self.payoff_at_minimum.interest()
    }
}
