//! CSV-based account loader
//!
//! Reads account records in the shape the reporting layer exports:
//! `creditor,kind,balance,credit_limit,monthly_payment,date_opened,annual_rate`
//! with empty fields for unknown optional values.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::data::{Account, AccountKind};

/// One raw CSV row before validation
#[derive(Debug, Deserialize)]
struct AccountRow {
    creditor: String,
    kind: String,
    balance: f64,
    credit_limit: Option<f64>,
    monthly_payment: f64,
    date_opened: Option<NaiveDate>,
    annual_rate: Option<f64>,
}

impl AccountRow {
    fn into_account(self) -> Result<Account, Box<dyn Error>> {
        let kind = parse_kind(&self.kind)
            .ok_or_else(|| format!("unknown account kind {:?} for {}", self.kind, self.creditor))?;

        let mut account = Account::new(self.creditor, kind, self.balance, self.monthly_payment)?;
        if let Some(limit) = self.credit_limit {
            account = account.with_credit_limit(limit);
        }
        if let Some(date) = self.date_opened {
            account = account.with_date_opened(date);
        }
        if let Some(rate) = self.annual_rate {
            account = account.with_stated_rate(rate);
        }
        account.validate()?;
        Ok(account)
    }
}

fn parse_kind(raw: &str) -> Option<AccountKind> {
    match raw.trim().to_lowercase().as_str() {
        "revolving" => Some(AccountKind::Revolving),
        "installment" => Some(AccountKind::Installment),
        "auto" => Some(AccountKind::Auto),
        "mortgage" => Some(AccountKind::Mortgage),
        _ => None,
    }
}

/// Load accounts from a CSV file
pub fn load_accounts(path: &Path) -> Result<Vec<Account>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut accounts = Vec::new();
    for result in reader.deserialize::<AccountRow>() {
        let row = result?;
        accounts.push(row.into_account()?);
    }

    log::info!("loaded {} accounts from {}", accounts.len(), path.display());
    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kind_variants() {
        assert_eq!(parse_kind("revolving"), Some(AccountKind::Revolving));
        assert_eq!(parse_kind(" Auto "), Some(AccountKind::Auto));
        assert_eq!(parse_kind("MORTGAGE"), Some(AccountKind::Mortgage));
        assert_eq!(parse_kind("payday"), None);
    }

    #[test]
    fn row_conversion_carries_optionals() {
        let row = AccountRow {
            creditor: "Amex".to_string(),
            kind: "revolving".to_string(),
            balance: 4_200.0,
            credit_limit: Some(5_000.0),
            monthly_payment: 120.0,
            date_opened: NaiveDate::from_ymd_opt(2022, 4, 1),
            annual_rate: None,
        };

        let account = row.into_account().unwrap();
        assert_eq!(account.kind, AccountKind::Revolving);
        assert_eq!(account.credit_limit, Some(5_000.0));
        assert_eq!(account.stated_annual_rate, None);
    }

    #[test]
    fn row_with_negative_balance_fails() {
        let row = AccountRow {
            creditor: "Amex".to_string(),
            kind: "revolving".to_string(),
            balance: -4_200.0,
            credit_limit: None,
            monthly_payment: 120.0,
            date_opened: None,
            annual_rate: None,
        };
        assert!(row.into_account().is_err());
    }
}
