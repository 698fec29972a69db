//! Debt Resolution Engine CLI
//!
//! Analyzes a portfolio of credit accounts (from CSV or a built-in sample)
//! and prints the per-account analysis, portfolio metrics, and the three-way
//! strategy comparison. All persistence and delivery concerns live outside
//! this binary.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use debt_resolution_engine::account::loader::load_accounts;
use debt_resolution_engine::{
    Account, AccountKind, ClientRecord, DebtEngine, EngineParams, ScenarioOutcome,
};

#[derive(Debug, Parser)]
#[command(name = "debt-resolution-engine", version, about = "Debt portfolio analysis and resolution scenario comparison")]
struct Args {
    /// CSV file of accounts (creditor,kind,balance,credit_limit,monthly_payment,date_opened,annual_rate)
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Client credit score
    #[arg(long, default_value_t = 640)]
    credit_score: u16,

    /// Client monthly income (supply an explicit estimate when unknown)
    #[arg(long, default_value_t = 4200.0)]
    monthly_income: f64,

    /// Analysis as-of date (YYYY-MM-DD); defaults to the sample date
    #[arg(long, default_value = "2025-06-01")]
    as_of: NaiveDate,

    /// Settlement value as a percentage of balance
    #[arg(long, default_value_t = 50.0)]
    settlement_percent: f64,

    /// Program fee as a percentage of enrolled debt
    #[arg(long, default_value_t = 25.0)]
    program_fee_percent: f64,

    /// Include secured debt in settlement totals
    #[arg(long)]
    settle_secured: bool,

    /// Write the full report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let accounts = match &args.accounts {
        Some(path) => load_accounts(path)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("loading accounts from {}", path.display()))?,
        None => sample_accounts()?,
    };

    let client = ClientRecord {
        credit_score: args.credit_score,
        monthly_income: args.monthly_income,
        accounts,
    };

    let params = EngineParams {
        settlement_percent: args.settlement_percent,
        program_fee_percent: args.program_fee_percent,
        settle_secured_debt: args.settle_secured,
        ..EngineParams::default()
    };
    let engine = DebtEngine::with_params(params);

    let (portfolio, scenarios) = engine.run(&client, args.as_of)?;

    println!("Debt Resolution Engine v{}", env!("CARGO_PKG_VERSION"));
    println!("==========================\n");

    println!(
        "{:<24} {:>10} {:>8} {:>7} {:>9} {:>12} {:>10} {:>6}",
        "Creditor", "Balance", "Rate%", "Util%", "Payoff", "RemInterest", "Settle", "Risk"
    );
    println!("{}", "-".repeat(94));
    for analyzed in &portfolio.accounts {
        let (payoff, remaining) = match (
            analyzed.months_to_payoff_at_minimum(),
            analyzed.remaining_interest_at_minimum(),
        ) {
            (Some(months), Some(interest)) => (format!("{months}mo"), format!("{interest:.0}")),
            _ => ("never".to_string(), "-".to_string()),
        };
        println!(
            "{:<24} {:>10.2} {:>8.2} {:>7.1} {:>9} {:>12} {:>10.2} {:>6}",
            analyzed.account.creditor,
            analyzed.account.balance,
            analyzed.estimated_annual_rate,
            analyzed.utilization_percent,
            payoff,
            remaining,
            analyzed.settlement_estimate,
            format!("{:?}", analyzed.risk_tier),
        );
    }

    let m = &portfolio.metrics;
    println!("\nPortfolio:");
    println!("  Total debt:            ${:.2}", m.total_debt);
    println!(
        "  Secured / unsecured:   ${:.2} / ${:.2}",
        m.secured_debt, m.unsecured_debt
    );
    println!("  Monthly payments:      ${:.2}", m.total_monthly_payments);
    println!("  Weighted avg rate:     {:.2}%", m.weighted_average_rate);
    println!("  Remaining interest:    ${:.2}", m.total_remaining_interest);
    println!("  Settlement estimate:   ${:.2}", m.total_settlement_estimate);
    println!("  Debt-to-income:        {:.1}%", m.debt_to_income_percent);
    println!(
        "  Accounts:              {} active of {}",
        m.active_accounts, m.total_accounts
    );

    println!("\nScore projection (anchored to {}):", portfolio.score_projection.current_score);
    for band in &portfolio.score_projection.bands {
        let range = match band.to_month {
            Some(to) => format!("{}-{}mo", band.from_month, to),
            None => format!("{}mo+", band.from_month),
        };
        println!(
            "  {:>8}: {:>3}  {}",
            range, band.projected_score, band.description
        );
    }

    println!("\nStrategies:");
    print_outcome("Current path", &scenarios.current);
    print_outcome("Resolution", &scenarios.resolution);
    print_outcome("Consolidation loan", &scenarios.loan);

    println!(
        "\nLowest monthly payment: {}",
        scenarios.comparison.lowest_monthly_payment.as_str()
    );
    println!(
        "Lowest total cost:      {}",
        scenarios.comparison.lowest_total_cost.as_str()
    );

    let rec = &scenarios.recommendation;
    println!("\nRecommendation: {}", rec.strategy.as_str());
    println!("  {}", rec.reason);
    println!("  Next step: {}", rec.action);
    if let Some(savings) = rec.projected_savings {
        println!("  Projected savings: ${savings:.2}");
    }
    if let Some(saved) = rec.months_saved {
        println!("  Months saved vs current path: {saved}");
    }

    if let Some(path) = &args.json {
        let file = File::create(path)
            .with_context(|| format!("creating report file {}", path.display()))?;
        serde_json::to_writer_pretty(
            file,
            &serde_json::json!({
                "portfolio": portfolio,
                "scenarios": scenarios,
            }),
        )?;
        println!("\nFull report written to: {}", path.display());
    }

    Ok(())
}

fn print_outcome(label: &str, outcome: &ScenarioOutcome) {
    match outcome {
        ScenarioOutcome::Feasible(f) => {
            let rate = f
                .annual_rate
                .map(|r| format!("{r:.2}%"))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:<20} {:>4}mo  ${:>9.2}/mo  rate {:>7}  total ${:>11.2}  ({})",
                label, f.months, f.monthly_payment, rate, f.total_paid, f.summary
            );
        }
        ScenarioOutcome::Infeasible { reason } => {
            println!("  {label:<20} not available: {reason}");
        }
    }
}

/// Built-in demo portfolio used when no CSV is supplied
fn sample_accounts() -> anyhow::Result<Vec<Account>> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    Ok(vec![
        Account::new("AMEX", AccountKind::Revolving, 6_800.0, 180.0)?
            .with_credit_limit(10_000.0)
            .with_date_opened(date(2019, 4, 1)),
        Account::new("CAPITAL ONE N.A.", AccountKind::Revolving, 4_200.0, 110.0)?
            .with_credit_limit(5_000.0)
            .with_date_opened(date(2021, 9, 1)),
        Account::new("Regional CU Personal Loan", AccountKind::Installment, 9_000.0, 310.0)?
            .with_credit_limit(14_000.0)
            .with_date_opened(date(2022, 6, 1)),
        Account::new("Auto Finance Co", AccountKind::Auto, 13_500.0, 415.0)?
            .with_credit_limit(22_000.0)
            .with_date_opened(date(2022, 1, 1)),
        Account::new("Closed Store Card", AccountKind::Revolving, 0.0, 0.0)?,
    ])
}
