//! Three-way payoff strategy comparison and recommendation

use serde::{Deserialize, Serialize};

use super::outcome::{
    Comparison, ComparisonRow, Recommendation, ScenarioFigures, ScenarioOutcome, ScenarioReport,
    Strategy,
};
use crate::amortization::{level_loan_payment, simulate_minimum_payments, PaymentPolicy};
use crate::assumptions::Assumptions;
use crate::engine::EngineParams;
use crate::portfolio::PortfolioMetrics;

/// Assumed aggregate minimum payment as a fraction of total debt, used when
/// the caller does not supply the actual payment
pub const ASSUMED_MIN_PAYMENT_PCT: f64 = 0.025;

/// Loan rate below which good-credit clients are steered to consolidation
const LOW_RATE_LOAN_THRESHOLD: f64 = 10.0;

/// Debt at or above which settlement is favored
const RESOLUTION_DEBT_FLOOR: f64 = 25_000.0;

/// Debt below which the current path is considered manageable
const MANAGEABLE_DEBT_CEILING: f64 = 15_000.0;

/// Credit score splitting damaged from decent credit in the recommendation
const DECENT_CREDIT_SCORE: u16 = 650;

/// Credit score at which a low-rate loan becomes the lead recommendation
const EXCELLENT_CREDIT_SCORE: u16 = 700;

/// Portfolio-level inputs to the scenario comparison
///
/// Deliberately coarse: the comparator consumes aggregate totals, never
/// individual accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInputs {
    /// Total debt under consideration
    pub total_debt: f64,

    /// Client monthly income (0 when unknown; the loan DTI gate then fails)
    pub monthly_income: f64,

    /// Client credit score
    pub credit_score: u16,

    /// Actual aggregate monthly payment, when known
    #[serde(default)]
    pub current_monthly_payment: Option<f64>,
}

impl ScenarioInputs {
    /// Build comparator inputs from aggregated portfolio metrics
    pub fn from_metrics(metrics: &PortfolioMetrics, credit_score: u16, monthly_income: f64) -> Self {
        Self {
            total_debt: metrics.total_debt,
            monthly_income,
            credit_score,
            current_monthly_payment: Some(metrics.total_monthly_payments),
        }
    }
}

/// Simulates the three payoff strategies and produces a ranked recommendation
///
/// The recommendation ordering is a fixed policy, evaluated in a deliberate
/// order; it is not learned or optimized.
#[derive(Debug, Clone)]
pub struct ScenarioComparator {
    assumptions: Assumptions,
    params: EngineParams,
}

impl ScenarioComparator {
    pub fn new(assumptions: Assumptions, params: EngineParams) -> Self {
        Self {
            assumptions,
            params,
        }
    }

    /// Compute all three strategies, the comparison table, and the
    /// recommendation
    pub fn compare(&self, inputs: &ScenarioInputs) -> ScenarioReport {
        let current = self.current_path(inputs);
        let baseline_total = current.figures().map(|f| f.total_paid);
        let resolution = self.resolution_path(inputs, baseline_total);
        let loan = self.loan_path(inputs, baseline_total);

        let comparison = build_comparison(&current, &resolution, &loan);
        let recommendation = self.recommend(inputs, &current, &resolution, &loan);

        ScenarioReport {
            current,
            resolution,
            loan,
            comparison,
            recommendation,
        }
    }

    /// Status quo: minimum payments at a credit-score-tiered blended rate
    fn current_path(&self, inputs: &ScenarioInputs) -> ScenarioOutcome {
        let rate = self.assumptions.portfolio_rates.rate_for(inputs.credit_score);
        let monthly_payment = inputs
            .current_monthly_payment
            .filter(|p| *p > 0.0)
            .unwrap_or(inputs.total_debt * ASSUMED_MIN_PAYMENT_PCT);

        match simulate_minimum_payments(
            inputs.total_debt,
            rate,
            PaymentPolicy::Fixed(monthly_payment),
            self.params.max_simulation_months,
        ) {
            crate::amortization::Payoff::Bounded { months, interest } => {
                ScenarioOutcome::Feasible(ScenarioFigures {
                    months,
                    monthly_payment,
                    annual_rate: Some(rate),
                    total_paid: inputs.total_debt + interest,
                    interest_or_fees: interest,
                    savings_vs_current: None,
                    summary: format!(
                        "Debt-free in {:.1} years at minimum payments",
                        months as f64 / 12.0
                    ),
                })
            }
            crate::amortization::Payoff::Unbounded => ScenarioOutcome::Infeasible {
                reason: "Minimum payments will not eliminate this debt".to_string(),
            },
        }
    }

    /// Settlement program: settle at a fraction of balance plus a program fee,
    /// paid evenly over a debt-tiered program length. Feasible by construction.
    fn resolution_path(
        &self,
        inputs: &ScenarioInputs,
        baseline_total: Option<f64>,
    ) -> ScenarioOutcome {
        let settlement_amount = inputs.total_debt * self.params.settlement_percent / 100.0;
        let program_fee = inputs.total_debt * self.params.program_fee_percent / 100.0;
        let total_paid = settlement_amount + program_fee;

        let months = self.assumptions.program_lengths.months_for(inputs.total_debt);
        let monthly_payment = total_paid / months as f64;

        ScenarioOutcome::Feasible(ScenarioFigures {
            months,
            monthly_payment,
            annual_rate: None,
            total_paid,
            interest_or_fees: program_fee,
            savings_vs_current: baseline_total.map(|baseline| baseline - total_paid),
            summary: format!(
                "Debt-free in {:.1} years through a settlement program",
                months as f64 / 12.0
            ),
        })
    }

    /// Consolidation loan: underwriting gates, then a standard level payment
    fn loan_path(&self, inputs: &ScenarioInputs, baseline_total: Option<f64>) -> ScenarioOutcome {
        let terms = &self.assumptions.loan;

        if inputs.credit_score < terms.min_credit_score {
            return ScenarioOutcome::Infeasible {
                reason: "Credit score too low for favorable loan terms".to_string(),
            };
        }

        // Underwriters estimate the payment from the balance, not from the
        // reported payments. Unknown income fails the gate.
        let estimated_payment = inputs.total_debt * ASSUMED_MIN_PAYMENT_PCT;
        let dti = if inputs.monthly_income > 0.0 {
            estimated_payment / inputs.monthly_income * 100.0
        } else {
            f64::INFINITY
        };
        if dti > terms.max_dti_percent {
            return ScenarioOutcome::Infeasible {
                reason: "Debt-to-income ratio too high".to_string(),
            };
        }

        if inputs.total_debt > terms.max_loan_amount {
            return ScenarioOutcome::Infeasible {
                reason: "Debt amount exceeds typical loan limits".to_string(),
            };
        }

        let rate = terms.rates.rate_for(inputs.credit_score);
        let monthly_payment = level_loan_payment(inputs.total_debt, rate, terms.term_months);
        let total_paid = monthly_payment * terms.term_months as f64;

        ScenarioOutcome::Feasible(ScenarioFigures {
            months: terms.term_months,
            monthly_payment,
            annual_rate: Some(rate),
            total_paid,
            interest_or_fees: total_paid - inputs.total_debt,
            savings_vs_current: baseline_total.map(|baseline| baseline - total_paid),
            summary: format!(
                "May qualify for a {}-month consolidation loan at {rate}%",
                terms.term_months
            ),
        })
    }

    /// Fixed rule ordering:
    /// (a) excellent credit and a sub-10% loan -> loan
    /// (b) damaged credit or large debt -> resolution, with savings figures
    /// (c) manageable debt and decent credit -> accelerate the current path
    /// (d) default -> resolution
    fn recommend(
        &self,
        inputs: &ScenarioInputs,
        current: &ScenarioOutcome,
        resolution: &ScenarioOutcome,
        loan: &ScenarioOutcome,
    ) -> Recommendation {
        let forgiven_balance =
            inputs.total_debt - inputs.total_debt * self.params.settlement_percent / 100.0;
        let resolution_months = resolution.figures().map(|f| f.months);
        let months_saved = match (current.figures(), resolution_months) {
            (Some(current), Some(resolution)) => {
                Some(current.months as i64 - resolution as i64)
            }
            _ => None,
        };

        let low_rate_loan = loan
            .figures()
            .and_then(|f| f.annual_rate)
            .map(|rate| rate < LOW_RATE_LOAN_THRESHOLD)
            .unwrap_or(false);

        if inputs.credit_score >= EXCELLENT_CREDIT_SCORE && low_rate_loan {
            return Recommendation {
                strategy: Strategy::Loan,
                reason: "Your excellent credit qualifies you for a low-rate consolidation loan"
                    .to_string(),
                action: "Apply for a debt consolidation loan".to_string(),
                projected_savings: None,
                months_saved: None,
            };
        }

        if inputs.credit_score < DECENT_CREDIT_SCORE || inputs.total_debt >= RESOLUTION_DEBT_FLOOR {
            return Recommendation {
                strategy: Strategy::Resolution,
                reason: "Debt resolution will save you the most money and time".to_string(),
                action: "Schedule a free consultation".to_string(),
                projected_savings: Some(forgiven_balance),
                months_saved,
            };
        }

        if inputs.total_debt < MANAGEABLE_DEBT_CEILING
            && inputs.credit_score >= DECENT_CREDIT_SCORE
        {
            return Recommendation {
                strategy: Strategy::Current,
                reason: "Your debt is manageable - consider accelerated payments".to_string(),
                action: "Create a payoff plan".to_string(),
                projected_savings: None,
                months_saved: None,
            };
        }

        Recommendation {
            strategy: Strategy::Resolution,
            reason: "Debt resolution offers the best balance of savings and timeline".to_string(),
            action: "Schedule a free consultation".to_string(),
            projected_savings: Some(forgiven_balance),
            months_saved: None,
        }
    }
}

/// Table of feasible strategies with lowest-payment and lowest-cost winners
fn build_comparison(
    current: &ScenarioOutcome,
    resolution: &ScenarioOutcome,
    loan: &ScenarioOutcome,
) -> Comparison {
    let mut rows = Vec::new();
    for (strategy, outcome) in [
        (Strategy::Current, current),
        (Strategy::Resolution, resolution),
        (Strategy::Loan, loan),
    ] {
        if let Some(figures) = outcome.figures() {
            rows.push(ComparisonRow {
                strategy,
                months: figures.months,
                monthly_payment: figures.monthly_payment,
                total_paid: figures.total_paid,
            });
        }
    }

    // Resolution is always feasible, so rows is never empty
    let lowest_monthly_payment = rows
        .iter()
        .min_by(|a, b| a.monthly_payment.total_cmp(&b.monthly_payment))
        .map(|row| row.strategy)
        .unwrap_or(Strategy::Resolution);
    let lowest_total_cost = rows
        .iter()
        .min_by(|a, b| a.total_paid.total_cmp(&b.total_paid))
        .map(|row| row.strategy)
        .unwrap_or(Strategy::Resolution);

    Comparison {
        rows,
        lowest_monthly_payment,
        lowest_total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn comparator() -> ScenarioComparator {
        ScenarioComparator::new(Assumptions::default_underwriting(), EngineParams::default())
    }

    fn inputs(credit_score: u16, total_debt: f64, monthly_income: f64) -> ScenarioInputs {
        ScenarioInputs {
            total_debt,
            monthly_income,
            credit_score,
            current_monthly_payment: None,
        }
    }

    #[test]
    fn excellent_credit_gets_loan_recommendation() {
        // 760 score, $40k debt: loan feasible at 7%, rule (a) fires
        let report = comparator().compare(&inputs(760, 40_000.0, 6_000.0));

        let loan = report.loan.figures().expect("loan should be feasible");
        assert_eq!(loan.annual_rate, Some(7.0));
        assert_eq!(loan.months, 60);
        assert_eq!(report.recommendation.strategy, Strategy::Loan);
    }

    #[test]
    fn damaged_credit_gets_resolution() {
        // 580 score: loan gated out, rule (b) fires with savings attached
        let report = comparator().compare(&inputs(580, 40_000.0, 6_000.0));

        assert_eq!(
            report.loan.infeasible_reason(),
            Some("Credit score too low for favorable loan terms")
        );
        assert_eq!(report.recommendation.strategy, Strategy::Resolution);
        assert_relative_eq!(
            report.recommendation.projected_savings.unwrap(),
            20_000.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn manageable_debt_keeps_current_path() {
        // $10k at 660: below both resolution triggers, rule (c) fires
        let report = comparator().compare(&inputs(660, 10_000.0, 4_000.0));
        assert_eq!(report.recommendation.strategy, Strategy::Current);
    }

    #[test]
    fn large_debt_prefers_resolution_even_with_good_score() {
        // 700 score gets a 10% loan, not under the low-rate threshold, so rule
        // (b) takes over at $40k
        let report = comparator().compare(&inputs(700, 40_000.0, 6_000.0));

        assert!(report.loan.is_feasible());
        assert_eq!(report.recommendation.strategy, Strategy::Resolution);
    }

    #[test]
    fn resolution_always_feasible() {
        for (score, debt) in [(520_u16, 5_000.0), (760, 250_000.0), (640, 0.0)] {
            let report = comparator().compare(&inputs(score, debt, 3_000.0));
            assert!(report.resolution.is_feasible());
            assert!(!report.comparison.rows.is_empty());
        }
    }

    #[test]
    fn resolution_figures() {
        // $40k: settle $20k + $10k fee over 36 months
        let report = comparator().compare(&inputs(580, 40_000.0, 6_000.0));
        let resolution = report.resolution.figures().unwrap();

        assert_eq!(resolution.months, 36);
        assert_relative_eq!(resolution.total_paid, 30_000.0, epsilon = 1e-9);
        assert_relative_eq!(resolution.interest_or_fees, 10_000.0, epsilon = 1e-9);
        assert_relative_eq!(resolution.monthly_payment, 30_000.0 / 36.0, epsilon = 1e-9);
    }

    #[test]
    fn current_path_infeasible_when_payment_below_interest() {
        // Supplied payment cannot cover the interest at a 28% blended rate
        let report = comparator().compare(&ScenarioInputs {
            total_debt: 40_000.0,
            monthly_income: 3_000.0,
            credit_score: 560,
            current_monthly_payment: Some(900.0),
        });

        assert_eq!(
            report.current.infeasible_reason(),
            Some("Minimum payments will not eliminate this debt")
        );
        // Infeasible path is omitted from the comparison table
        assert!(report
            .comparison
            .rows
            .iter()
            .all(|row| row.strategy != Strategy::Current));
    }

    #[test]
    fn loan_gates_on_dti_and_amount() {
        // Unknown income: DTI gate fails
        let report = comparator().compare(&inputs(720, 40_000.0, 0.0));
        assert_eq!(
            report.loan.infeasible_reason(),
            Some("Debt-to-income ratio too high")
        );

        // Debt above the loan ceiling
        let report = comparator().compare(&inputs(760, 150_000.0, 20_000.0));
        assert_eq!(
            report.loan.infeasible_reason(),
            Some("Debt amount exceeds typical loan limits")
        );
    }

    #[test]
    fn comparison_winners_computed_over_feasible_rows() {
        let report = comparator().compare(&inputs(760, 40_000.0, 6_000.0));
        let comparison = &report.comparison;

        assert_eq!(comparison.rows.len(), 3);
        for winner in [
            comparison.lowest_monthly_payment,
            comparison.lowest_total_cost,
        ] {
            assert!(comparison.rows.iter().any(|row| row.strategy == winner));
        }

        // Settlement costs 75% of the balance with no interest: cheapest here
        assert_eq!(comparison.lowest_total_cost, Strategy::Resolution);
    }

    #[test]
    fn recommendation_is_always_one_of_three() {
        for (score, debt, income) in [
            (760_u16, 40_000.0, 6_000.0),
            (580, 40_000.0, 3_000.0),
            (660, 10_000.0, 4_000.0),
            (655, 20_000.0, 4_000.0),
            (500, 1_000.0, 0.0),
        ] {
            let report = comparator().compare(&inputs(score, debt, income));
            assert!(matches!(
                report.recommendation.strategy,
                Strategy::Current | Strategy::Resolution | Strategy::Loan
            ));
        }
    }

    #[test]
    fn default_rule_recommends_resolution_without_months_saved() {
        // 651 score, $20k: no rule fires until the default. Rule (b) needs
        // <650 or >=25k, rule (c) needs <15k.
        let report = comparator().compare(&inputs(651, 20_000.0, 4_000.0));

        assert_eq!(report.recommendation.strategy, Strategy::Resolution);
        assert!(report.recommendation.months_saved.is_none());
        assert!(report.recommendation.projected_savings.is_some());
    }

    #[test]
    fn resolution_rule_attaches_months_saved_when_current_converges() {
        // 580 score, $40k at 28% with the assumed $1,000 payment converges
        // slowly; rule (b) reports the months saved against it
        let report = comparator().compare(&inputs(580, 40_000.0, 6_000.0));

        assert!(report.current.is_feasible());
        let current_months = report.current.figures().unwrap().months as i64;
        let resolution_months = report.resolution.figures().unwrap().months as i64;
        assert_eq!(
            report.recommendation.months_saved,
            Some(current_months - resolution_months)
        );
    }
}
