//! Month-by-month amortization under a minimum-payment policy
//!
//! One simulation pass produces both months-to-payoff and total remaining
//! interest. Non-convergence is a first-class outcome, not an error: a debt
//! whose payment never covers the interest charge is a valid real-world case
//! the caller must be able to display.

use serde::{Deserialize, Serialize};

/// Hard iteration cap (30 years). A resource-exhaustion guard: a single
/// malformed account cannot cause unbounded CPU consumption.
pub const DEFAULT_MAX_MONTHS: u32 = 360;

/// Dollar floor on the recomputed revolving minimum payment
pub const REVOLVING_PAYMENT_FLOOR: f64 = 25.0;

/// Balance fraction component of the revolving minimum payment
pub const REVOLVING_BALANCE_PCT: f64 = 0.02;

/// How the monthly payment is determined at each iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentPolicy {
    /// Payment held fixed for the whole schedule (installment, auto, mortgage)
    Fixed(f64),

    /// Revolving minimum, recomputed each month as
    /// `max(interest + 25, balance * 0.02, 25)`
    RevolvingMinimum,
}

impl PaymentPolicy {
    /// Payment due this month given the current balance and interest charge
    fn payment(&self, balance: f64, interest_charge: f64) -> f64 {
        match self {
            PaymentPolicy::Fixed(amount) => *amount,
            PaymentPolicy::RevolvingMinimum => (interest_charge + REVOLVING_PAYMENT_FLOOR)
                .max(balance * REVOLVING_BALANCE_PCT)
                .max(REVOLVING_PAYMENT_FLOOR),
        }
    }
}

/// Outcome of a minimum-payment schedule
///
/// `Unbounded` replaces the numeric infinity sentinel some callers might
/// expect: it cannot silently propagate into arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Payoff {
    /// Balance reaches zero after `months`, paying `interest` along the way
    Bounded { months: u32, interest: f64 },

    /// Payments never retire the balance (payment <= interest charge, or the
    /// iteration cap was reached with balance outstanding)
    Unbounded,
}

impl Payoff {
    pub fn is_bounded(&self) -> bool {
        matches!(self, Payoff::Bounded { .. })
    }

    /// Months to payoff, if the schedule converges
    pub fn months(&self) -> Option<u32> {
        match self {
            Payoff::Bounded { months, .. } => Some(*months),
            Payoff::Unbounded => None,
        }
    }

    /// Remaining interest, if the schedule converges
    pub fn interest(&self) -> Option<f64> {
        match self {
            Payoff::Bounded { interest, .. } => Some(*interest),
            Payoff::Unbounded => None,
        }
    }

    /// Months to payoff with unbounded schedules damped to `cap`
    pub fn months_or(&self, cap: u32) -> u32 {
        self.months().unwrap_or(cap)
    }

    /// Remaining interest with unbounded schedules contributing zero
    pub fn interest_or_zero(&self) -> f64 {
        self.interest().unwrap_or(0.0)
    }
}

/// Simulate a minimum-payment schedule against `starting_balance`
///
/// Each iteration charges `balance * annual_rate / 12`, determines the payment
/// from the policy, and applies the principal portion. The loop terminates
/// immediately with `Payoff::Unbounded` once the payment fails to cover the
/// interest charge; reaching `max_months` with balance outstanding is also
/// unbounded. A zero starting balance is trivially paid off.
pub fn simulate_minimum_payments(
    starting_balance: f64,
    annual_rate_pct: f64,
    policy: PaymentPolicy,
    max_months: u32,
) -> Payoff {
    if starting_balance <= 0.0 {
        return Payoff::Bounded {
            months: 0,
            interest: 0.0,
        };
    }

    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let mut balance = starting_balance;
    let mut total_interest = 0.0;
    let mut months = 0;

    while months < max_months {
        let interest_charge = balance * monthly_rate;
        let payment = policy.payment(balance, interest_charge);
        let principal = payment - interest_charge;

        if principal <= 0.0 {
            return Payoff::Unbounded;
        }

        total_interest += interest_charge;
        balance -= principal;
        months += 1;

        if balance <= 0.0 {
            return Payoff::Bounded {
                months,
                interest: total_interest,
            };
        }
    }

    Payoff::Unbounded
}

/// Standard level payment for a fully amortizing fixed-rate loan
pub fn level_loan_payment(principal: f64, annual_rate_pct: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return principal;
    }
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return principal / term_months as f64;
    }
    let growth = (1.0 + monthly_rate).powi(term_months as i32);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fixed_payment_converges() {
        // $5,000 at 20% with a $150 fixed payment: interest charge starts at
        // $83.33, well under the payment
        let payoff =
            simulate_minimum_payments(5_000.0, 20.0, PaymentPolicy::Fixed(150.0), DEFAULT_MAX_MONTHS);

        match payoff {
            Payoff::Bounded { months, interest } => {
                assert!(months > 12 && months < 60);
                assert!(interest > 0.0);
            }
            Payoff::Unbounded => panic!("schedule should converge"),
        }
    }

    #[test]
    fn fixed_payment_below_interest_is_unbounded() {
        // $5,000 at 24%: monthly interest is $100, payment is $80
        let payoff =
            simulate_minimum_payments(5_000.0, 24.0, PaymentPolicy::Fixed(80.0), DEFAULT_MAX_MONTHS);
        assert_eq!(payoff, Payoff::Unbounded);
    }

    #[test]
    fn iteration_cap_yields_unbounded() {
        // Payment barely above the interest charge cannot finish within the cap
        let payoff = simulate_minimum_payments(5_000.0, 24.0, PaymentPolicy::Fixed(110.0), 12);
        assert_eq!(payoff, Payoff::Unbounded);
    }

    #[test]
    fn revolving_minimum_always_reduces_principal() {
        // At 24% the revolving formula settles on interest + $25, so principal
        // falls by exactly $25/month: 5000 / 25 = 200 months
        let payoff = simulate_minimum_payments(
            5_000.0,
            24.0,
            PaymentPolicy::RevolvingMinimum,
            DEFAULT_MAX_MONTHS,
        );

        match payoff {
            Payoff::Bounded { months, interest } => {
                assert_eq!(months, 200);
                // Interest = 2% of each declining monthly balance
                assert_relative_eq!(interest, 10_050.0, epsilon = 1e-6);
            }
            Payoff::Unbounded => panic!("revolving minimum should converge"),
        }
    }

    #[test]
    fn zero_balance_is_trivially_paid() {
        let payoff =
            simulate_minimum_payments(0.0, 20.0, PaymentPolicy::Fixed(100.0), DEFAULT_MAX_MONTHS);
        assert_eq!(
            payoff,
            Payoff::Bounded {
                months: 0,
                interest: 0.0
            }
        );
    }

    #[test]
    fn higher_payment_never_lengthens_payoff() {
        let mut prev_months = u32::MAX;
        for payment in [250.0, 300.0, 400.0, 600.0, 1_000.0] {
            let payoff = simulate_minimum_payments(
                10_000.0,
                18.0,
                PaymentPolicy::Fixed(payment),
                DEFAULT_MAX_MONTHS,
            );
            let months = payoff.months().expect("feasible payment");
            assert!(months <= prev_months);
            prev_months = months;
        }
    }

    #[test]
    fn zero_rate_schedule_is_straight_line() {
        let payoff =
            simulate_minimum_payments(1_200.0, 0.0, PaymentPolicy::Fixed(100.0), DEFAULT_MAX_MONTHS);
        assert_eq!(
            payoff,
            Payoff::Bounded {
                months: 12,
                interest: 0.0
            }
        );
    }

    #[test]
    fn level_payment_matches_reference_value() {
        // $10,000 at 12% over 12 months: standard amortization tables give $888.49
        let payment = level_loan_payment(10_000.0, 12.0, 12);
        assert_relative_eq!(payment, 888.4879, epsilon = 1e-3);
    }

    #[test]
    fn level_payment_zero_rate() {
        assert_relative_eq!(level_loan_payment(6_000.0, 0.0, 60), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn sentinel_accessors() {
        let bounded = Payoff::Bounded {
            months: 24,
            interest: 500.0,
        };
        assert_eq!(bounded.months_or(120), 24);
        assert_eq!(bounded.interest_or_zero(), 500.0);

        assert_eq!(Payoff::Unbounded.months_or(120), 120);
        assert_eq!(Payoff::Unbounded.interest_or_zero(), 0.0);
        assert_eq!(Payoff::Unbounded.months(), None);
    }
}
