//! Settlement program and consolidation loan terms

use super::rates::ScoreTieredRates;

/// Settlement program length tiered by enrolled debt, largest tier first
#[derive(Debug, Clone)]
pub struct ProgramLengthSchedule {
    /// (minimum total debt, program months) pairs in descending debt order
    tiers: Vec<(f64, u32)>,
    /// Program months when no tier matches
    fallback: u32,
}

impl ProgramLengthSchedule {
    /// Typical program lengths: 2 years for small balances up to 4 years at $75k+
    pub fn default_tiers() -> Self {
        Self {
            tiers: vec![
                (75_000.0, 48),
                (50_000.0, 42),
                (30_000.0, 36),
                (15_000.0, 30),
            ],
            fallback: 24,
        }
    }

    /// Program length in months for a given total debt
    pub fn months_for(&self, total_debt: f64) -> u32 {
        self.tiers
            .iter()
            .find(|(min_debt, _)| total_debt >= *min_debt)
            .map(|(_, months)| *months)
            .unwrap_or(self.fallback)
    }
}

/// Consolidation loan underwriting gates and pricing
#[derive(Debug, Clone)]
pub struct LoanTerms {
    /// Minimum credit score to qualify
    pub min_credit_score: u16,

    /// Maximum estimated debt-to-income percentage
    pub max_dti_percent: f64,

    /// Maximum loan principal
    pub max_loan_amount: f64,

    /// Loan term in months
    pub term_months: u32,

    /// APR by credit score tier
    pub rates: ScoreTieredRates,
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self {
            min_credit_score: 640,
            max_dti_percent: 43.0,
            max_loan_amount: 100_000.0,
            term_months: 60,
            rates: ScoreTieredRates::consolidation_loan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_length_tiers() {
        let schedule = ProgramLengthSchedule::default_tiers();

        assert_eq!(schedule.months_for(80_000.0), 48);
        assert_eq!(schedule.months_for(75_000.0), 48);
        assert_eq!(schedule.months_for(60_000.0), 42);
        assert_eq!(schedule.months_for(40_000.0), 36);
        assert_eq!(schedule.months_for(20_000.0), 30);
        assert_eq!(schedule.months_for(10_000.0), 24);
    }

    #[test]
    fn loan_terms_defaults() {
        let terms = LoanTerms::default();

        assert_eq!(terms.min_credit_score, 640);
        assert_eq!(terms.term_months, 60);
        assert_eq!(terms.rates.rate_for(760), 7.0);
    }
}
