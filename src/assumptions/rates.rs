//! Interest rate heuristic tables
//!
//! All tables are immutable constant data. Rates produced here are best-effort
//! estimates for accounts that do not state an APR, not guarantees.

/// Known-issuer APR defaults for revolving accounts
///
/// Matched case-insensitively by substring against the creditor name, first
/// match wins. Credit bureaus report issuer names in many shapes ("JPMCB CARD
/// SERVICES", "Capital One N.A."), hence substring rather than exact match.
#[derive(Debug, Clone)]
pub struct IssuerRateTable {
    entries: Vec<(String, f64)>,
    default_rate: f64,
}

impl IssuerRateTable {
    /// Published purchase-APR averages by major issuer
    pub fn default_issuers() -> Self {
        let entries = [
            ("amex", 18.99),
            ("discover", 20.24),
            ("chase", 19.49),
            ("jpmcb", 19.49),
            ("capital one", 24.99),
            ("citi", 18.74),
        ];
        Self {
            entries: entries
                .iter()
                .map(|(name, rate)| (name.to_string(), *rate))
                .collect(),
            default_rate: 21.99,
        }
    }

    /// Estimated APR for a creditor name
    pub fn rate_for(&self, creditor: &str) -> f64 {
        let name = creditor.to_lowercase();
        self.entries
            .iter()
            .find(|(needle, _)| name.contains(needle.as_str()))
            .map(|(_, rate)| *rate)
            .unwrap_or(self.default_rate)
    }

    /// Fallback rate when no issuer matches
    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }
}

/// Fallback APRs by account kind when neither a stated rate nor the data for
/// reverse-engineering is available
#[derive(Debug, Clone)]
pub struct KindRateDefaults {
    /// Auto loans
    pub auto: f64,
    /// Generic installment loans
    pub installment: f64,
    /// Anything that is neither revolving nor installment/auto
    pub other: f64,
}

impl Default for KindRateDefaults {
    fn default() -> Self {
        Self {
            auto: 6.5,
            installment: 12.0,
            other: 15.0,
        }
    }
}

/// Annual rate tiered by credit score, highest tier first
#[derive(Debug, Clone)]
pub struct ScoreTieredRates {
    /// (minimum score, annual rate %) pairs in descending score order
    tiers: Vec<(u16, f64)>,
    /// Rate when no tier matches
    fallback: f64,
}

impl ScoreTieredRates {
    pub fn new(tiers: Vec<(u16, f64)>, fallback: f64) -> Self {
        Self { tiers, fallback }
    }

    /// Assumed blended APR across a consumer's revolving debt
    pub fn portfolio_average() -> Self {
        Self::new(
            vec![(750, 15.0), (700, 18.0), (650, 22.0), (600, 25.0)],
            28.0,
        )
    }

    /// Consolidation loan APR by underwriting tier
    pub fn consolidation_loan() -> Self {
        Self::new(vec![(750, 7.0), (700, 10.0), (650, 14.0)], 18.0)
    }

    /// Rate for a given credit score
    pub fn rate_for(&self, credit_score: u16) -> f64 {
        self.tiers
            .iter()
            .find(|(min_score, _)| credit_score >= *min_score)
            .map(|(_, rate)| *rate)
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuer_lookup_is_case_insensitive_substring() {
        let table = IssuerRateTable::default_issuers();

        assert_eq!(table.rate_for("AMEX"), 18.99);
        assert_eq!(table.rate_for("Discover Financial"), 20.24);
        assert_eq!(table.rate_for("JPMCB CARD SERVICES"), 19.49);
        assert_eq!(table.rate_for("Capital One N.A."), 24.99);
        assert_eq!(table.rate_for("CITIBANK"), 18.74);
        assert_eq!(table.rate_for("Local Credit Union"), 21.99);
    }

    #[test]
    fn portfolio_average_tiers() {
        let tiers = ScoreTieredRates::portfolio_average();

        assert_eq!(tiers.rate_for(780), 15.0);
        assert_eq!(tiers.rate_for(750), 15.0);
        assert_eq!(tiers.rate_for(749), 18.0);
        assert_eq!(tiers.rate_for(660), 22.0);
        assert_eq!(tiers.rate_for(600), 25.0);
        assert_eq!(tiers.rate_for(540), 28.0);
    }

    #[test]
    fn loan_rate_tiers() {
        let tiers = ScoreTieredRates::consolidation_loan();

        assert_eq!(tiers.rate_for(760), 7.0);
        assert_eq!(tiers.rate_for(710), 10.0);
        assert_eq!(tiers.rate_for(650), 14.0);
        assert_eq!(tiers.rate_for(640), 18.0);
    }
}
