//! Underwriting assumptions: issuer rates, score tiers, and program terms

mod program;
mod rates;

pub use program::{LoanTerms, ProgramLengthSchedule};
pub use rates::{IssuerRateTable, KindRateDefaults, ScoreTieredRates};

/// Container for all heuristic lookup tables used by the engine
///
/// Stateless constant data: build once, share freely. The defaults mirror
/// typical US consumer credit conditions and are approximations by design.
#[derive(Debug, Clone)]
pub struct Assumptions {
    /// Known-issuer APR defaults for revolving accounts
    pub issuer_rates: IssuerRateTable,

    /// Fallback APRs by account kind
    pub kind_rates: KindRateDefaults,

    /// Assumed blended portfolio APR by credit score tier
    pub portfolio_rates: ScoreTieredRates,

    /// Settlement program length by debt size
    pub program_lengths: ProgramLengthSchedule,

    /// Consolidation loan underwriting gates and pricing
    pub loan: LoanTerms,
}

impl Assumptions {
    /// Create assumptions with default underwriting values
    pub fn default_underwriting() -> Self {
        Self {
            issuer_rates: IssuerRateTable::default_issuers(),
            kind_rates: KindRateDefaults::default(),
            portfolio_rates: ScoreTieredRates::portfolio_average(),
            program_lengths: ProgramLengthSchedule::default_tiers(),
            loan: LoanTerms::default(),
        }
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_underwriting()
    }
}
