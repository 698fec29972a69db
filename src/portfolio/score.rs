//! Staged credit-score recovery projection
//!
//! Illustrative floors and ceilings anchored to the current score, not a
//! predictive model. Strictly informational: nothing downstream consumes it.

use serde::{Deserialize, Serialize};

/// One projected time band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBand {
    /// Band start, months from enrollment
    pub from_month: u32,

    /// Band end, months from enrollment (None for the open-ended final band)
    pub to_month: Option<u32>,

    /// Projected score within the band
    pub projected_score: u16,

    /// Qualitative description of the band
    pub description: String,
}

/// Four ordered, non-overlapping recovery bands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreProjection {
    /// Score the projection is anchored to
    pub current_score: u16,

    /// Bands in chronological order: 0-6, 6-12, 12-24, 24+
    pub bands: Vec<ScoreBand>,
}

impl ScoreProjection {
    /// Build the staged projection for a current score
    pub fn from_current(current_score: u16) -> Self {
        let score = current_score as i32;
        let bands = vec![
            ScoreBand {
                from_month: 0,
                to_month: Some(6),
                projected_score: staged(score - 100, 500),
                description: "Initial drop as accounts become delinquent".to_string(),
            },
            ScoreBand {
                from_month: 6,
                to_month: Some(12),
                projected_score: staged(score - 80, 520),
                description: "Stabilization as settlements begin".to_string(),
            },
            ScoreBand {
                from_month: 12,
                to_month: Some(24),
                projected_score: staged(score - 50, 580),
                description: "Gradual recovery as settlements complete".to_string(),
            },
            ScoreBand {
                from_month: 24,
                to_month: None,
                projected_score: (score - 20).clamp(0, 750) as u16,
                description: "Strong recovery with clean payment history on remaining accounts"
                    .to_string(),
            },
        ];

        Self {
            current_score,
            bands,
        }
    }
}

fn staged(projected: i32, floor: i32) -> u16 {
    projected.max(floor) as u16
}
