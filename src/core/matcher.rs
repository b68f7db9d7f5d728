use crate::core::{filters::passes_filters, scoring::score_breakdown};
use crate::models::{FirmRecord, ScoredMatch, ScoringWeights, UserProfile};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
    pub total_firms: usize,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Admission filter over hard constraints
/// 2. Scoring of each candidate
/// 3. Stable ranking by descending score
///
/// The dataset is borrowed read-only, so one matcher can serve any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Find and rank the firms matching a user's preferences
    ///
    /// # Arguments
    /// * `profile` - The user's preference profile
    /// * `firms` - The full firm dataset
    ///
    /// # Returns
    /// MatchResult with candidates ordered by score; equal scores keep dataset order
    pub fn find_matches(&self, profile: &UserProfile, firms: &[FirmRecord]) -> MatchResult {
        let total_firms = firms.len();

        let mut scored_matches: Vec<ScoredMatch> = firms
            .iter()
            // Stage 1: Admission
            .filter(|firm| passes_filters(firm, profile))
            // Stage 2: Scoring
            .map(|firm| {
                let breakdown = score_breakdown(firm, profile, &self.weights);

                ScoredMatch {
                    firm: firm.clone(),
                    match_score: breakdown.total(),
                    matched_criteria: breakdown.matched_criteria(),
                    limited_data: firm.is_bonus_firm,
                }
            })
            .collect();

        // Stage 3: sort_by is stable, ties keep dataset order
        scored_matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        tracing::debug!(
            "Matched {} of {} firms",
            scored_matches.len(),
            total_firms
        );

        MatchResult {
            total_candidates: scored_matches.len(),
            matches: scored_matches,
            total_firms,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
