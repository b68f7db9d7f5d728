use crate::core::filters::{matches_min_aum, matches_state};
use crate::models::{ClientType, FirmRecord, ScoringWeights, UserProfile};

/// Points earned by each scoring clause for one firm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub aum: u8,
    pub state: u8,
    pub fee_model: u8,
    pub hnw: u8,
    pub institutional: u8,
    pub interest: u8,
}

impl ScoreBreakdown {
    /// Sum of earned points, clamped to 100
    pub fn total(&self) -> u8 {
        let sum: u32 = [
            self.aum,
            self.state,
            self.fee_model,
            self.hnw,
            self.institutional,
            self.interest,
        ]
        .iter()
        .map(|p| u32::from(*p))
        .sum();
        sum.min(100) as u8
    }

    /// Names of the clauses that earned points
    pub fn matched_criteria(&self) -> Vec<String> {
        [
            ("aum", self.aum),
            ("state", self.state),
            ("fee_model", self.fee_model),
            ("high_net_worth", self.hnw),
            ("institutional", self.institutional),
            ("interest", self.interest),
        ]
        .iter()
        .filter(|(_, points)| *points > 0)
        .map(|(name, _)| name.to_string())
        .collect()
    }
}

/// Evaluate every scoring clause independently
///
/// | clause        | condition                                      |
/// |---------------|------------------------------------------------|
/// | aum           | firm AUM >= minimum                            |
/// | state         | no preference, or exact state match            |
/// | fee_model     | firm fee flag equals the preference (symmetric) |
/// | hnw           | user is HNW and firm serves HNW                |
/// | institutional | user is institutional and firm serves them     |
/// | interest      | non-blank interest found in services           |
///
/// Unknown firm fields fail their clause.
pub fn score_breakdown(
    firm: &FirmRecord,
    profile: &UserProfile,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let earn = |hit: bool, points: u8| if hit { points } else { 0 };

    ScoreBreakdown {
        aum: earn(matches_min_aum(firm, profile), weights.aum),
        state: earn(matches_state(firm, profile), weights.state),
        fee_model: earn(
            firm.performance_fee == Some(profile.performance_fee_preference),
            weights.fee_model,
        ),
        hnw: earn(
            profile.client_type == ClientType::HighNetWorth && firm.serves_hnw(),
            weights.hnw,
        ),
        institutional: earn(
            profile.client_type == ClientType::Institutional && firm.serves_institutional(),
            weights.institutional,
        ),
        interest: earn(
            !profile.interest_is_blank() && profile.interest_matches(firm),
            weights.interest,
        ),
    }
}

/// Calculate a compatibility score (0-100) for a firm
pub fn calculate_match_score(
    firm: &FirmRecord,
    profile: &UserProfile,
    weights: &ScoringWeights,
) -> u8 {
    score_breakdown(firm, profile, weights).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatePreference;

    fn create_test_firm(performance_fee: bool) -> FirmRecord {
        FirmRecord {
            state: Some("NY".to_string()),
            aum_millions: Some(150.0),
            performance_fee: Some(performance_fee),
            client_hnw: Some(true),
            client_institutional: Some(false),
            services: Some("retirement, estate planning".to_string()),
            ..FirmRecord::named("Hudson Capital")
        }
    }

    fn create_test_profile() -> UserProfile {
        UserProfile {
            min_aum: 100.0,
            state: StatePreference::State("NY".to_string()),
            performance_fee_preference: true,
            client_type: ClientType::HighNetWorth,
            interest: "estate".to_string(),
        }
    }

    #[test]
    fn test_full_match_scores_100() {
        let weights = ScoringWeights::default();
        let score = calculate_match_score(&create_test_firm(true), &create_test_profile(), &weights);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_bare_firm_scores_only_permissive_state() {
        let weights = ScoringWeights::default();
        let mut profile = create_test_profile();
        profile.state = StatePreference::Any;

        let breakdown = score_breakdown(&FirmRecord::named("Bare"), &profile, &weights);
        assert_eq!(breakdown.total(), 15);
        assert_eq!(breakdown.matched_criteria(), vec!["state"]);
    }

    #[test]
    fn test_fee_agreement_is_symmetric() {
        let weights = ScoringWeights::default();
        let mut profile = create_test_profile();
        profile.performance_fee_preference = false;

        let agree = score_breakdown(&create_test_firm(false), &profile, &weights);
        let disagree = score_breakdown(&create_test_firm(true), &profile, &weights);
        assert_eq!(agree.fee_model, 15);
        assert_eq!(disagree.fee_model, 0);
    }

    #[test]
    fn test_unknown_fee_flag_earns_nothing() {
        let weights = ScoringWeights::default();
        let mut firm = create_test_firm(false);
        firm.performance_fee = None;
        let mut profile = create_test_profile();
        profile.performance_fee_preference = false;

        assert_eq!(score_breakdown(&firm, &profile, &weights).fee_model, 0);
    }

    #[test]
    fn test_any_client_type_earns_no_affinity() {
        let weights = ScoringWeights::default();
        let mut profile = create_test_profile();
        profile.client_type = ClientType::Any;

        let breakdown = score_breakdown(&create_test_firm(true), &profile, &weights);
        assert_eq!(breakdown.hnw, 0);
        assert_eq!(breakdown.institutional, 0);
        assert_eq!(breakdown.total(), 80);
    }

    #[test]
    fn test_institutional_affinity() {
        let weights = ScoringWeights::default();
        let mut firm = create_test_firm(true);
        firm.client_institutional = Some(true);
        let mut profile = create_test_profile();
        profile.client_type = ClientType::Institutional;

        let breakdown = score_breakdown(&firm, &profile, &weights);
        assert_eq!(breakdown.institutional, 20);
        assert_eq!(breakdown.hnw, 0);
    }

    #[test]
    fn test_blank_interest_earns_nothing() {
        let weights = ScoringWeights::default();
        let mut profile = create_test_profile();
        profile.interest = "  ".to_string();

        assert_eq!(score_breakdown(&create_test_firm(true), &profile, &weights).interest, 0);
    }

    #[test]
    fn test_total_is_clamped() {
        let breakdown = ScoreBreakdown {
            aum: 90,
            state: 90,
            ..ScoreBreakdown::default()
        };
        assert_eq!(breakdown.total(), 100);
    }
}
