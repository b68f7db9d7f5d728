use crate::models::{ClientType, FirmRecord, UserProfile};

/// Firm AUM meets the user's minimum; unknown AUM never does
#[inline]
pub fn matches_min_aum(firm: &FirmRecord, profile: &UserProfile) -> bool {
    firm.aum_millions
        .map(|aum| aum >= profile.min_aum)
        .unwrap_or(false)
}

/// Firm is in the preferred state, or the user has no preference
#[inline]
pub fn matches_state(firm: &FirmRecord, profile: &UserProfile) -> bool {
    profile.state.accepts(firm.state.as_deref())
}

/// Performance fees are a hard requirement only when the user asks for them
///
/// This is one-directional: a `false` preference admits every firm. The
/// scorer uses symmetric agreement instead.
#[inline]
pub fn matches_fee_requirement(firm: &FirmRecord, profile: &UserProfile) -> bool {
    !profile.performance_fee_preference || firm.performance_fee == Some(true)
}

/// Firm serves the user's client segment
#[inline]
pub fn matches_client_type(firm: &FirmRecord, profile: &UserProfile) -> bool {
    match profile.client_type {
        ClientType::Any => true,
        ClientType::HighNetWorth => firm.serves_hnw(),
        ClientType::Institutional => firm.serves_institutional(),
    }
}

/// Firm's services mention the user's interest; blank interest admits all
#[inline]
pub fn matches_interest(firm: &FirmRecord, profile: &UserProfile) -> bool {
    profile.interest_is_blank() || profile.interest_matches(firm)
}

/// Admission predicate: every hard constraint must hold
#[inline]
pub fn passes_filters(firm: &FirmRecord, profile: &UserProfile) -> bool {
    matches_min_aum(firm, profile)
        && matches_state(firm, profile)
        && matches_fee_requirement(firm, profile)
        && matches_client_type(firm, profile)
        && matches_interest(firm, profile)
}

/// Order-preserving candidate subset of `firms` admitted under `profile`
pub fn filter_firms<'a>(firms: &'a [FirmRecord], profile: &UserProfile) -> Vec<&'a FirmRecord> {
    firms
        .iter()
        .filter(|firm| passes_filters(firm, profile))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatePreference;

    fn create_test_firm() -> FirmRecord {
        FirmRecord {
            state: Some("NY".to_string()),
            aum_millions: Some(150.0),
            performance_fee: Some(true),
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
    fn test_all_clauses_pass() {
        assert!(passes_filters(&create_test_firm(), &create_test_profile()));
    }

    #[test]
    fn test_aum_below_minimum() {
        let mut profile = create_test_profile();
        profile.min_aum = 200.0;
        assert!(!passes_filters(&create_test_firm(), &profile));
    }

    #[test]
    fn test_aum_equal_to_minimum_admits() {
        let mut profile = create_test_profile();
        profile.min_aum = 150.0;
        assert!(matches_min_aum(&create_test_firm(), &profile));
    }

    #[test]
    fn test_unknown_aum_fails() {
        let mut firm = create_test_firm();
        firm.aum_millions = None;
        let mut profile = create_test_profile();
        profile.min_aum = 0.0;
        assert!(!matches_min_aum(&firm, &profile));
    }

    #[test]
    fn test_state_is_case_sensitive() {
        let mut profile = create_test_profile();
        profile.state = StatePreference::State("ny".to_string());
        assert!(!matches_state(&create_test_firm(), &profile));
    }

    #[test]
    fn test_unknown_state_only_matches_any() {
        let mut firm = create_test_firm();
        firm.state = None;
        let mut profile = create_test_profile();
        assert!(!matches_state(&firm, &profile));
        profile.state = StatePreference::Any;
        assert!(matches_state(&firm, &profile));
    }

    #[test]
    fn test_fee_requirement_is_one_directional() {
        let mut firm = create_test_firm();
        firm.performance_fee = Some(false);
        let mut profile = create_test_profile();
        assert!(!matches_fee_requirement(&firm, &profile));

        profile.performance_fee_preference = false;
        assert!(matches_fee_requirement(&firm, &profile));

        firm.performance_fee = None;
        assert!(matches_fee_requirement(&firm, &profile));
    }

    #[test]
    fn test_client_type_clause() {
        let firm = create_test_firm();
        let mut profile = create_test_profile();
        assert!(matches_client_type(&firm, &profile));

        profile.client_type = ClientType::Institutional;
        assert!(!matches_client_type(&firm, &profile));

        profile.client_type = ClientType::Any;
        assert!(matches_client_type(&FirmRecord::named("Bare"), &profile));
    }

    #[test]
    fn test_interest_is_case_insensitive() {
        let mut profile = create_test_profile();
        profile.interest = "ESTATE Planning".to_string();
        assert!(matches_interest(&create_test_firm(), &profile));
    }

    #[test]
    fn test_blank_interest_admits_missing_services() {
        let mut firm = create_test_firm();
        firm.services = None;
        let mut profile = create_test_profile();
        profile.interest = "   ".to_string();
        assert!(matches_interest(&firm, &profile));

        profile.interest = "crypto".to_string();
        assert!(!matches_interest(&firm, &profile));
    }

    #[test]
    fn test_filter_preserves_order() {
        let firms: Vec<FirmRecord> = ["A", "B", "C"]
            .iter()
            .map(|name| FirmRecord {
                firm_name: name.to_string(),
                ..create_test_firm()
            })
            .collect();
        let mut excluded = firms.clone();
        excluded[1].state = Some("CA".to_string());

        let candidates = filter_firms(&excluded, &create_test_profile());
        let names: Vec<&str> = candidates.iter().map(|f| f.firm_name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }
}
