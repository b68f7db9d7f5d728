use serde::{Deserialize, Serialize};

/// One adviser firm from the disclosure dataset
///
/// Only `firm_name` is guaranteed; every other field may be unknown and
/// unknown values fail whichever clause reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirmRecord {
    #[serde(rename = "firmName")]
    pub firm_name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(rename = "aumMillions", default)]
    pub aum_millions: Option<f64>,
    #[serde(rename = "performanceFee", default)]
    pub performance_fee: Option<bool>,
    #[serde(rename = "clientHnw", default)]
    pub client_hnw: Option<bool>,
    #[serde(rename = "clientInstitutional", default)]
    pub client_institutional: Option<bool>,
    #[serde(default)]
    pub services: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "contactName", default)]
    pub contact_name: Option<String>,
    #[serde(rename = "contactTitle", default)]
    pub contact_title: Option<String>,
    #[serde(rename = "isBonusFirm", default)]
    pub is_bonus_firm: bool,
}

impl FirmRecord {
    /// Minimal record with every optional field unknown
    pub fn named(firm_name: impl Into<String>) -> Self {
        Self {
            firm_name: firm_name.into(),
            state: None,
            aum_millions: None,
            performance_fee: None,
            client_hnw: None,
            client_institutional: None,
            services: None,
            email: None,
            phone: None,
            website: None,
            contact_name: None,
            contact_title: None,
            is_bonus_firm: false,
        }
    }

    /// Helper to get client_hnw as a bool, defaulting to false
    pub fn serves_hnw(&self) -> bool {
        self.client_hnw.unwrap_or(false)
    }

    /// Helper to get client_institutional as a bool, defaulting to false
    pub fn serves_institutional(&self) -> bool {
        self.client_institutional.unwrap_or(false)
    }
}

/// Preferred jurisdiction of the user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum StatePreference {
    #[default]
    Any,
    State(String),
}

impl StatePreference {
    /// Parse the selector value; blank or "Any" means no preference
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            Self::Any
        } else {
            Self::State(trimmed.to_string())
        }
    }

    /// Exact, case-sensitive match; an unknown firm state never matches a specific preference
    pub fn accepts(&self, state: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::State(wanted) => state == Some(wanted.as_str()),
        }
    }
}

impl From<Option<String>> for StatePreference {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::from_input).unwrap_or_default()
    }
}

impl From<StatePreference> for Option<String> {
    fn from(value: StatePreference) -> Self {
        match value {
            StatePreference::Any => None,
            StatePreference::State(state) => Some(state),
        }
    }
}

/// Client segment the user belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientType {
    #[default]
    #[serde(alias = "Any")]
    Any,
    #[serde(alias = "High-net-worth", alias = "hnw")]
    HighNetWorth,
    #[serde(alias = "Institutional")]
    Institutional,
}

/// User preference profile for one matching request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "minAum", default)]
    pub min_aum: f64,
    #[serde(default)]
    pub state: StatePreference,
    #[serde(rename = "performanceFeePreference", default)]
    pub performance_fee_preference: bool,
    #[serde(rename = "clientType", default)]
    pub client_type: ClientType,
    #[serde(default)]
    pub interest: String,
}

impl UserProfile {
    /// True when the interest text carries no requirement
    pub fn interest_is_blank(&self) -> bool {
        self.interest.trim().is_empty()
    }

    /// Case-insensitive containment of the interest in the firm's services
    ///
    /// The untrimmed interest is the needle; unknown services never match.
    pub fn interest_matches(&self, firm: &FirmRecord) -> bool {
        match firm.services.as_deref() {
            Some(services) => services
                .to_lowercase()
                .contains(&self.interest.to_lowercase()),
            None => false,
        }
    }
}

/// Scored match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(flatten)]
    pub firm: FirmRecord,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchedCriteria")]
    pub matched_criteria: Vec<String>,
    #[serde(rename = "limitedData")]
    pub limited_data: bool,
}

/// Points awarded per satisfied scoring clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub aum: u8,
    pub state: u8,
    pub fee_model: u8,
    pub hnw: u8,
    pub institutional: u8,
    pub interest: u8,
}

impl ScoringWeights {
    /// Highest score a single profile can reach
    ///
    /// A profile has one client type, so at most one of the HNW and
    /// institutional clauses can pay out.
    pub fn max_attainable(&self) -> u32 {
        [self.aum, self.state, self.fee_model, self.interest, self.hnw.max(self.institutional)]
            .iter()
            .map(|w| u32::from(*w))
            .sum()
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            aum: 25,
            state: 15,
            fee_model: 15,
            hnw: 20,
            institutional: 20,
            interest: 25,
        }
    }
}

/// Firm count for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateCount {
    pub state: String,
    pub firms: usize,
}

/// Summed AUM for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateAum {
    pub state: String,
    #[serde(rename = "aumMillions")]
    pub aum_millions: f64,
}

/// Split of firms by fee model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeModelSplit {
    #[serde(rename = "performanceFee")]
    pub performance_fee: usize,
    #[serde(rename = "noPerformanceFee")]
    pub no_performance_fee: usize,
    #[serde(rename = "performanceFeePct")]
    pub performance_fee_pct: f64,
    #[serde(rename = "noPerformanceFeePct")]
    pub no_performance_fee_pct: f64,
}

/// Descriptive statistics over a set of firms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(rename = "totalFirms")]
    pub total_firms: usize,
    #[serde(rename = "firmsByState")]
    pub firms_by_state: Vec<StateCount>,
    #[serde(rename = "aumByState")]
    pub aum_by_state: Vec<StateAum>,
    #[serde(rename = "feeModel")]
    pub fee_model: FeeModelSplit,
}
