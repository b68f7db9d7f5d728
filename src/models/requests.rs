use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ClientType, StatePreference, UserProfile};

/// Request to find matching advisers
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(range(min = 0.0))]
    #[serde(alias = "min_aum", rename = "minAum", default)]
    pub min_aum: f64,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(alias = "performance_fee_preference", rename = "performanceFeePreference", default)]
    pub performance_fee_preference: bool,
    #[serde(alias = "client_type", rename = "clientType", default)]
    pub client_type: ClientType,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub interest: String,
}

impl FindMatchesRequest {
    /// Build the preference profile used by the matching core
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            min_aum: self.min_aum,
            state: StatePreference::from(self.state.clone()),
            performance_fee_preference: self.performance_fee_preference,
            client_type: self.client_type,
            interest: self.interest.clone(),
        }
    }
}

/// Query parameters for the analytics summary
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyticsQuery {
    #[validate(range(min = 1, max = 100))]
    #[serde(alias = "top_n", rename = "topN")]
    pub top_n: Option<usize>,
}
