// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnalyticsSummary, ClientType, FeeModelSplit, FirmRecord, ScoredMatch, ScoringWeights,
    StateAum, StateCount, StatePreference, UserProfile,
};
pub use requests::{AnalyticsQuery, FindMatchesRequest};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse, StatesResponse};
