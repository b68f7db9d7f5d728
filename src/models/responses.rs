use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredMatch;

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<ScoredMatch>,
    pub total_results: usize,
    pub total_firms: usize,
    pub message: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub firms_loaded: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Distinct states available for filtering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatesResponse {
    pub states: Vec<String>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
