use actix_web::{web, HttpResponse, Responder};
use std::path::PathBuf;
use validator::Validate;

use crate::core::{distinct_states, Matcher};
use crate::models::{ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, StatesResponse};
use crate::services::{Dataset, DatasetCache};

/// Shown to the caller when no firm survives the filters
pub const NO_MATCHES_MESSAGE: &str = "No matches found. Try adjusting your filters.";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub datasets: DatasetCache,
    pub dataset_path: PathBuf,
    pub matcher: Matcher,
    pub top_n: usize,
}

impl AppState {
    /// Fetch the shared dataset, mapping load failures to a 500 response
    pub(crate) async fn dataset(&self) -> Result<Dataset, HttpResponse> {
        self.datasets.get(&self.dataset_path).await.map_err(|e| {
            tracing::error!("Failed to load dataset {}: {}", self.dataset_path.display(), e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load dataset".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        })
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/states", web::get().to(list_states));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let (status, firms_loaded) = match state.datasets.get(&state.dataset_path).await {
        Ok(dataset) => ("healthy", dataset.len()),
        Err(e) => {
            tracing::warn!("Health check could not load dataset: {}", e);
            ("degraded", 0)
        }
    };

    let cache = state.datasets.stats().await;
    tracing::debug!("Dataset cache: {} entries, ttl {}s", cache.entries, cache.ttl_secs);

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        firms_loaded,
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "minAum": 100,
///   "state": "NY",
///   "performanceFeePreference": true,
///   "clientType": "high-net-worth",
///   "interest": "estate"
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = req.to_profile();
    tracing::info!(
        "Finding matches: min_aum={}, state={:?}, client_type={:?}, performance_fee={}",
        profile.min_aum,
        profile.state,
        profile.client_type,
        profile.performance_fee_preference
    );

    let dataset = match state.dataset().await {
        Ok(dataset) => dataset,
        Err(response) => return response,
    };

    let result = state.matcher.find_matches(&profile, &dataset);

    let message = result.is_empty().then(|| NO_MATCHES_MESSAGE.to_string());
    let response = FindMatchesResponse {
        total_results: result.total_candidates,
        total_firms: result.total_firms,
        matches: result.matches,
        message,
    };

    tracing::info!(
        "Returning {} matches (from {} firms)",
        response.total_results,
        response.total_firms
    );

    HttpResponse::Ok().json(response)
}

/// List the distinct states present in the dataset
///
/// GET /api/v1/states
async fn list_states(state: web::Data<AppState>) -> impl Responder {
    match state.dataset().await {
        Ok(dataset) => HttpResponse::Ok().json(StatesResponse {
            states: distinct_states(dataset.iter()),
        }),
        Err(response) => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            firms_loaded: 3,
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
