use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{filter_firms, summarize};
use crate::models::{AnalyticsQuery, ErrorResponse, FindMatchesRequest};
use crate::routes::matches::AppState;

/// Configure analytics routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/analytics/summary", web::get().to(dataset_summary))
        .route("/analytics/summary", web::post().to(candidate_summary));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Aggregates over the full dataset
///
/// GET /api/v1/analytics/summary?topN=10
async fn dataset_summary(
    state: web::Data<AppState>,
    query: web::Query<AnalyticsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let dataset = match state.dataset().await {
        Ok(dataset) => dataset,
        Err(response) => return response,
    };

    let top_n = query.top_n.unwrap_or(state.top_n);
    HttpResponse::Ok().json(summarize(dataset.iter(), top_n))
}

/// Aggregates over the candidate set of a match request
///
/// POST /api/v1/analytics/summary
async fn candidate_summary(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let dataset = match state.dataset().await {
        Ok(dataset) => dataset,
        Err(response) => return response,
    };

    let profile = req.to_profile();
    let candidates = filter_firms(&dataset, &profile);
    tracing::debug!("Summarizing {} candidates", candidates.len());

    HttpResponse::Ok().json(summarize(candidates, state.top_n))
}
