use crate::core::{MatchError, Matcher};
use crate::models::{ErrorResponse, HealthResponse, RefreshResponse};
use crate::services::DatasetStore;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DatasetStore>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(api_info))
        .route("/health", web::get().to(health_check))
        .route("/match-mentor/{student_id}", web::get().to(match_mentor))
        .route("/refresh", web::post().to(refresh_dataset));
}

/// Root endpoint listing the available operations
async fn api_info() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Mentor Matchmaking Service",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/match-mentor/{student_id}": "Get mentor matches for a student",
            "/health": "Service health",
            "/refresh": "Reload the dataset from disk (POST)",
        }
    }))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.store.load().await.is_ok() {
        "healthy"
    } else {
        "degraded"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match a student with the best mentor
///
/// GET /match-mentor/{student_id}
///
/// Returns the student, the highest-scored mentor, and up to two
/// alternatives. An unknown student id maps to 404; a dataset failure maps
/// to 500.
async fn match_mentor(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let student_id = path.into_inner();

    let dataset = match state.store.load().await {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("Failed to load dataset for {}: {}", student_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load dataset".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    match state
        .matcher
        .find_best_matches(&student_id, &dataset.students, &dataset.mentors)
    {
        Ok(result) => {
            tracing::info!(
                "Matched student {} against {} mentors",
                student_id,
                dataset.mentors.len()
            );
            HttpResponse::Ok().json(result)
        }
        Err(e @ MatchError::StudentNotFound(_)) => {
            tracing::info!("Match request for unknown student {}", student_id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Student not found".to_string(),
                message: e.to_string(),
                status_code: 404,
            })
        }
    }
}

/// Reload the dataset from disk
///
/// POST /refresh
///
/// Replaces the cached snapshot; in-flight requests keep reading the old
/// one. Returns the new collection sizes.
async fn refresh_dataset(state: web::Data<AppState>) -> impl Responder {
    match state.store.refresh().await {
        Ok(dataset) => {
            tracing::info!(
                "Dataset refreshed: {} students, {} mentors",
                dataset.students.len(),
                dataset.mentors.len()
            );
            HttpResponse::Ok().json(RefreshResponse {
                students: dataset.students.len(),
                mentors: dataset.mentors.len(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to refresh dataset: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to refresh dataset".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
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
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
