use actix_web::{web, HttpResponse, Responder};

use crate::models::{HealthResponse, MessageResponse, RecommendationsResponse};
use crate::routes::{errors::ApiError, AppState};
use crate::services::{dummy_dataset, recommend_for_client};

/// Configure recommendation, seeding and status routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(welcome))
        .route("/health", web::get().to(health_check))
        .route("/recommend/{client_id}", web::get().to(recommend))
        .route("/populate-dummy-data/", web::get().to(populate_dummy_data));
}

async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::new(
        "Welcome to the SQLite-based recommender system API!",
    ))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend providers for a client
///
/// GET /recommend/{client_id}
///
/// Response body:
/// ```json
/// {
///   "recommendations": [
///     {"id": 1, "name": "Dr. Alice", "specialization": "Psychologist",
///      "location": "New York", "gender": "Female", "language": "English",
///      "cultural_background": "American", "score": 60.0}
///   ]
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let client_id = path.into_inner();

    tracing::info!("Recommending providers for client {}", client_id);

    let recommendations = recommend_for_client(&state.store, &state.recommender, client_id)
        .await
        .map_err(|e| {
            tracing::warn!("Recommendation for client {} failed: {}", client_id, e);
            e
        })?;

    tracing::info!(
        "Returning {} recommendations for client {}",
        recommendations.len(),
        client_id
    );

    Ok(HttpResponse::Ok().json(RecommendationsResponse { recommendations }))
}

/// Insert the demo dataset
///
/// GET /populate-dummy-data/
async fn populate_dummy_data(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    state.store.seed(&dummy_dataset()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Dummy data added successfully.")))
}
