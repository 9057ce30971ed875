use crate::app_state::AppState;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// `GET /health` - readiness, pings the store
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    match state.store.health_check().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "service": "pitcher-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "unhealthy",
                "service": "pitcher-service"
            }))
        }
    }
}

/// `GET /health/live`
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "alive" }))
}
