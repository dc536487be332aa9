use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET / - service banner
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Photo API",
            "version": version,
            "endpoints": {
                "health": "/health (public)",
                "public_photos": "GET /api/photo/public (public)",
                "photos": "GET|POST /api/photo (protected)",
                "own_photos": "GET /api/photo/user (protected)",
                "photo": "PUT|DELETE /api/photo/:id (protected)",
            }
        }
    }))
}

/// GET /health - liveness plus a store round trip
pub async fn health(State(state): State<AppState>) -> ApiResult<Value> {
    match state.store.health_check().await {
        Ok(()) => Ok(ApiResponse::success(json!({
            "data": {
                "status": "ok",
                "store": state.store.backend(),
                "timestamp": chrono::Utc::now(),
            }
        }))),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Err(ApiError::service_unavailable("Store unavailable"))
        }
    }
}
