use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{json, Value};

use crate::middleware::ApiResponse;
use crate::state::AppState;

/// GET / - service info and endpoint map
pub async fn root() -> ApiResponse<Value> {
    let version = env!("CARGO_PKG_VERSION");

    ApiResponse::success(json!({
        "name": "Notes Dashboard",
        "version": version,
        "description": "Personal notes with a paginated dashboard and search",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "dashboard": "/dashboard?page=N (protected)",
            "note": "/dashboard/item/:id GET|PUT|DELETE (protected)",
            "add": "/dashboard/add GET|POST (protected)",
            "search": "/dashboard/search GET|POST (protected)",
        }
    }))
}

/// GET /health - pings the note store
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.notes.health_check().await {
        Ok(_) => ApiResponse::success(json!({
            "status": "ok",
            "timestamp": now,
            "database": "ok"
        })),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            ApiResponse::with_status(
                json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                }),
                StatusCode::SERVICE_UNAVAILABLE,
            )
        }
    }
}
