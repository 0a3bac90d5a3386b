use axum::extract::{Extension, Query, State};
use serde::Deserialize;
use serde_json::Value;

use crate::api::format::dashboard_to_api_value;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::note_service::parse_page;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// 1-based page; anything unparseable falls back to 1
    pub page: Option<String>,
}

/// GET /dashboard - paginated previews of the user's notes
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Value> {
    let page = parse_page(query.page.as_deref());
    let listing = state.notes.dashboard(user.id, page).await?;

    Ok(ApiResponse::success(dashboard_to_api_value(&user.name, &listing)))
}
