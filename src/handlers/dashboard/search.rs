use axum::{
    extract::{Extension, State},
    Form,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::format::notes_to_api_values;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// GET /dashboard/search - empty result set
pub async fn search_page() -> ApiResponse<Value> {
    ApiResponse::success(json!({ "search_results": [] }))
}

/// POST /dashboard/search
pub async fn search_submit(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Form(form): Form<SearchForm>,
) -> ApiResult<Value> {
    let term = form
        .search_term
        .ok_or_else(|| ApiError::bad_request("searchTerm is required"))?;

    let results = state.notes.search(user.id, &term).await?;

    Ok(ApiResponse::success(json!({
        "search_term": term,
        "search_results": notes_to_api_values(&results),
    })))
}
