use axum::extract::{Extension, Path, State};
use serde_json::Value;

use crate::api::format::note_to_api_value;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

use super::parse_note_id;

/// GET /dashboard/item/:id - full note, 404 unless owned by the user
pub async fn view_note(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_note_id(&id).ok_or_else(ApiError::note_not_found)?;

    match state.notes.view(user.id, id).await? {
        Some(note) => Ok(ApiResponse::success(note_to_api_value(&note))),
        None => Err(ApiError::note_not_found()),
    }
}
