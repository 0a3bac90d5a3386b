use axum::{
    extract::{Extension, State},
    response::Redirect,
    Form,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, AuthUser};
use crate::state::AppState;

use super::{back_to_dashboard, NoteForm};

/// GET /dashboard/add - describes the add-note form
pub async fn add_form() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "form": "add",
        "action": "/dashboard/add",
        "method": "POST",
        "fields": ["title", "body"],
    }))
}

/// POST /dashboard/add - owner comes from the token, never from the form
pub async fn add_submit(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, ApiError> {
    let draft = form.into_draft()?;
    state.notes.create(user.id, draft).await?;

    Ok(back_to_dashboard())
}
