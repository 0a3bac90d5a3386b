use axum::{
    extract::{Extension, Path, State},
    response::Redirect,
};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

use super::{back_to_dashboard, parse_note_id};

/// DELETE /dashboard/item/:id - redirects whether or not anything matched
pub async fn delete_note(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    if let Some(id) = parse_note_id(&id) {
        state.notes.delete(user.id, id).await?;
    }

    Ok(back_to_dashboard())
}
