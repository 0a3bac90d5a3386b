use axum::{
    extract::{Extension, Path, State},
    response::Redirect,
    Form,
};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

use super::{back_to_dashboard, parse_note_id, NoteForm};

/// PUT /dashboard/item/:id - replace title/body; silently no-ops on a miss
pub async fn update_note(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, ApiError> {
    let draft = form.into_draft()?;

    if let Some(id) = parse_note_id(&id) {
        state.notes.update(user.id, id, draft).await?;
    }

    Ok(back_to_dashboard())
}
