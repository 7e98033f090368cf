//! Admin form endpoint

use crate::actions::{self, AdminAction};
use crate::constants::ACTION_FIELD;
use crate::error::{HttpAppError, ValidatedPath};
use crate::forms::FormData;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use folio_core::AppError;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub action: &'static str,
    pub ok: bool,
}

/// Run the admin action named by the `_action` field.
#[tracing::instrument(skip(state, multipart))]
pub async fn run_action(
    State(state): State<Arc<AppState>>,
    ValidatedPath(user_id): ValidatedPath<i32>,
    multipart: Multipart,
) -> Result<Json<ActionResponse>, HttpAppError> {
    let form = FormData::from_multipart(multipart).await?;

    let action = form
        .text(ACTION_FIELD)
        .and_then(AdminAction::parse)
        .ok_or_else(|| AppError::BadRequest("Invalid action".to_string()))?;

    actions::dispatch(&state, user_id, action, &form).await?;

    tracing::info!(user_id, action = %action, "Admin action applied");
    Ok(Json(ActionResponse {
        action: action.as_str(),
        ok: true,
    }))
}
