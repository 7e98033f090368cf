use crate::error::{HttpAppError, ValidatedPath};
use crate::state::AppState;
use axum::{extract::State, Json};
use folio_core::{models::Cv, AppError};
use std::sync::Arc;

/// The complete CV of one user
#[tracing::instrument(skip(state))]
pub async fn get_cv(
    State(state): State<Arc<AppState>>,
    ValidatedPath(user_id): ValidatedPath<i32>,
) -> Result<Json<Cv>, HttpAppError> {
    let cv = state
        .db
        .cv
        .get_cv(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(cv))
}
