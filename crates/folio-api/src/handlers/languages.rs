use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use folio_core::models::Language;
use std::sync::Arc;

/// Catalogue the admin page picks languages from
pub async fn list_languages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Language>>, HttpAppError> {
    Ok(Json(state.db.languages.list_catalogue().await?))
}
