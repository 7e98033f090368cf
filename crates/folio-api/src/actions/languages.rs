use super::{deleted, ensure_user};
use crate::forms::FormData;
use crate::state::AppState;
use folio_core::AppError;

/// Links a catalogue language. An unknown `language_id` fails on the
/// foreign key, a second link of the same language on the unique index.
pub(super) async fn add_language(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let language_id = form.required_id("language_id")?;
    ensure_user(state, user_id).await?;
    state.db.languages.add_for_user(user_id, language_id).await?;
    Ok(())
}

/// `id` names the link row.
pub(super) async fn delete_language(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let id = form.required_id("id")?;
    deleted(
        state.db.languages.remove_for_user(user_id, id).await?,
        "Language",
    )
}
