use super::{deleted, ensure_user};
use crate::forms::FormData;
use crate::state::AppState;
use folio_core::{models::SkillInput, AppError};
use validator::Validate;

fn parse_input(form: &FormData) -> Result<SkillInput, AppError> {
    let input = SkillInput {
        name: form.required_text("name")?,
    };
    input.validate()?;
    Ok(input)
}

/// A duplicate name is a `Conflict` raised by the unique index.
pub(super) async fn add_skill(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let input = parse_input(form)?;
    ensure_user(state, user_id).await?;
    state.db.skills.create(user_id, &input.name).await?;
    Ok(())
}

pub(super) async fn delete_skill(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let id = form.required_id("id")?;
    deleted(state.db.skills.delete(user_id, id).await?, "Skill")
}
