use super::ensure_user;
use crate::constants::USER_IMAGE_FIELD;
use crate::forms::FormData;
use crate::state::AppState;
use folio_core::{models::PersonalInfoInput, AppError};
use validator::Validate;

fn parse_input(form: &FormData) -> Result<PersonalInfoInput, AppError> {
    let input = PersonalInfoInput {
        title: form.required_text("title")?,
        phone: form.required_text("phone")?,
        location: form.required_text("location")?,
        website: form.optional_text("website"),
        linkedin: form.optional_text("linkedin"),
        github: form.optional_text("github"),
        twitter: form.optional_text("twitter"),
        description: form.required_text("description")?,
    };
    input.validate()?;
    Ok(input)
}

/// Replaces the whole row; the stored picture survives.
pub(super) async fn upsert_personal_info(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let input = parse_input(form)?;
    ensure_user(state, user_id).await?;
    state.db.personal_info.upsert(user_id, &input).await?;
    Ok(())
}

pub(super) async fn upload_user_image(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let image = state
        .images
        .normalize(USER_IMAGE_FIELD, form.file(USER_IMAGE_FIELD))
        .await?;
    ensure_user(state, user_id).await?;
    state
        .db
        .personal_info
        .set_image(user_id, &image.data_url)
        .await?;
    Ok(())
}
