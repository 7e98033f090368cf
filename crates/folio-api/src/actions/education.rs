use super::{deleted, ensure_user, found};
use crate::forms::FormData;
use crate::state::AppState;
use folio_core::{
    models::{validate_date_range, EducationInput},
    AppError,
};
use validator::Validate;

const WHAT: &str = "Education";

fn parse_input(form: &FormData) -> Result<EducationInput, AppError> {
    let input = EducationInput {
        name: form.required_text("name")?,
        url: form.optional_text("url"),
        degree: form.required_text("degree")?,
        field: form.optional_text("field"),
        start_date: form.required_date("start_date")?,
        end_date: form.optional_date("end_date")?,
    };
    input.validate()?;
    validate_date_range(input.start_date, input.end_date)?;
    Ok(input)
}

pub(super) async fn add_education(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let input = parse_input(form)?;
    ensure_user(state, user_id).await?;
    state.db.education.create(user_id, &input).await?;
    Ok(())
}

pub(super) async fn update_education(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let id = form.required_id("id")?;
    let input = parse_input(form)?;
    found(state.db.education.update(user_id, id, &input).await?, WHAT)?;
    Ok(())
}

pub(super) async fn delete_education(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let id = form.required_id("id")?;
    deleted(state.db.education.delete(user_id, id).await?, WHAT)
}
