use super::{deleted, ensure_user, found};
use crate::forms::FormData;
use crate::state::AppState;
use folio_core::{
    models::{validate_date_range, ExperienceInput, LocationType},
    AppError,
};
use validator::Validate;

const WHAT: &str = "Experience";

fn parse_location_type(form: &FormData) -> Result<Option<LocationType>, AppError> {
    form.optional_text("location_type")
        .map(|value| {
            LocationType::parse(&value).ok_or_else(|| {
                AppError::InvalidInput(
                    "location_type: Must be one of onsite, remote, hybrid".to_string(),
                )
            })
        })
        .transpose()
}

fn parse_input(form: &FormData) -> Result<ExperienceInput, AppError> {
    let skills = form.multi_list("skills");
    let input = ExperienceInput {
        name: form.required_text("name")?,
        title: form.required_text("title")?,
        role: form.required_text("role")?,
        url: form.optional_text("url"),
        start_date: form.required_date("start_date")?,
        end_date: form.optional_date("end_date")?,
        description: form.optional_text("description"),
        responsibilities: form.line_list("responsibilities"),
        achievements: form.line_list("achievements"),
        skills: (!skills.is_empty()).then_some(skills),
        location_type: parse_location_type(form)?,
        location: form.optional_text("location"),
    };
    input.validate()?;
    validate_date_range(input.start_date, input.end_date)?;
    Ok(input)
}

pub(super) async fn add_experience(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let input = parse_input(form)?;
    ensure_user(state, user_id).await?;
    state.db.experience.create(user_id, &input).await?;
    Ok(())
}

pub(super) async fn update_experience(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let id = form.required_id("id")?;
    let input = parse_input(form)?;
    found(state.db.experience.update(user_id, id, &input).await?, WHAT)?;
    Ok(())
}

pub(super) async fn delete_experience(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let id = form.required_id("id")?;
    deleted(state.db.experience.delete(user_id, id).await?, WHAT)
}
