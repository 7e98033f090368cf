use super::{deleted, ensure_user, found};
use crate::constants::PROJECT_IMAGE_FIELD;
use crate::forms::FormData;
use crate::state::AppState;
use folio_core::{models::ProjectInput, AppError};
use validator::Validate;

const WHAT: &str = "Project";

fn parse_input(form: &FormData) -> Result<ProjectInput, AppError> {
    let input = ProjectInput {
        name: form.required_text("name")?,
        description: form.optional_text("description"),
        url: form.optional_text("url"),
        repo_url: form.optional_text("repo_url"),
        date: form.optional_date("date")?,
    };
    input.validate()?;
    Ok(input)
}

pub(super) async fn add_project(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let input = parse_input(form)?;
    ensure_user(state, user_id).await?;
    state.db.projects.create(user_id, &input).await?;
    Ok(())
}

pub(super) async fn update_project(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let id = form.required_id("id")?;
    let input = parse_input(form)?;
    found(state.db.projects.update(user_id, id, &input).await?, WHAT)?;
    Ok(())
}

pub(super) async fn delete_project(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let id = form.required_id("id")?;
    deleted(state.db.projects.delete(user_id, id).await?, WHAT)
}

/// Upload gate first, then the project id, then the picture itself.
pub(super) async fn upload_project_image(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    if !state.images.is_enabled() {
        return Err(AppError::Forbidden("Uploads are disabled".to_string()));
    }
    let project_id = form
        .required_id("project_id")
        .map_err(|_| AppError::InvalidInput("Invalid project id".to_string()))?;

    let image = state
        .images
        .normalize(PROJECT_IMAGE_FIELD, form.file(PROJECT_IMAGE_FIELD))
        .await?;

    found(
        state
            .db
            .projects
            .set_image(user_id, project_id, &image.data_url)
            .await?,
        WHAT,
    )?;
    Ok(())
}
