use super::{deleted, ensure_user, found};
use crate::forms::FormData;
use crate::state::AppState;
use folio_core::{models::CertificateInput, AppError};
use validator::Validate;

const WHAT: &str = "Certificate";

fn parse_input(form: &FormData) -> Result<CertificateInput, AppError> {
    let input = CertificateInput {
        name: form.required_text("name")?,
        date: form.optional_date("date")?,
        description: form.optional_text("description"),
        url: form.optional_text("url"),
    };
    input.validate()?;
    Ok(input)
}

pub(super) async fn add_certificate(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let input = parse_input(form)?;
    ensure_user(state, user_id).await?;
    state.db.certificates.create(user_id, &input).await?;
    Ok(())
}

pub(super) async fn update_certificate(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let id = form.required_id("id")?;
    let input = parse_input(form)?;
    found(state.db.certificates.update(user_id, id, &input).await?, WHAT)?;
    Ok(())
}

pub(super) async fn delete_certificate(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let id = form.required_id("id")?;
    deleted(state.db.certificates.delete(user_id, id).await?, WHAT)
}
