use super::found;
use crate::forms::FormData;
use crate::state::AppState;
use folio_core::{models::UpdateUserBasic, AppError};
use validator::Validate;

fn parse_input(form: &FormData) -> Result<UpdateUserBasic, AppError> {
    let input = UpdateUserBasic {
        first_name: form.required_text("first_name")?,
        last_name: form.required_text("last_name")?,
        email: form.required_text("email")?,
    };
    input.validate()?;
    Ok(input)
}

pub(super) async fn update_user_basic(
    state: &AppState,
    user_id: i32,
    form: &FormData,
) -> Result<(), AppError> {
    let input = parse_input(form)?;
    found(state.db.users.update_basic(user_id, &input).await?, "User")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        let mut form = FormData::default();
        form.push_text("first_name", " Ada ");
        form.push_text("last_name", "Lovelace");
        form.push_text("email", "ada@example.com");

        let input = parse_input(&form).unwrap();
        assert_eq!(input.first_name, "Ada");
        assert_eq!(input.email, "ada@example.com");
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let mut form = FormData::default();
        form.push_text("first_name", "Ada");
        form.push_text("last_name", "Lovelace");
        form.push_text("email", "not-an-email");

        assert!(matches!(parse_input(&form), Err(AppError::InvalidInput(_))));
    }
}
