//! Admin actions
//!
//! The admin page posts one multipart form per operation; its `_action`
//! field names the operation. Each action reads and validates its fields
//! from [`FormData`] before it touches the database, so malformed input never
//! costs a query.

mod certificates;
mod education;
mod experience;
mod languages;
mod personal;
mod projects;
mod skills;
mod users;

use crate::forms::FormData;
use crate::state::AppState;
use folio_core::AppError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    UpdateUserBasic,
    UpsertPersonalInfo,
    AddEducation,
    UpdateEducation,
    DeleteEducation,
    AddExperience,
    UpdateExperience,
    DeleteExperience,
    AddCertificate,
    UpdateCertificate,
    DeleteCertificate,
    AddProject,
    UpdateProject,
    DeleteProject,
    UploadProjectImage,
    AddSkill,
    DeleteSkill,
    AddLanguage,
    DeleteLanguage,
    UploadUserImage,
}

impl AdminAction {
    pub const ALL: [AdminAction; 20] = [
        AdminAction::UpdateUserBasic,
        AdminAction::UpsertPersonalInfo,
        AdminAction::AddEducation,
        AdminAction::UpdateEducation,
        AdminAction::DeleteEducation,
        AdminAction::AddExperience,
        AdminAction::UpdateExperience,
        AdminAction::DeleteExperience,
        AdminAction::AddCertificate,
        AdminAction::UpdateCertificate,
        AdminAction::DeleteCertificate,
        AdminAction::AddProject,
        AdminAction::UpdateProject,
        AdminAction::DeleteProject,
        AdminAction::UploadProjectImage,
        AdminAction::AddSkill,
        AdminAction::DeleteSkill,
        AdminAction::AddLanguage,
        AdminAction::DeleteLanguage,
        AdminAction::UploadUserImage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminAction::UpdateUserBasic => "update_user_basic",
            AdminAction::UpsertPersonalInfo => "upsert_personal_info",
            AdminAction::AddEducation => "add_education",
            AdminAction::UpdateEducation => "update_education",
            AdminAction::DeleteEducation => "delete_education",
            AdminAction::AddExperience => "add_experience",
            AdminAction::UpdateExperience => "update_experience",
            AdminAction::DeleteExperience => "delete_experience",
            AdminAction::AddCertificate => "add_certificate",
            AdminAction::UpdateCertificate => "update_certificate",
            AdminAction::DeleteCertificate => "delete_certificate",
            AdminAction::AddProject => "add_project",
            AdminAction::UpdateProject => "update_project",
            AdminAction::DeleteProject => "delete_project",
            AdminAction::UploadProjectImage => "upload_project_image",
            AdminAction::AddSkill => "add_skill",
            AdminAction::DeleteSkill => "delete_skill",
            AdminAction::AddLanguage => "add_language",
            AdminAction::DeleteLanguage => "delete_language",
            AdminAction::UploadUserImage => "upload_user_image",
        }
    }

    /// Exact, case-sensitive match on the wire name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == name)
    }

    pub fn is_upload(&self) -> bool {
        matches!(
            self,
            AdminAction::UploadUserImage | AdminAction::UploadProjectImage
        )
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run one action for `user_id`.
#[tracing::instrument(skip(state, form))]
pub async fn dispatch(
    state: &AppState,
    user_id: i32,
    action: AdminAction,
    form: &FormData,
) -> Result<(), AppError> {
    match action {
        AdminAction::UpdateUserBasic => users::update_user_basic(state, user_id, form).await,
        AdminAction::UpsertPersonalInfo => {
            personal::upsert_personal_info(state, user_id, form).await
        }
        AdminAction::UploadUserImage => personal::upload_user_image(state, user_id, form).await,
        AdminAction::AddEducation => education::add_education(state, user_id, form).await,
        AdminAction::UpdateEducation => education::update_education(state, user_id, form).await,
        AdminAction::DeleteEducation => education::delete_education(state, user_id, form).await,
        AdminAction::AddExperience => experience::add_experience(state, user_id, form).await,
        AdminAction::UpdateExperience => {
            experience::update_experience(state, user_id, form).await
        }
        AdminAction::DeleteExperience => {
            experience::delete_experience(state, user_id, form).await
        }
        AdminAction::AddCertificate => certificates::add_certificate(state, user_id, form).await,
        AdminAction::UpdateCertificate => {
            certificates::update_certificate(state, user_id, form).await
        }
        AdminAction::DeleteCertificate => {
            certificates::delete_certificate(state, user_id, form).await
        }
        AdminAction::AddProject => projects::add_project(state, user_id, form).await,
        AdminAction::UpdateProject => projects::update_project(state, user_id, form).await,
        AdminAction::DeleteProject => projects::delete_project(state, user_id, form).await,
        AdminAction::UploadProjectImage => {
            projects::upload_project_image(state, user_id, form).await
        }
        AdminAction::AddSkill => skills::add_skill(state, user_id, form).await,
        AdminAction::DeleteSkill => skills::delete_skill(state, user_id, form).await,
        AdminAction::AddLanguage => languages::add_language(state, user_id, form).await,
        AdminAction::DeleteLanguage => languages::delete_language(state, user_id, form).await,
    }
}

/// Inserts for an unknown user would surface as a foreign key error; report
/// the missing user instead.
async fn ensure_user(state: &AppState, user_id: i32) -> Result<(), AppError> {
    if state.db.users.exists(user_id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}

fn not_found(what: &str) -> AppError {
    AppError::NotFound(format!("{} not found", what))
}

/// `Some` when the row was touched, 404 otherwise.
fn found<T>(row: Option<T>, what: &str) -> Result<T, AppError> {
    row.ok_or_else(|| not_found(what))
}

fn deleted(affected: bool, what: &str) -> Result<(), AppError> {
    if affected {
        Ok(())
    } else {
        Err(not_found(what))
    }
}
