use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Contact details and headline shown at the top of the CV
///
/// `image` holds the normalized picture as a `data:image/webp;base64,...` URL.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonalInfo {
    pub id: i32,
    pub user_id: i32,
    pub image: Option<String>,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub description: Option<String>,
}

/// Request DTO for `upsert_personal_info`
///
/// The picture is not part of it; it is only changed through
/// `upload_user_image` and survives an upsert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PersonalInfoInput {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 50))]
    pub phone: String,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    #[validate(url(message = "Invalid website URL"))]
    pub website: Option<String>,
    #[validate(url(message = "Invalid LinkedIn URL"))]
    pub linkedin: Option<String>,
    #[validate(url(message = "Invalid GitHub URL"))]
    pub github: Option<String>,
    #[validate(url(message = "Invalid Twitter URL"))]
    pub twitter: Option<String>,
    #[validate(length(min = 1))]
    pub description: String,
}
