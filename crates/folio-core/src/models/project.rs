use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Portfolio project; `image` is a normalized `data:` URL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub repo_url: Option<String>,
    pub date: Option<NaiveDate>,
    pub image: Option<String>,
}

/// Request DTO for `add_project` and `update_project`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProjectInput {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(url(message = "Invalid URL"))]
    pub url: Option<String>,
    #[validate(url(message = "Invalid repository URL"))]
    pub repo_url: Option<String>,
    pub date: Option<NaiveDate>,
}
