use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Certificate {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Request DTO for `add_certificate` and `update_certificate`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CertificateInput {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    #[validate(url(message = "Invalid URL"))]
    pub url: Option<String>,
}
