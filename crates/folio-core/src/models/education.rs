use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Education {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub url: Option<String>,
    pub degree: String,
    pub field: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// Request DTO for `add_education` and `update_education`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EducationInput {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(url(message = "Invalid URL"))]
    pub url: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Degree must be between 1 and 255 characters"))]
    pub degree: String,
    #[validate(length(max = 255))]
    pub field: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}
