use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Where the work was done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Onsite,
    Remote,
    Hybrid,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Onsite => "onsite",
            LocationType::Remote => "remote",
            LocationType::Hybrid => "hybrid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace(['-', ' '], "").as_str() {
            "onsite" => Some(LocationType::Onsite),
            "remote" => Some(LocationType::Remote),
            "hybrid" => Some(LocationType::Hybrid),
            _ => None,
        }
    }
}

/// One job on the CV
///
/// The list columns are `TEXT[]`; `None` and an empty list mean the same.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Experience {
    pub id: i32,
    pub user_id: i32,
    /// Company name
    pub name: String,
    pub title: String,
    pub role: String,
    pub url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub responsibilities: Option<Vec<String>>,
    pub achievements: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub location_type: Option<String>,
    pub location: Option<String>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }
}

/// Request DTO for `add_experience` and `update_experience`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExperienceInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub role: String,
    #[validate(url(message = "Invalid URL"))]
    pub url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub responsibilities: Option<Vec<String>>,
    pub achievements: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub location_type: Option<LocationType>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
}
