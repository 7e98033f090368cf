use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
}

/// Request DTO for `add_skill`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SkillInput {
    #[validate(length(min = 1, max = 100, message = "Skill must be between 1 and 100 characters"))]
    pub name: String,
}
