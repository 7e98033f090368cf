use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Entry of the language catalogue
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Language {
    pub id: i32,
    pub language: String,
    /// Short code, e.g. `en`
    pub abbr: String,
}

/// A language spoken by a user, joined with the catalogue entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserLanguage {
    pub id: i32,
    pub user_id: i32,
    pub language_id: i32,
    pub language: String,
    pub abbr: String,
}
