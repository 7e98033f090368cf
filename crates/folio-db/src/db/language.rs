use folio_core::{
    models::{Language, UserLanguage},
    AppError,
};
use sqlx::{PgPool, Postgres};

/// Repository for the `languages` catalogue and the `user_languages` link table
#[derive(Clone)]
pub struct LanguageRepository {
    pool: PgPool,
}

impl LanguageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self), fields(db.table = "languages", db.operation = "select"))]
    pub async fn list_catalogue(&self) -> Result<Vec<Language>, AppError> {
        let rows = sqlx::query_as::<Postgres, Language>(
            "SELECT id, language, abbr FROM languages ORDER BY language ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    #[tracing::instrument(skip(self), fields(db.table = "user_languages", db.operation = "select"))]
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<UserLanguage>, AppError> {
        let rows = sqlx::query_as::<Postgres, UserLanguage>(
            r#"
            SELECT ul.id, ul.user_id, ul.language_id, l.language, l.abbr
            FROM user_languages ul
            JOIN languages l ON l.id = ul.language_id
            WHERE ul.user_id = $1
            ORDER BY l.language ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Link a catalogue language to the user.
    ///
    /// A pair that already exists is a `Conflict`; an unknown language id is
    /// `InvalidInput` (foreign key).
    #[tracing::instrument(skip(self), fields(db.table = "user_languages", db.operation = "insert"))]
    pub async fn add_for_user(
        &self,
        user_id: i32,
        language_id: i32,
    ) -> Result<UserLanguage, AppError> {
        let row = sqlx::query_as::<Postgres, UserLanguage>(
            r#"
            WITH inserted AS (
                INSERT INTO user_languages (user_id, language_id)
                VALUES ($1, $2)
                RETURNING id, user_id, language_id
            )
            SELECT i.id, i.user_id, i.language_id, l.language, l.abbr
            FROM inserted i
            JOIN languages l ON l.id = i.language_id
            "#,
        )
        .bind(user_id)
        .bind(language_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// `id` is the link row id, not the language id.
    #[tracing::instrument(skip(self), fields(db.table = "user_languages", db.operation = "delete", db.record_id = %id))]
    pub async fn remove_for_user(&self, user_id: i32, id: i32) -> Result<bool, AppError> {
        let rows_affected =
            sqlx::query("DELETE FROM user_languages WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .execute(&self.pool)
                .await?
                .rows_affected();

        Ok(rows_affected > 0)
    }
}
