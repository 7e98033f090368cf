use folio_core::{
    models::{Experience, ExperienceInput},
    AppError,
};
use sqlx::{PgPool, Postgres};

const COLUMNS: &str = "id, user_id, name, title, role, url, start_date, end_date, description, \
                       responsibilities, achievements, skills, location_type, location";

/// Repository for the `experience` table
#[derive(Clone)]
pub struct ExperienceRepository {
    pool: PgPool,
}

impl ExperienceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Newest first
    #[tracing::instrument(skip(self), fields(db.table = "experience", db.operation = "select"))]
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Experience>, AppError> {
        let rows = sqlx::query_as::<Postgres, Experience>(&format!(
            "SELECT {COLUMNS} FROM experience WHERE user_id = $1 ORDER BY start_date DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    #[tracing::instrument(skip(self, input), fields(db.table = "experience", db.operation = "insert"))]
    pub async fn create(
        &self,
        user_id: i32,
        input: &ExperienceInput,
    ) -> Result<Experience, AppError> {
        let row = sqlx::query_as::<Postgres, Experience>(&format!(
            r#"
            INSERT INTO experience
                (user_id, name, title, role, url, start_date, end_date, description,
                 responsibilities, achievements, skills, location_type, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.title)
        .bind(&input.role)
        .bind(&input.url)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.description)
        .bind(&input.responsibilities)
        .bind(&input.achievements)
        .bind(&input.skills)
        .bind(input.location_type.map(|l| l.as_str()))
        .bind(&input.location)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Returns `None` when no row with this id belongs to the user.
    #[tracing::instrument(skip(self, input), fields(db.table = "experience", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        user_id: i32,
        id: i32,
        input: &ExperienceInput,
    ) -> Result<Option<Experience>, AppError> {
        let row = sqlx::query_as::<Postgres, Experience>(&format!(
            r#"
            UPDATE experience
            SET name = $3, title = $4, role = $5, url = $6, start_date = $7, end_date = $8,
                description = $9, responsibilities = $10, achievements = $11, skills = $12,
                location_type = $13, location = $14
            WHERE id = $1 AND user_id = $2
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.title)
        .bind(&input.role)
        .bind(&input.url)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.description)
        .bind(&input.responsibilities)
        .bind(&input.achievements)
        .bind(&input.skills)
        .bind(input.location_type.map(|l| l.as_str()))
        .bind(&input.location)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "experience", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM experience WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
