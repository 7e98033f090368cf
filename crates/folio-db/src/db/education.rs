use folio_core::{
    models::{Education, EducationInput},
    AppError,
};
use sqlx::{PgPool, Postgres};

/// Repository for the `education` table
#[derive(Clone)]
pub struct EducationRepository {
    pool: PgPool,
}

impl EducationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Newest first
    #[tracing::instrument(skip(self), fields(db.table = "education", db.operation = "select"))]
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Education>, AppError> {
        let rows = sqlx::query_as::<Postgres, Education>(
            r#"
            SELECT id, user_id, name, url, degree, field, start_date, end_date
            FROM education
            WHERE user_id = $1
            ORDER BY start_date DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    #[tracing::instrument(skip(self, input), fields(db.table = "education", db.operation = "insert"))]
    pub async fn create(&self, user_id: i32, input: &EducationInput) -> Result<Education, AppError> {
        let row = sqlx::query_as::<Postgres, Education>(
            r#"
            INSERT INTO education (user_id, name, url, degree, field, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, name, url, degree, field, start_date, end_date
            "#,
        )
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.url)
        .bind(&input.degree)
        .bind(&input.field)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Returns `None` when no row with this id belongs to the user.
    #[tracing::instrument(skip(self, input), fields(db.table = "education", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        user_id: i32,
        id: i32,
        input: &EducationInput,
    ) -> Result<Option<Education>, AppError> {
        let row = sqlx::query_as::<Postgres, Education>(
            r#"
            UPDATE education
            SET name = $3, url = $4, degree = $5, field = $6, start_date = $7, end_date = $8
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, url, degree, field, start_date, end_date
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.url)
        .bind(&input.degree)
        .bind(&input.field)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "education", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM education WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
