use folio_core::{
    models::{Certificate, CertificateInput},
    AppError,
};
use sqlx::{PgPool, Postgres};

/// Repository for the `certificates` table
#[derive(Clone)]
pub struct CertificateRepository {
    pool: PgPool,
}

impl CertificateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self), fields(db.table = "certificates", db.operation = "select"))]
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Certificate>, AppError> {
        let rows = sqlx::query_as::<Postgres, Certificate>(
            r#"
            SELECT id, user_id, name, date, description, url
            FROM certificates
            WHERE user_id = $1
            ORDER BY date DESC NULLS LAST, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Names are unique; a duplicate surfaces as `AppError::Conflict`.
    #[tracing::instrument(skip(self, input), fields(db.table = "certificates", db.operation = "insert"))]
    pub async fn create(
        &self,
        user_id: i32,
        input: &CertificateInput,
    ) -> Result<Certificate, AppError> {
        let row = sqlx::query_as::<Postgres, Certificate>(
            r#"
            INSERT INTO certificates (user_id, name, date, description, url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, date, description, url
            "#,
        )
        .bind(user_id)
        .bind(&input.name)
        .bind(input.date)
        .bind(&input.description)
        .bind(&input.url)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self, input), fields(db.table = "certificates", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        user_id: i32,
        id: i32,
        input: &CertificateInput,
    ) -> Result<Option<Certificate>, AppError> {
        let row = sqlx::query_as::<Postgres, Certificate>(
            r#"
            UPDATE certificates
            SET name = $3, date = $4, description = $5, url = $6
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, date, description, url
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&input.name)
        .bind(input.date)
        .bind(&input.description)
        .bind(&input.url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "certificates", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM certificates WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
