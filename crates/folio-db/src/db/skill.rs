use folio_core::{models::Skill, AppError};
use sqlx::{PgPool, Postgres};

/// Repository for the `skills` table
#[derive(Clone)]
pub struct SkillRepository {
    pool: PgPool,
}

impl SkillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self), fields(db.table = "skills", db.operation = "select"))]
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Skill>, AppError> {
        let rows = sqlx::query_as::<Postgres, Skill>(
            "SELECT id, user_id, name FROM skills WHERE user_id = $1 ORDER BY name ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    #[tracing::instrument(skip(self), fields(db.table = "skills", db.operation = "insert"))]
    pub async fn create(&self, user_id: i32, name: &str) -> Result<Skill, AppError> {
        let row = sqlx::query_as::<Postgres, Skill>(
            "INSERT INTO skills (user_id, name) VALUES ($1, $2) RETURNING id, user_id, name",
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "skills", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM skills WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
