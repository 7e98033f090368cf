use folio_core::{
    models::{Project, ProjectInput},
    AppError,
};
use sqlx::{PgPool, Postgres};

/// Repository for the `projects` table
#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self), fields(db.table = "projects", db.operation = "select"))]
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query_as::<Postgres, Project>(
            r#"
            SELECT id, user_id, name, description, url, repo_url, date, image
            FROM projects
            WHERE user_id = $1
            ORDER BY date DESC NULLS LAST, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    #[tracing::instrument(skip(self, input), fields(db.table = "projects", db.operation = "insert"))]
    pub async fn create(&self, user_id: i32, input: &ProjectInput) -> Result<Project, AppError> {
        let row = sqlx::query_as::<Postgres, Project>(
            r#"
            INSERT INTO projects (user_id, name, description, url, repo_url, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, name, description, url, repo_url, date, image
            "#,
        )
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.url)
        .bind(&input.repo_url)
        .bind(input.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Leaves the picture untouched.
    #[tracing::instrument(skip(self, input), fields(db.table = "projects", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        user_id: i32,
        id: i32,
        input: &ProjectInput,
    ) -> Result<Option<Project>, AppError> {
        let row = sqlx::query_as::<Postgres, Project>(
            r#"
            UPDATE projects
            SET name = $3, description = $4, url = $5, repo_url = $6, date = $7
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, description, url, repo_url, date, image
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.url)
        .bind(&input.repo_url)
        .bind(input.date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self, data_url), fields(db.table = "projects", db.operation = "update", db.record_id = %id, image.len = data_url.len()))]
    pub async fn set_image(
        &self,
        user_id: i32,
        id: i32,
        data_url: &str,
    ) -> Result<Option<Project>, AppError> {
        let row = sqlx::query_as::<Postgres, Project>(
            r#"
            UPDATE projects
            SET image = $3
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, description, url, repo_url, date, image
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(data_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "projects", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
