use folio_core::{
    models::{PersonalInfo, PersonalInfoInput},
    AppError,
};
use sqlx::{PgPool, Postgres};

const COLUMNS: &str =
    "id, user_id, image, title, phone, location, website, linkedin, github, twitter, description";

/// Repository for the `personal_info` table (at most one row per user)
#[derive(Clone)]
pub struct PersonalInfoRepository {
    pool: PgPool,
}

impl PersonalInfoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self), fields(db.table = "personal_info", db.operation = "select"))]
    pub async fn get_for_user(&self, user_id: i32) -> Result<Option<PersonalInfo>, AppError> {
        let info = sqlx::query_as::<Postgres, PersonalInfo>(&format!(
            "SELECT {COLUMNS} FROM personal_info WHERE user_id = $1 ORDER BY id DESC LIMIT 1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(info)
    }

    /// Replace the user's personal info in one transaction.
    ///
    /// The stored picture is carried over to the new row.
    #[tracing::instrument(skip(self, input), fields(db.table = "personal_info", db.operation = "upsert"))]
    pub async fn upsert(
        &self,
        user_id: i32,
        input: &PersonalInfoInput,
    ) -> Result<PersonalInfo, AppError> {
        let mut tx = self.pool.begin().await?;

        let image = sqlx::query_scalar::<Postgres, Option<String>>(
            "SELECT image FROM personal_info WHERE user_id = $1 ORDER BY id DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .flatten();

        sqlx::query("DELETE FROM personal_info WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let info = sqlx::query_as::<Postgres, PersonalInfo>(&format!(
            r#"
            INSERT INTO personal_info
                (user_id, image, title, phone, location, website, linkedin, github, twitter, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(image)
        .bind(&input.title)
        .bind(&input.phone)
        .bind(&input.location)
        .bind(&input.website)
        .bind(&input.linkedin)
        .bind(&input.github)
        .bind(&input.twitter)
        .bind(&input.description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(user_id = user_id, "Personal info replaced");
        Ok(info)
    }

    /// Store a normalized picture, creating the row if the user has none.
    #[tracing::instrument(skip(self, data_url), fields(db.table = "personal_info", db.operation = "update", image.len = data_url.len()))]
    pub async fn set_image(&self, user_id: i32, data_url: &str) -> Result<PersonalInfo, AppError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<Postgres, PersonalInfo>(&format!(
            "UPDATE personal_info SET image = $2 WHERE user_id = $1 RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(data_url)
        .fetch_optional(&mut *tx)
        .await?;

        let info = match updated {
            Some(info) => info,
            None => {
                sqlx::query_as::<Postgres, PersonalInfo>(&format!(
                    "INSERT INTO personal_info (user_id, image) VALUES ($1, $2) RETURNING {COLUMNS}"
                ))
                .bind(user_id)
                .bind(data_url)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;
        Ok(info)
    }
}
