//! Container-backed app: PostgreSQL in Docker with the CV schema loaded.

use super::{build_test_app, test_config, TestApp};
use axum_test::TestServer;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres;

const SCHEMA: &str = include_str!("../../../folio-db/tests/fixtures/schema.sql");

pub struct DbTestApp {
    pub app: TestApp,
    pub pool: PgPool,
    pub _container: ContainerAsync<Postgres>,
}

impl DbTestApp {
    pub fn client(&self) -> &TestServer {
        self.app.client()
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Setup test app with an isolated database.
pub async fn setup_db_test_app() -> DbTestApp {
    let container = Postgres::default()
        .start()
        .await
        .expect("Failed to start postgres container");
    let host = container.get_host().await.expect("container host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("container port");

    let mut config = test_config();
    config.database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);
    config.db_timeout_seconds = 30;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("Failed to load schema");

    DbTestApp {
        app: build_test_app(config, pool.clone()),
        pool,
        _container: container,
    }
}

pub async fn create_user(pool: &PgPool, email: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (first_name, last_name, email) VALUES ('Ada', 'Lovelace', $1) RETURNING id",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .expect("insert user")
}

pub async fn create_language(pool: &PgPool, language: &str, abbr: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO languages (language, abbr) VALUES ($1, $2) RETURNING id",
    )
    .bind(language)
    .bind(abbr)
    .fetch_one(pool)
    .await
    .expect("insert language")
}

pub async fn create_project(pool: &PgPool, user_id: i32, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO projects (user_id, name) VALUES ($1, $2) RETURNING id",
    )
    .bind(user_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("insert project")
}
