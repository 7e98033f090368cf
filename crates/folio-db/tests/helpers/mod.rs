//! Test helpers: a throwaway PostgreSQL per test with the CV schema loaded.
//!
//! Requires Docker for testcontainers (Postgres).

#![allow(dead_code)]

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres;

pub const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Pool plus the container that backs it; dropping it stops the database.
pub struct TestDb {
    pub pool: PgPool,
    pub _container: ContainerAsync<Postgres>,
}

pub async fn setup_test_db() -> TestDb {
    let container = Postgres::default()
        .start()
        .await
        .expect("Failed to start postgres container");
    let host = container.get_host().await.expect("container host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("container port");

    let connection_string = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&connection_string)
        .await
        .expect("Failed to connect to test database");

    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("Failed to load schema");

    TestDb {
        pool,
        _container: container,
    }
}

pub async fn create_user(pool: &PgPool, first_name: &str, email: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (first_name, last_name, email) VALUES ($1, 'Doe', $2) RETURNING id",
    )
    .bind(first_name)
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

pub async fn count(pool: &PgPool, table: &str, user_id: i32) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {} WHERE user_id = $1", table))
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("count rows")
}
