//! End-to-end admin and read API tests against a real database.
//!
//! Run with: `cargo test -p folio-api --test persistence_test`
//! Requires Docker for testcontainers (Postgres).

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestResponse;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use folio_processing::compression::{probe_webp, read_resolution};
use helpers::database::{create_language, create_project, create_user, setup_db_test_app};
use helpers::{admin_path, api_path, fixtures};
use serde_json::Value;

const DATA_URL_PREFIX: &str = "data:image/webp;base64,";

fn action(name: &str) -> MultipartForm {
    MultipartForm::new().add_text("_action", name)
}

fn image_part(data: Vec<u8>, file_name: &str, mime: &str) -> Part {
    Part::bytes(bytes::Bytes::from(data))
        .file_name(file_name)
        .mime_type(mime)
}

fn assert_ok(response: &TestResponse, name: &str) {
    assert_eq!(response.status_code(), 200, "{}", response.text());
    let body: Value = response.json();
    assert_eq!(body["action"], name);
    assert_eq!(body["ok"], true);
}

fn assert_error(response: &TestResponse, status: u16, message: &str) {
    assert_eq!(response.status_code(), status, "{}", response.text());
    let body: Value = response.json();
    assert_eq!(body["error"], message);
}

/// Decoded WebP payload of a stored data URL
fn webp_payload(data_url: &str) -> Vec<u8> {
    let payload = data_url
        .strip_prefix(DATA_URL_PREFIX)
        .expect("stored image is a WebP data URL");
    STANDARD.decode(payload).expect("valid base64")
}

#[tokio::test]
async fn test_readiness_with_database() {
    let app = setup_db_test_app().await;

    let response = app.client().get("/ready").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_admin_actions_build_a_cv() {
    let app = setup_db_test_app().await;
    let client = app.client();
    let user = create_user(app.pool(), "ada@example.com").await;
    let french = create_language(app.pool(), "French", "fr").await;

    let forms = [
        (
            "update_user_basic",
            action("update_user_basic")
                .add_text("first_name", "Grace")
                .add_text("last_name", "Hopper")
                .add_text("email", "grace@example.com"),
        ),
        (
            "upsert_personal_info",
            action("upsert_personal_info")
                .add_text("title", "Backend Engineer")
                .add_text("phone", "+32 470 00 00 00")
                .add_text("location", "Brussels")
                .add_text("github", "https://github.com/folio")
                .add_text("description", "Builds things."),
        ),
        (
            "add_education",
            action("add_education")
                .add_text("name", "KU Leuven")
                .add_text("degree", "MSc")
                .add_text("start_date", "2015-09-01")
                .add_text("end_date", "2017-06-30"),
        ),
        (
            "add_experience",
            action("add_experience")
                .add_text("name", "Old Co")
                .add_text("title", "Engineer")
                .add_text("role", "Backend")
                .add_text("start_date", "2017-09-01")
                .add_text("end_date", "2020-12-31"),
        ),
        (
            "add_experience",
            action("add_experience")
                .add_text("name", "Acme")
                .add_text("title", "Senior Engineer")
                .add_text("role", "Platform")
                .add_text("start_date", "2021-01-01")
                .add_text("responsibilities", "Ship it\nReview code\n")
                .add_text("skills", "Rust")
                .add_text("skills", "SQL")
                .add_text("location_type", "Remote"),
        ),
        (
            "add_certificate",
            action("add_certificate")
                .add_text("name", "CKA")
                .add_text("date", "2022-01-15"),
        ),
        (
            "add_project",
            action("add_project")
                .add_text("name", "folio")
                .add_text("repo_url", "https://github.com/folio/folio"),
        ),
        ("add_skill", action("add_skill").add_text("name", "Rust")),
        (
            "add_language",
            action("add_language").add_text("language_id", french.to_string()),
        ),
    ];

    for (name, form) in forms {
        let response = client.post(&admin_path(user)).multipart(form).await;
        assert_ok(&response, name);
    }

    let response = client.get(&api_path(&format!("/users/{}/cv", user))).await;
    assert_eq!(response.status_code(), 200);
    let cv: Value = response.json();

    assert_eq!(cv["basics"]["first_name"], "Grace");
    assert_eq!(cv["basics"]["email"], "grace@example.com");
    assert_eq!(cv["basics"]["personal_info"]["title"], "Backend Engineer");
    assert_eq!(cv["basics"]["personal_info"]["website"], Value::Null);

    let work = cv["work"].as_array().unwrap();
    assert_eq!(work.len(), 2);
    assert_eq!(work[0]["name"], "Acme");
    assert_eq!(work[0]["end_date"], Value::Null);
    assert_eq!(work[0]["responsibilities"], serde_json::json!(["Ship it", "Review code"]));
    assert_eq!(work[0]["skills"], serde_json::json!(["Rust", "SQL"]));
    assert_eq!(work[0]["location_type"], "remote");
    assert_eq!(work[1]["name"], "Old Co");

    assert_eq!(cv["education"][0]["degree"], "MSc");
    assert_eq!(cv["certificates"][0]["date"], "2022-01-15");
    assert_eq!(cv["projects"][0]["repo_url"], "https://github.com/folio/folio");
    assert_eq!(cv["skills"][0]["name"], "Rust");
    assert_eq!(cv["languages"][0]["language"], "French");
}

#[tokio::test]
async fn test_user_image_upload_is_stored_as_webp() {
    let app = setup_db_test_app().await;
    let client = app.client();
    let user = create_user(app.pool(), "ada@example.com").await;

    let form = action("upload_user_image")
        .add_part("image_file", image_part(fixtures::jpeg(2000, 1000), "me.jpg", "image/jpeg"));
    let response = client.post(&admin_path(user)).multipart(form).await;
    assert_ok(&response, "upload_user_image");

    let stored: String =
        sqlx::query_scalar("SELECT image FROM personal_info WHERE user_id = $1")
            .bind(user)
            .fetch_one(app.pool())
            .await
            .unwrap();
    let payload = webp_payload(&stored);
    assert_eq!(probe_webp(&payload), Some((800, 400)));
    assert_eq!(read_resolution(&payload).map(|r| (r.x, r.y)), Some((300, 300)));

    // Editing personal info keeps the picture
    let form = action("upsert_personal_info")
        .add_text("title", "Engineer")
        .add_text("phone", "+32 470 00 00 00")
        .add_text("location", "Brussels")
        .add_text("description", "Builds things.");
    assert_ok(
        &client.post(&admin_path(user)).multipart(form).await,
        "upsert_personal_info",
    );

    let cv: Value = client
        .get(&api_path(&format!("/users/{}/cv", user)))
        .await
        .json();
    assert_eq!(cv["basics"]["personal_info"]["title"], "Engineer");
    assert_eq!(cv["basics"]["personal_info"]["image"], stored.as_str());
}

#[tokio::test]
async fn test_project_image_upload() {
    let app = setup_db_test_app().await;
    let client = app.client();
    let owner = create_user(app.pool(), "ada@example.com").await;
    let intruder = create_user(app.pool(), "eve@example.com").await;
    let project = create_project(app.pool(), owner, "folio").await;

    let form = || {
        action("upload_project_image")
            .add_text("project_id", project.to_string())
            .add_part(
                "project_image_file",
                image_part(fixtures::png(120, 60), "shot.png", "image/png"),
            )
    };

    let response = client.post(&admin_path(intruder)).multipart(form()).await;
    assert_error(&response, 404, "Project not found");

    let response = client.post(&admin_path(owner)).multipart(form()).await;
    assert_ok(&response, "upload_project_image");

    let stored: Option<String> = sqlx::query_scalar("SELECT image FROM projects WHERE id = $1")
        .bind(project)
        .fetch_one(app.pool())
        .await
        .unwrap();
    let stored = stored.expect("project image stored");
    assert!(stored.starts_with(DATA_URL_PREFIX));
    assert_eq!(probe_webp(&webp_payload(&stored)), Some((120, 60)));
}

#[tokio::test]
async fn test_rows_of_other_users_are_not_found() {
    let app = setup_db_test_app().await;
    let client = app.client();
    let owner = create_user(app.pool(), "ada@example.com").await;
    let intruder = create_user(app.pool(), "eve@example.com").await;

    let form = action("add_education")
        .add_text("name", "KU Leuven")
        .add_text("degree", "MSc")
        .add_text("start_date", "2015-09-01");
    assert_ok(
        &client.post(&admin_path(owner)).multipart(form).await,
        "add_education",
    );
    let id: i32 = sqlx::query_scalar("SELECT id FROM education WHERE user_id = $1")
        .bind(owner)
        .fetch_one(app.pool())
        .await
        .unwrap();

    let form = action("update_education")
        .add_text("id", id.to_string())
        .add_text("name", "Hijacked")
        .add_text("degree", "PhD")
        .add_text("start_date", "2015-09-01");
    let response = client.post(&admin_path(intruder)).multipart(form).await;
    assert_error(&response, 404, "Education not found");

    let form = action("delete_education").add_text("id", id.to_string());
    let response = client.post(&admin_path(intruder)).multipart(form).await;
    assert_error(&response, 404, "Education not found");

    let form = action("delete_education").add_text("id", id.to_string());
    assert_ok(
        &client.post(&admin_path(owner)).multipart(form).await,
        "delete_education",
    );
}

#[tokio::test]
async fn test_unknown_user() {
    let app = setup_db_test_app().await;
    let client = app.client();

    let response = client
        .post(&admin_path(4242))
        .multipart(action("add_skill").add_text("name", "Rust"))
        .await;
    assert_error(&response, 404, "User not found");

    let response = client.get(&api_path("/users/4242/cv")).await;
    assert_error(&response, 404, "User not found");
}

#[tokio::test]
async fn test_language_conflicts() {
    let app = setup_db_test_app().await;
    let client = app.client();
    let user = create_user(app.pool(), "ada@example.com").await;
    let french = create_language(app.pool(), "French", "fr").await;
    create_language(app.pool(), "Dutch", "nl").await;

    let add = |language_id: i32| action("add_language").add_text("language_id", language_id.to_string());

    assert_ok(
        &client.post(&admin_path(user)).multipart(add(french)).await,
        "add_language",
    );

    let response = client.post(&admin_path(user)).multipart(add(french)).await;
    assert_eq!(response.status_code(), 409, "{}", response.text());

    let response = client.post(&admin_path(user)).multipart(add(french + 100)).await;
    assert_error(&response, 400, "Referenced record does not exist");

    let catalogue: Value = client.get(&api_path("/languages")).await.json();
    let names: Vec<_> = catalogue
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["language"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Dutch", "French"]);
}
