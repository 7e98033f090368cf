//! Admin action integration tests.
//!
//! Every request here fails before the database is reached, so the suite
//! runs without PostgreSQL.
//!
//! Run with: `cargo test -p folio-api --test admin_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{admin_path, fixtures, setup_test_app, setup_test_app_with, test_config};

fn image_part(data: Vec<u8>, file_name: &str, mime: &str) -> Part {
    Part::bytes(bytes::Bytes::from(data))
        .file_name(file_name)
        .mime_type(mime)
}

fn assert_error(response: &axum_test::TestResponse, status: u16, message: &str) {
    assert_eq!(response.status_code(), status, "{}", response.text());
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], message);
    assert!(body["code"].is_string());
}

#[tokio::test]
async fn test_unknown_action_is_rejected() {
    let app = setup_test_app();
    let form = MultipartForm::new().add_text("_action", "drop_everything");

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 400, "Invalid action");
}

#[tokio::test]
async fn test_missing_action_is_rejected() {
    let app = setup_test_app();
    let form = MultipartForm::new().add_text("name", "Rust");

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 400, "Invalid action");
}

#[tokio::test]
async fn test_required_field_is_reported_by_name() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("_action", "add_education")
        .add_text("name", "KU Leuven")
        .add_text("start_date", "2015-09-01");

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 400, "degree: Required");
}

#[tokio::test]
async fn test_end_date_before_start_date() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("_action", "add_experience")
        .add_text("name", "Acme")
        .add_text("title", "Engineer")
        .add_text("role", "Backend")
        .add_text("start_date", "2022-01-01")
        .add_text("end_date", "2021-01-01");

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 400, "end_date: Must not be before start_date");
}

#[tokio::test]
async fn test_delete_needs_a_positive_id() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("_action", "delete_skill")
        .add_text("id", "-1");

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 400, "id: Must be a positive integer");
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("_action", "update_user_basic")
        .add_text("first_name", "Ada")
        .add_text("last_name", "Lovelace")
        .add_text("email", "ada-at-example");

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_uploads_disabled() {
    let mut config = test_config();
    config.uploads_enabled = false;
    let app = setup_test_app_with(config);

    for (action, field) in [
        ("upload_user_image", "image_file"),
        ("upload_project_image", "project_image_file"),
    ] {
        let form = MultipartForm::new()
            .add_text("_action", action)
            .add_text("project_id", "1")
            .add_part(field, image_part(fixtures::png(10, 10), "me.png", "image/png"));

        let response = app.client().post(&admin_path(1)).multipart(form).await;

        assert_error(&response, 403, "Uploads are disabled");
    }
}

#[tokio::test]
async fn test_missing_file() {
    let app = setup_test_app();
    let form = MultipartForm::new().add_text("_action", "upload_user_image");

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 400, "No file uploaded");
}

#[tokio::test]
async fn test_empty_file_part() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("_action", "upload_user_image")
        .add_part("image_file", image_part(Vec::new(), "", "application/octet-stream"));

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 400, "No file uploaded");
}

#[tokio::test]
async fn test_file_under_the_wrong_field_name() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("_action", "upload_user_image")
        .add_part("avatar", image_part(fixtures::png(10, 10), "me.png", "image/png"));

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 400, "No file uploaded");
}

#[tokio::test]
async fn test_gif_is_unsupported() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("_action", "upload_user_image")
        .add_part("image_file", image_part(fixtures::gif(8, 8), "anim.gif", "image/gif"));

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 400, "Unsupported image format");
}

#[tokio::test]
async fn test_svg_is_unsupported() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("_action", "upload_user_image")
        .add_part("image_file", image_part(fixtures::svg(), "logo.svg", "image/svg+xml"));

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 400, "Unsupported image format");
}

#[tokio::test]
async fn test_garbage_is_invalid() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("_action", "upload_user_image")
        .add_part(
            "image_file",
            image_part(b"definitely not an image".to_vec(), "me.jpg", "image/jpeg"),
        );

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 400, "Invalid image file");
}

#[tokio::test]
async fn test_oversized_image() {
    let mut config = test_config();
    config.image.max_bytes = 1024 * 1024;
    let app = setup_test_app_with(config);

    let mut payload = fixtures::jpeg(16, 16);
    payload.resize(1024 * 1024 + 1, 0);
    let form = MultipartForm::new()
        .add_text("_action", "upload_user_image")
        .add_part("image_file", image_part(payload, "big.jpg", "image/jpeg"));

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 413, "Image too large (max 1MB)");
}

#[tokio::test]
async fn test_project_image_needs_project_id() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("_action", "upload_project_image")
        .add_part(
            "project_image_file",
            image_part(fixtures::png(10, 10), "shot.png", "image/png"),
        );

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 400, "Invalid project id");
}

#[tokio::test]
async fn test_project_image_is_checked_before_lookup() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_text("_action", "upload_project_image")
        .add_text("project_id", "3")
        .add_part(
            "project_image_file",
            image_part(fixtures::gif(4, 4), "shot.gif", "image/gif"),
        );

    let response = app.client().post(&admin_path(1)).multipart(form).await;

    assert_error(&response, 400, "Unsupported image format");
}

#[tokio::test]
async fn test_non_numeric_user_id_is_json_error() {
    let app = setup_test_app();
    let form = MultipartForm::new().add_text("_action", "add_skill");

    let response = app
        .client()
        .post(&helpers::api_path("/admin/users/abc/actions"))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400, "{}", response.text());
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body["error"].as_str().unwrap().starts_with("Invalid path parameter"));
}
