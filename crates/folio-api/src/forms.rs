//! Multipart form extraction
//!
//! The admin endpoint receives classic HTML form submissions. [`FormData`]
//! drains the multipart stream once and then offers typed accessors that
//! produce `InvalidInput` errors named after the offending field.

use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
};
use chrono::NaiveDate;
use folio_core::AppError;
use folio_processing::UploadedImage;
use std::collections::HashMap;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Every field of one multipart submission
#[derive(Debug, Default)]
pub struct FormData {
    texts: HashMap<String, Vec<String>>,
    files: HashMap<String, UploadedImage>,
}

impl FormData {
    /// Read the whole body. Parts that carry a file name are files, the
    /// rest are text fields. A repeated file field keeps the last part.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = FormData::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().map(|s| s.to_string()).unwrap_or_default();
            if name.is_empty() {
                continue;
            }

            match field.file_name().map(|s| s.to_string()) {
                Some(file_name) => {
                    let content_type = field.content_type().map(|s| s.to_string());
                    let bytes = field.bytes().await.map_err(multipart_error)?;
                    let upload = UploadedImage::new(name.clone(), bytes)
                        .with_file_name(Some(file_name))
                        .with_content_type(content_type);
                    form.insert_file(upload);
                }
                None => {
                    let value = field.text().await.map_err(multipart_error)?;
                    form.push_text(name, value);
                }
            }
        }

        tracing::debug!(
            text_fields = form.texts.len(),
            file_fields = form.files.len(),
            "Form parsed"
        );

        Ok(form)
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.texts.entry(name.into()).or_default().push(value.into());
    }

    pub fn insert_file(&mut self, upload: UploadedImage) {
        self.files.insert(upload.field_name.clone(), upload);
    }

    /// First raw value of a text field
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn required_text(&self, name: &str) -> Result<String, AppError> {
        self.optional_text(name).ok_or_else(|| required(name))
    }

    /// Trimmed value, blank becomes `None`.
    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.text(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    pub fn required_date(&self, name: &str) -> Result<NaiveDate, AppError> {
        self.optional_date(name)?.ok_or_else(|| required(name))
    }

    pub fn optional_date(&self, name: &str) -> Result<Option<NaiveDate>, AppError> {
        self.optional_text(name)
            .map(|value| {
                NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|_| {
                    AppError::InvalidInput(format!("{}: Invalid date, expected YYYY-MM-DD", name))
                })
            })
            .transpose()
    }

    /// A database id: a strictly positive integer.
    pub fn required_id(&self, name: &str) -> Result<i32, AppError> {
        let value = self.required_text(name)?;
        value
            .parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| AppError::InvalidInput(format!("{}: Must be a positive integer", name)))
    }

    /// One entry per non-blank line of a textarea.
    pub fn line_list(&self, name: &str) -> Option<Vec<String>> {
        let items: Vec<String> = self
            .text(name)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        (!items.is_empty()).then_some(items)
    }

    /// Every non-blank value of a repeated field (`skills=a&skills=b`).
    pub fn multi_list(&self, name: &str) -> Vec<String> {
        self.texts
            .get(name)
            .map(|values| {
                values
                    .iter()
                    .map(|value| value.trim())
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn file(&self, name: &str) -> Option<&UploadedImage> {
        self.files.get(name)
    }
}

fn required(name: &str) -> AppError {
    AppError::InvalidInput(format!("{}: Required", name))
}

fn multipart_error(err: MultipartError) -> AppError {
    let message = format!("Failed to read multipart body: {}", err.body_text());
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::BadRequest(message)
    }
}
