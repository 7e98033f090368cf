//! Data models for the CV
//!
//! Each sub-module holds the row type of one table plus the input DTO the
//! admin actions validate before writing it.

mod certificate;
mod cv;
mod education;
mod experience;
mod language;
mod personal_info;
mod project;
mod skill;
mod user;

pub use certificate::*;
pub use cv::*;
pub use education::*;
pub use experience::*;
pub use language::*;
pub use personal_info::*;
pub use project::*;
pub use skill::*;
pub use user::*;

use crate::error::AppError;
use chrono::NaiveDate;

/// An end date, when present, may not precede the start date.
pub fn validate_date_range(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), AppError> {
    match end {
        Some(end) if end < start => Err(AppError::InvalidInput(
            "end_date: Must not be before start_date".to_string(),
        )),
        _ => Ok(()),
    }
}
