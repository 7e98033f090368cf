//! Folio Core Library
//!
//! Domain models, error types and configuration shared by the Folio crates.

pub mod config;
pub mod error;
pub mod models;

pub use config::{Config, ImageConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
