//! Folio HTTP API
//!
//! Public CV read endpoints plus the admin form endpoint that edits a CV and
//! accepts profile and project pictures.

pub mod actions;
pub mod constants;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
