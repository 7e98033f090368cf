//! Folio Database Library
//!
//! sqlx/PostgreSQL repositories for the CV tables. Every query is
//! runtime-checked (`query_as::<Postgres, _>`), so building the crate does not
//! need a live database.

pub mod db;

pub use db::*;
