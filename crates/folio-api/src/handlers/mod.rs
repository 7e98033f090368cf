//! HTTP handlers

pub mod admin;
pub mod cv;
pub mod health;
pub mod languages;
