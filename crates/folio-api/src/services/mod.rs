//! Application services

pub mod image_upload;

pub use image_upload::ImageUploadService;
