//! Image inspection and pixel transforms
//!
//! - Format identification and markup sniffing (format)
//! - EXIF orientation correction (orientation)
//! - Fit-inside downscaling (resize)

pub mod format;
pub mod orientation;
pub mod resize;

pub use format::{format_identifier, sniff_markup_format};
pub use orientation::ImageOrientation;
pub use resize::{fit_inside, ImageResize};
