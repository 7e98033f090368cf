//! Header-level image metadata

use crate::error::FailureReason;
use crate::image::{format_identifier, sniff_markup_format, ImageOrientation};
use image::{ImageError, ImageReader};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// What a cheap probe of the bytes reveals, before any pixel decoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    /// Lower-case identifier (`jpeg`, `png`, `webp`, `avif`, `gif`, `svg`, ...)
    pub format: String,
    /// 1 when the file carries no orientation tag.
    pub exif_orientation: u8,
}

impl ImageMetadata {
    /// Identify the container and read its header.
    ///
    /// SVG markup is reported with format `svg` and zero dimensions; it is
    /// never decoded.
    pub fn probe(data: &[u8]) -> Result<Self, FailureReason> {
        if let Some(markup) = sniff_markup_format(data) {
            return Ok(Self {
                width: 0,
                height: 0,
                format: markup.to_string(),
                exif_orientation: 1,
            });
        }

        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|_| FailureReason::InvalidImage)?;
        let format = format_identifier(reader.format().ok_or(FailureReason::InvalidImage)?);

        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| map_probe_error(e, &format))?;

        Ok(Self {
            width,
            height,
            format,
            exif_orientation: ImageOrientation::read_exif_orientation(data),
        })
    }

    pub fn is_markup(&self) -> bool {
        self.format == "svg"
    }
}

/// A known container without a decoder in this build is unsupported. Anything
/// else wrong with the bytes makes the file invalid.
pub(crate) fn map_probe_error(error: ImageError, format: &str) -> FailureReason {
    match error {
        ImageError::Unsupported(_) => FailureReason::UnsupportedFormat(format.to_string()),
        _ => FailureReason::InvalidImage,
    }
}
