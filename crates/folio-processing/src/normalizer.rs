use crate::compression::{WebPCompressor, WEBP_MIME_TYPE};
use crate::config::NormalizerConfig;
use crate::error::FailureReason;
use crate::image::{ImageOrientation, ImageResize};
use crate::metadata::{map_probe_error, ImageMetadata};
use crate::upload::UploadedImage;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, GenericImageView, ImageReader};
use serde::Serialize;
use std::io::Cursor;
use std::panic::{catch_unwind, AssertUnwindSafe};

pub const DATA_URL_PREFIX: &str = "data:image/webp;base64,";

/// Upright, size-bounded WebP ready to be stored inline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedImage {
    pub width: u32,
    pub height: u32,
    /// `data:image/webp;base64,<payload>`
    pub data_url: String,
    /// Length of the encoded WebP before base64.
    pub encoded_len: usize,
}

impl NormalizedImage {
    fn from_webp(encoded: &[u8], width: u32, height: u32) -> Self {
        let mut data_url = String::with_capacity(DATA_URL_PREFIX.len() + encoded.len() * 4 / 3 + 4);
        data_url.push_str(DATA_URL_PREFIX);
        STANDARD.encode_string(encoded, &mut data_url);

        Self {
            width,
            height,
            data_url,
            encoded_len: encoded.len(),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        WEBP_MIME_TYPE
    }

    /// Decoded WebP bytes of the data URL
    pub fn payload_bytes(&self) -> Option<Vec<u8>> {
        let payload = self.data_url.strip_prefix(DATA_URL_PREFIX)?;
        STANDARD.decode(payload).ok()
    }
}

/// Stateless normalizer bound to one configuration
///
/// Safe to share across threads; each call works on its own input only.
#[derive(Debug, Clone, Default)]
pub struct ImageNormalizer {
    config: NormalizerConfig,
}

impl ImageNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn normalize(
        &self,
        upload: Option<&UploadedImage>,
    ) -> Result<NormalizedImage, FailureReason> {
        normalize(upload, &self.config)
    }
}

/// Validate, orient, downscale and re-encode an upload.
///
/// Checks run in a fixed order and the first failing one decides the
/// reason: presence, size, probe, allow-list, decode, encode.
pub fn normalize(
    upload: Option<&UploadedImage>,
    config: &NormalizerConfig,
) -> Result<NormalizedImage, FailureReason> {
    let upload = upload
        .filter(|upload| !upload.is_empty())
        .ok_or(FailureReason::NoFile)?;

    let size = upload.effective_size();
    if size > config.max_bytes {
        return Err(FailureReason::TooLarge {
            size,
            max: config.max_bytes,
        });
    }

    let metadata = guarded(
        || ImageMetadata::probe(&upload.bytes),
        || FailureReason::InvalidImage,
    )?;
    if !config.is_format_allowed(&metadata.format) {
        return Err(FailureReason::UnsupportedFormat(metadata.format));
    }

    let decoded = guarded(|| decode(&upload.bytes, &metadata), || FailureReason::InvalidImage)?;

    let (resized, encoded) = guarded(
        || {
            let upright = ImageOrientation::apply(decoded, metadata.exif_orientation);
            let resized = ImageResize::fit_inside(upright, config.max_dimension);
            let encoded = WebPCompressor::new(config.quality)
                .with_dpi(config.output_dpi)
                .compress(&resized)?;
            Ok((resized, encoded))
        },
        || FailureReason::EncodingFailed("image pipeline panicked".to_string()),
    )?;
    let (width, height) = resized.dimensions();

    Ok(NormalizedImage::from_webp(&encoded, width, height))
}

/// Codec bugs on hostile input must not unwind into the caller.
fn guarded<T>(
    step: impl FnOnce() -> Result<T, FailureReason>,
    on_panic: impl FnOnce() -> FailureReason,
) -> Result<T, FailureReason> {
    catch_unwind(AssertUnwindSafe(step)).unwrap_or_else(|_| Err(on_panic()))
}

fn decode(data: &[u8], metadata: &ImageMetadata) -> Result<DynamicImage, FailureReason> {
    // No rasterizer for markup formats
    if metadata.is_markup() {
        return Err(FailureReason::UnsupportedFormat(metadata.format.clone()));
    }

    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|_| FailureReason::InvalidImage)?
        .decode()
        .map_err(|e| map_probe_error(e, &metadata.format))
}
