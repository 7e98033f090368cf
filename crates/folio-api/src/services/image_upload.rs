//! Image upload service
//!
//! Bridges the synchronous normalizer into the async request path: the work
//! runs on the blocking pool under a deadline, and every `FailureReason` is
//! translated into an `AppError` with the normalizer's client message.

use folio_core::{AppError, ImageConfig};
use folio_processing::{
    FailureReason, ImageNormalizer, NormalizedImage, NormalizerConfig, UploadedImage,
};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct ImageUploadService {
    normalizer: Arc<ImageNormalizer>,
    enabled: bool,
    timeout: Duration,
}

impl ImageUploadService {
    pub fn new(normalizer: ImageNormalizer, enabled: bool, timeout: Duration) -> Self {
        Self {
            normalizer: Arc::new(normalizer),
            enabled,
            timeout,
        }
    }

    pub fn from_config(config: &ImageConfig, enabled: bool) -> Self {
        Self::new(
            ImageNormalizer::new(normalizer_config(config)),
            enabled,
            Duration::from_secs(config.processing_timeout_secs),
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Normalize an uploaded picture into a WebP data URL.
    #[tracing::instrument(skip(self, upload), fields(size = upload.map(|u| u.bytes.len())))]
    pub async fn normalize(
        &self,
        field: &str,
        upload: Option<&UploadedImage>,
    ) -> Result<NormalizedImage, AppError> {
        if !self.enabled {
            return Err(AppError::Forbidden("Uploads are disabled".to_string()));
        }

        let normalizer = Arc::clone(&self.normalizer);
        let upload = upload.cloned();
        let task = tokio::task::spawn_blocking(move || normalizer.normalize(upload.as_ref()));

        let outcome = tokio::time::timeout(self.timeout, task)
            .await
            .map_err(|_| {
                tracing::warn!(timeout_secs = self.timeout.as_secs(), "Image normalization timed out");
                AppError::Timeout("Image processing took too long".to_string())
            })?
            .map_err(|e| AppError::Internal(format!("Image processing task failed: {}", e)))?;

        match outcome {
            Ok(image) => {
                tracing::info!(
                    width = image.width,
                    height = image.height,
                    encoded_len = image.encoded_len,
                    "Image normalized"
                );
                Ok(image)
            }
            Err(reason) => {
                tracing::debug!(code = reason.code(), reason = %reason, "Image rejected");
                Err(failure_to_app_error(&reason))
            }
        }
    }
}

/// `output_dpi == 0` turns resolution tagging off.
pub fn normalizer_config(config: &ImageConfig) -> NormalizerConfig {
    NormalizerConfig::default()
        .with_max_bytes(config.max_bytes)
        .with_max_dimension(config.max_dimension)
        .with_quality(config.quality)
        .with_output_dpi((config.output_dpi > 0).then_some(config.output_dpi))
        .with_allowed_formats(config.allowed_formats.iter())
}

pub fn failure_to_app_error(reason: &FailureReason) -> AppError {
    let message = reason.client_message();
    match reason {
        FailureReason::NoFile => AppError::BadRequest(message),
        FailureReason::TooLarge { .. } => AppError::PayloadTooLarge(message),
        FailureReason::InvalidImage | FailureReason::UnsupportedFormat(_) => {
            AppError::ImageProcessing(message)
        }
        FailureReason::EncodingFailed(_) => AppError::Internal(message),
    }
}
