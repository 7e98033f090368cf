//! Normalizer configuration

use serde::{Deserialize, Serialize};

/// Default upload ceiling (5 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;
/// Default cap for the longest output side, in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 800;
/// Default WebP quality (0-100).
pub const DEFAULT_QUALITY: u8 = 82;
/// Default resolution hint written into the output.
pub const DEFAULT_OUTPUT_DPI: u32 = 300;
/// Source formats accepted by default. GIF and SVG are deliberately absent.
pub const DEFAULT_ALLOWED_FORMATS: &[&str] = &["jpeg", "jpg", "png", "webp", "avif"];

/// Tunables for [`crate::ImageNormalizer`]
///
/// Passed explicitly at call time; there is no process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    pub max_bytes: u64,
    pub max_dimension: u32,
    pub quality: u8,
    /// `None` skips the resolution hint entirely.
    pub output_dpi: Option<u32>,
    /// Lower-case format identifiers.
    pub allowed_formats: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_dimension: DEFAULT_MAX_DIMENSION,
            quality: DEFAULT_QUALITY,
            output_dpi: Some(DEFAULT_OUTPUT_DPI),
            allowed_formats: DEFAULT_ALLOWED_FORMATS
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }
}

impl NormalizerConfig {
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.min(100);
        self
    }

    pub fn with_output_dpi(mut self, output_dpi: Option<u32>) -> Self {
        self.output_dpi = output_dpi;
        self
    }

    pub fn with_allowed_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_formats = formats
            .into_iter()
            .map(|f| f.as_ref().trim().to_lowercase())
            .filter(|f| !f.is_empty())
            .collect();
        self
    }

    /// Case-insensitive allow-list check. `jpg` and `jpeg` are the same format.
    pub fn is_format_allowed(&self, format: &str) -> bool {
        let format = canonical_format(format.trim());
        self.allowed_formats
            .iter()
            .any(|allowed| canonical_format(allowed).eq_ignore_ascii_case(format))
    }

    /// Upload ceiling in whole megabytes, for user-facing messages.
    pub fn max_megabytes(&self) -> u64 {
        self.max_bytes / 1024 / 1024
    }
}

fn canonical_format(format: &str) -> &str {
    if format.eq_ignore_ascii_case("jpg") {
        "jpeg"
    } else {
        format
    }
}
