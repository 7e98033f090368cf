/// Why an upload could not be normalized
///
/// Closed set: every decode/encode problem inside the pipeline ends up as one
/// of these, nothing else leaves [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureReason {
    #[error("No file uploaded")]
    NoFile,

    #[error("Image too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    #[error("Invalid image file")]
    InvalidImage,

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to encode image: {0}")]
    EncodingFailed(String),
}

impl FailureReason {
    /// Machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::NoFile => "NO_FILE",
            FailureReason::TooLarge { .. } => "TOO_LARGE",
            FailureReason::InvalidImage => "INVALID_IMAGE",
            FailureReason::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            FailureReason::EncodingFailed(_) => "ENCODING_FAILED",
        }
    }

    /// Short message suitable for showing next to the upload field
    pub fn client_message(&self) -> String {
        match self {
            FailureReason::NoFile => "No file uploaded".to_string(),
            FailureReason::TooLarge { max, .. } => {
                format!("Image too large (max {}MB)", max / 1024 / 1024)
            }
            FailureReason::InvalidImage => "Invalid image file".to_string(),
            FailureReason::UnsupportedFormat(_) => "Unsupported image format".to_string(),
            FailureReason::EncodingFailed(_) => "Failed to process image".to_string(),
        }
    }
}
