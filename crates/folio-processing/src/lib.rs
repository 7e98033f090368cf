//! Folio image processing
//!
//! Turns an untrusted upload into an upright, size-bounded WebP wrapped in a
//! `data:` URL. The whole pipeline is synchronous, stateless and performs no
//! I/O beyond reading the bytes it is handed.

pub mod compression;
pub mod config;
pub mod error;
pub mod image;
pub mod metadata;
pub mod normalizer;
pub mod upload;

pub use compression::{read_resolution, Resolution, WebPCompressor, WEBP_MIME_TYPE};
pub use config::NormalizerConfig;
pub use error::FailureReason;
pub use self::image::{fit_inside, ImageOrientation, ImageResize};
pub use metadata::ImageMetadata;
pub use normalizer::{normalize, ImageNormalizer, NormalizedImage, DATA_URL_PREFIX};
pub use upload::UploadedImage;
