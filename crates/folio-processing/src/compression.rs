use crate::error::FailureReason;
use bytes::Bytes;
use exif::experimental::Writer;
use exif::{Exif, Field, In, Rational, Reader, Tag, Value};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use img_parts::riff::{RiffChunk, RiffContent};
use img_parts::webp::{WebP, CHUNK_EXIF, CHUNK_VP8X};
use img_parts::ImageEXIF;
use std::io::Cursor;

pub const WEBP_MIME_TYPE: &str = "image/webp";

/// EXIF ResolutionUnit value for inches.
pub const RESOLUTION_UNIT_INCH: u16 = 2;

/// "EXIF metadata present" bit of the VP8X feature flags
const VP8X_EXIF_FLAG: u8 = 0b0000_1000;

/// Resolution tags as read back from an encoded file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub x: u32,
    pub y: u32,
    pub unit: u16,
}

/// Lossy WebP encoder with an optional resolution hint
#[derive(Debug, Clone, Copy)]
pub struct WebPCompressor {
    quality: f32,
    dpi: Option<u32>,
}

impl WebPCompressor {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: f32::from(quality.min(100)),
            dpi: None,
        }
    }

    /// `None` or `Some(0)` disables the resolution hint.
    pub fn with_dpi(mut self, dpi: Option<u32>) -> Self {
        self.dpi = dpi.filter(|dpi| *dpi > 0);
        self
    }

    /// Encode `img` and, when a DPI is set, attach it as EXIF.
    ///
    /// Only the encoding itself can fail. A resolution hint that cannot be
    /// attached is dropped and the plain encoding is returned.
    pub fn compress(&self, img: &DynamicImage) -> Result<Bytes, FailureReason> {
        let encoded = self.encode(img)?;

        match self.dpi {
            Some(dpi) => {
                Ok(Self::embed_resolution(&encoded, dpi, img.dimensions()).unwrap_or(encoded))
            }
            None => Ok(encoded),
        }
    }

    fn encode(&self, img: &DynamicImage) -> Result<Bytes, FailureReason> {
        let (width, height) = img.dimensions();

        let encoded = if img.color().has_alpha() {
            let rgba = img.to_rgba8();
            webp::Encoder::from_rgba(&rgba, width, height).encode_simple(false, self.quality)
        } else {
            let rgb = img.to_rgb8();
            webp::Encoder::from_rgb(&rgb, width, height).encode_simple(false, self.quality)
        };

        encoded
            .map(|memory| Bytes::copy_from_slice(&memory))
            .map_err(|e| FailureReason::EncodingFailed(format!("{:?}", e)))
    }

    /// Attach an EXIF chunk carrying X/Y resolution. Returns `None` unless
    /// the result decodes to the same picture and the tags read back intact.
    fn embed_resolution(encoded: &Bytes, dpi: u32, dimensions: (u32, u32)) -> Option<Bytes> {
        let tiff = Bytes::from(resolution_exif(dpi)?);

        let mut webp = WebP::from_bytes(encoded.clone()).ok()?;
        // Adds the chunk and converts to the extended (VP8X) layout.
        webp.set_exif(Some(tiff.clone()));

        // WebP stores bare TIFF in the EXIF chunk, without the JPEG APP1 header
        for chunk in webp.chunks_mut().iter_mut() {
            if chunk.id() == CHUNK_EXIF {
                *chunk = RiffChunk::new(CHUNK_EXIF, RiffContent::Data(tiff.clone()));
            } else if chunk.id() == CHUNK_VP8X {
                let mut header = chunk.content().data()?.to_vec();
                *header.first_mut()? |= VP8X_EXIF_FLAG;
                *chunk = RiffChunk::new(CHUNK_VP8X, RiffContent::Data(Bytes::from(header)));
            }
        }
        let with_exif = webp.encoder().bytes();

        let expected = Resolution {
            x: dpi,
            y: dpi,
            unit: RESOLUTION_UNIT_INCH,
        };
        (probe_webp(&with_exif)? == dimensions && read_resolution(&with_exif)? == expected)
            .then_some(with_exif)
    }
}

/// TIFF-structured EXIF payload with XResolution, YResolution and
/// ResolutionUnit (inches).
pub fn resolution_exif(dpi: u32) -> Option<Vec<u8>> {
    let resolution = Value::Rational(vec![Rational { num: dpi, denom: 1 }]);
    let fields = [
        Field {
            tag: Tag::XResolution,
            ifd_num: In::PRIMARY,
            value: resolution.clone(),
        },
        Field {
            tag: Tag::YResolution,
            ifd_num: In::PRIMARY,
            value: resolution,
        },
        Field {
            tag: Tag::ResolutionUnit,
            ifd_num: In::PRIMARY,
            value: Value::Short(vec![RESOLUTION_UNIT_INCH]),
        },
    ];

    let mut writer = Writer::new();
    for field in &fields {
        writer.push_field(field);
    }

    let mut buf = Cursor::new(Vec::new());
    writer.write(&mut buf, false).ok()?;
    Some(buf.into_inner())
}

/// Resolution tags of the primary IFD, if the container carries EXIF
pub fn read_resolution(data: &[u8]) -> Option<Resolution> {
    let exif = Reader::new()
        .read_from_container(&mut Cursor::new(data))
        .ok()?;

    Some(Resolution {
        x: rational_tag(&exif, Tag::XResolution)?,
        y: rational_tag(&exif, Tag::YResolution)?,
        unit: u16::try_from(
            exif.get_field(Tag::ResolutionUnit, In::PRIMARY)?
                .value
                .get_uint(0)?,
        )
        .ok()?,
    })
}

fn rational_tag(exif: &Exif, tag: Tag) -> Option<u32> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::Rational(values) => values
            .first()
            .filter(|r| r.denom != 0)
            .map(|r| r.num / r.denom),
        _ => None,
    }
}

/// Dimensions of `data` if it is a decodable WebP header
pub fn probe_webp(data: &[u8]) -> Option<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .ok()?;
    if reader.format() != Some(ImageFormat::WebP) {
        return None;
    }
    reader.into_dimensions().ok()
}
