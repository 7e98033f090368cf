use image::ImageFormat;

/// How far into a text upload we look for the root element.
const MARKUP_SNIFF_LEN: usize = 1024;

/// Lower-case identifier used by the allow-list
pub fn format_identifier(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "jpeg".to_string(),
        ImageFormat::Png => "png".to_string(),
        ImageFormat::WebP => "webp".to_string(),
        ImageFormat::Avif => "avif".to_string(),
        ImageFormat::Gif => "gif".to_string(),
        ImageFormat::Tiff => "tiff".to_string(),
        ImageFormat::Bmp => "bmp".to_string(),
        ImageFormat::Ico => "ico".to_string(),
        other => format!("{:?}", other).to_lowercase(),
    }
}

/// Detect vector markup that the raster decoders would not recognize.
///
/// Returns `Some("svg")` for SVG documents, with or without an XML prolog.
pub fn sniff_markup_format(data: &[u8]) -> Option<&'static str> {
    let data = data.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(data);
    let start = data.iter().position(|b| !b.is_ascii_whitespace())?;
    let head = &data[start..data.len().min(start + MARKUP_SNIFF_LEN)];
    if head.first() != Some(&b'<') {
        return None;
    }

    let head = String::from_utf8_lossy(head).to_ascii_lowercase();
    if head.starts_with("<svg") {
        return Some("svg");
    }
    let prolog = head.starts_with("<?xml") || head.starts_with("<!doctype") || head.starts_with("<!--");
    if prolog && head.contains("<svg") {
        return Some("svg");
    }
    None
}
