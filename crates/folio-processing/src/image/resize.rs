use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Target size for a `width` x `height` image that must fit inside a
/// `max` x `max` box.
///
/// Never enlarges. The long side becomes `max`, the short side keeps the
/// aspect ratio, rounded to nearest and never below 1.
pub fn fit_inside(width: u32, height: u32, max: u32) -> (u32, u32) {
    let max = max.max(1);
    if width <= max && height <= max {
        return (width, height);
    }

    let scale_short = |short: u32, long: u32| -> u32 {
        let (short, long, max) = (short as u64, long as u64, max as u64);
        let scaled = (short * max + long / 2) / long;
        scaled.max(1) as u32
    };

    if width >= height {
        (max, scale_short(height, width))
    } else {
        (scale_short(width, height), max)
    }
}

/// Downscaling for normalized output
pub struct ImageResize;

impl ImageResize {
    /// Shrink `img` to fit inside `max` x `max`, returning it unchanged when it
    /// already fits.
    pub fn fit_inside(img: DynamicImage, max: u32) -> DynamicImage {
        let (width, height) = img.dimensions();
        let (target_w, target_h) = fit_inside(width, height, max);
        if (target_w, target_h) == (width, height) {
            return img;
        }
        img.resize_exact(target_w, target_h, FilterType::Lanczos3)
    }
}
