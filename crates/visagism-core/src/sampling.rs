//! Pick a skin sample from an image at the point the user tapped.

use crate::tone::SkinSample;
use image::RgbImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("image: {0}")]
    Image(#[from] image::ImageError),
    #[error("point ({x}, {y}) outside {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("relative coordinate {0} not in [0, 1]")]
    InvalidRelative(f64),
}

/// Sample the pixel at `(x, y)`.
///
/// With `radius == 0` the exact pixel is returned; otherwise the integer
/// mean of the square window `[x - radius, x + radius]`, clipped to the
/// image, is returned.
pub fn sample_pixel(
    img: &RgbImage,
    x: u32,
    y: u32,
    radius: u32,
) -> Result<SkinSample, SampleError> {
    let (width, height) = img.dimensions();
    if x >= width || y >= height {
        return Err(SampleError::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }

    if radius == 0 {
        return Ok(SkinSample::from(img.get_pixel(x, y).0));
    }

    let x0 = x.saturating_sub(radius);
    let y0 = y.saturating_sub(radius);
    let x1 = x.saturating_add(radius).min(width - 1);
    let y1 = y.saturating_add(radius).min(height - 1);

    let mut sum = [0u64; 3];
    let mut count = 0u64;
    for py in y0..=y1 {
        for px in x0..=x1 {
            let p = img.get_pixel(px, py).0;
            for (acc, c) in sum.iter_mut().zip(p) {
                *acc += c as u64;
            }
            count += 1;
        }
    }

    // count >= 1 since (x, y) itself is in the window.
    let mean = |i: usize| (sum[i] / count) as u8;
    let sample = SkinSample::new(mean(0), mean(1), mean(2));
    tracing::debug!(x, y, radius, pixels = count, sample = %sample, "sampled window");
    Ok(sample)
}

/// Sample at a tap position given as fractions of the displayed width/height.
pub fn sample_relative(
    img: &RgbImage,
    fx: f64,
    fy: f64,
    radius: u32,
) -> Result<SkinSample, SampleError> {
    for f in [fx, fy] {
        if !(0.0..=1.0).contains(&f) {
            return Err(SampleError::InvalidRelative(f));
        }
    }
    let (width, height) = img.dimensions();
    let to_px = |f: f64, extent: u32| {
        ((f * extent as f64).floor() as u32).min(extent.saturating_sub(1))
    };
    sample_pixel(img, to_px(fx, width), to_px(fy, height), radius)
}

/// Open an image file and sample it at `(x, y)`.
pub fn sample_file(path: &Path, x: u32, y: u32, radius: u32) -> Result<SkinSample, SampleError> {
    let img = image::open(path)?.to_rgb8();
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded image for sampling"
    );
    sample_pixel(&img, x, y, radius)
}
