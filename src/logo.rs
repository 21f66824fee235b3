//! Logo normalization: exact square, white background, opaque JPEG.

use std::fs::File;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{imageops, DynamicImage, Rgb, RgbImage};

use crate::compose::{centered_offset, flatten_onto_white, shrink_to_fit};
use crate::error::{AssetError, Result};

/// JPEG encoding quality for the normalized logo.
pub const JPEG_QUALITY: u8 = 95;

/// Fit the logo within `size`x`size` and center it on a solid white square.
///
/// Transparency is flattened onto white first, so the output is always
/// opaque RGB. Images already within the bound are centered unscaled.
pub fn resize_logo(input_path: &Path, output_path: &Path, size: u32) -> Result<()> {
    let img = image::open(input_path).map_err(|source| AssetError::Open {
        path: input_path.to_path_buf(),
        source,
    })?;

    // Opaque RGB first, then fit within the square bound without upscaling
    let flattened = DynamicImage::ImageRgb8(flatten_onto_white(&img));
    let fitted = shrink_to_fit(flattened, size).to_rgb8();

    let mut canvas = RgbImage::from_pixel(size, size, Rgb([255, 255, 255]));
    let x_offset = centered_offset(size, fitted.width());
    let y_offset = centered_offset(size, fitted.height());
    imageops::replace(&mut canvas, &fitted, i64::from(x_offset), i64::from(y_offset));

    let mut output = File::create(output_path)?;
    let encoder = JpegEncoder::new_with_quality(&mut output, JPEG_QUALITY);
    DynamicImage::ImageRgb8(canvas)
        .write_with_encoder(encoder)
        .map_err(|source| AssetError::Save {
            path: output_path.to_path_buf(),
            source,
        })?;

    println!("✅ Logo resized to {}x{} pixels", size, size);
    println!("📁 Saved to: {}", output_path.display());

    Ok(())
}
