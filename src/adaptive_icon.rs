//! Adaptive icon generation: pad the logo into the launcher safe zone.

use std::path::Path;

use image::imageops::FilterType;
use image::{imageops, ImageFormat, RgbaImage};

use crate::compose::centered_offset;
use crate::error::{AssetError, Result};

/// Full adaptive icon canvas, in pixels.
pub const CANVAS_SIZE: u32 = 512;

/// Fraction of the canvas the logo occupies. Launchers only guarantee the
/// central ~66% of an adaptive icon, so 60% keeps some margin inside it.
pub const SAFE_ZONE_PERCENTAGE: f32 = 0.60;

/// Scale the logo to the safe zone and center it on a transparent canvas.
pub fn create_adaptive_icon(input_path: &Path, output_path: &Path) -> Result<()> {
    let img = image::open(input_path).map_err(|source| AssetError::Open {
        path: input_path.to_path_buf(),
        source,
    })?;
    println!("Original size: {}x{}", img.width(), img.height());

    // The source is assumed square; a non-square logo stretches to square here
    let logo_size = (CANVAS_SIZE as f32 * SAFE_ZONE_PERCENTAGE) as u32;
    let resized = img.resize_exact(logo_size, logo_size, FilterType::Lanczos3);

    // Transparent canvas with the logo centered on it, using the logo's own
    // alpha channel as the paste mask
    let mut canvas = RgbaImage::new(CANVAS_SIZE, CANVAS_SIZE);
    let x_offset = centered_offset(CANVAS_SIZE, logo_size);
    let y_offset = centered_offset(CANVAS_SIZE, logo_size);
    imageops::overlay(&mut canvas, &resized, i64::from(x_offset), i64::from(y_offset));

    canvas
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|source| AssetError::Save {
            path: output_path.to_path_buf(),
            source,
        })?;

    println!("✓ Created adaptive icon: {}", output_path.display());
    println!("  - Canvas: {}x{}", CANVAS_SIZE, CANVAS_SIZE);
    println!("  - Logo: {}x{} (centered)", logo_size, logo_size);
    println!("  - Safe zone coverage: {}%", SAFE_ZONE_PERCENTAGE * 100.0);

    Ok(())
}
