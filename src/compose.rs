//! Shared compositing steps used by both asset pipelines.

use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage, RgbImage};

/// Offset that centers `content` inside `canvas` on one axis.
/// Integer division, so an odd difference lands one pixel toward the top/left.
pub fn centered_offset(canvas: u32, content: u32) -> u32 {
    (canvas - content) / 2
}

/// Flatten any transparency onto a solid white background, yielding opaque RGB.
///
/// RGBA and luminance-alpha sources are composited over white using their own
/// alpha channel as the blend mask. Sources without an alpha channel are
/// converted to RGB directly; they carry no transparency to lose.
pub fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    if img.color().has_alpha() {
        let mut background =
            RgbaImage::from_pixel(img.width(), img.height(), Rgba([255, 255, 255, 255]));
        image::imageops::overlay(&mut background, img, 0, 0);
        DynamicImage::ImageRgba8(background).to_rgb8()
    } else {
        img.to_rgb8()
    }
}

/// Scale the image down so neither dimension exceeds `bound`, preserving
/// aspect ratio. Images already within the bound are returned unchanged.
pub fn shrink_to_fit(img: DynamicImage, bound: u32) -> DynamicImage {
    if img.width() <= bound && img.height() <= bound {
        // resize() would upscale here; shrink-to-fit never does
        return img;
    }

    img.resize(bound, bound, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA};

    #[test]
    fn test_centered_offset() {
        assert_eq!(centered_offset(512, 307), 102);
        assert_eq!(centered_offset(1024, 576), 224);
        assert_eq!(centered_offset(16, 16), 0);
        // Odd difference biases toward the top/left
        assert_eq!(centered_offset(10, 7), 1);
    }

    #[test]
    fn test_flatten_transparent_pixels_become_white() {
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        let flat = flatten_onto_white(&DynamicImage::ImageRgba8(src));

        assert_eq!(flat.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(flat.get_pixel(3, 3).0, [255, 255, 255]);
    }

    #[test]
    fn test_flatten_opaque_pixels_keep_their_color() {
        let src = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let flat = flatten_onto_white(&DynamicImage::ImageRgba8(src));

        assert_eq!(flat.get_pixel(2, 2).0, [10, 20, 30]);
    }

    #[test]
    fn test_flatten_leaves_rgb_untouched() {
        // A black RGB image has no alpha, so nothing should turn white
        let flat = flatten_onto_white(&DynamicImage::new_rgb8(4, 4));

        assert_eq!(flat.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_flatten_luminance_alpha() {
        let src = GrayAlphaImage::from_pixel(2, 2, LumaA([100, 0]));
        let flat = flatten_onto_white(&DynamicImage::ImageLumaA8(src));

        assert_eq!(flat.get_pixel(1, 1).0, [255, 255, 255]);
    }

    #[test]
    fn test_shrink_to_fit_downscales_larger_images() {
        let fitted = shrink_to_fit(DynamicImage::new_rgb8(2048, 1024), 1024);
        assert_eq!((fitted.width(), fitted.height()), (1024, 512));

        let fitted = shrink_to_fit(DynamicImage::new_rgb8(1600, 900), 1024);
        assert_eq!((fitted.width(), fitted.height()), (1024, 576));
    }

    #[test]
    fn test_shrink_to_fit_never_upscales() {
        let fitted = shrink_to_fit(DynamicImage::new_rgb8(300, 300), 1024);
        assert_eq!((fitted.width(), fitted.height()), (300, 300));
    }

    #[test]
    fn test_shrink_to_fit_keeps_exact_bound() {
        let fitted = shrink_to_fit(DynamicImage::new_rgb8(1024, 1024), 1024);
        assert_eq!((fitted.width(), fitted.height()), (1024, 1024));
    }
}
