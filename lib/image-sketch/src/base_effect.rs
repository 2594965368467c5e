use crate::ImageSketchResult;
use image::{DynamicImage, GrayImage, Luma};

// BT.601 weights in 14-bit fixed point
const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;

/// Weighted luminance: 0.299*R + 0.587*G + 0.114*B, rounded
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let sum = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    ((sum + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
}

/// Reduce an image to a single 8-bit brightness channel.
///
/// Images that are already grayscale keep their values; alpha is dropped.
pub fn grayscale(image: &DynamicImage) -> GrayImage {
    if !image.color().has_color() {
        return image.to_luma8();
    }

    let rgb = image.to_rgb8();
    let mut gray = GrayImage::new(rgb.width(), rgb.height());

    for (dst, src) in gray.pixels_mut().zip(rgb.pixels()) {
        *dst = Luma([luminance(src[0], src[1], src[2])]);
    }

    gray
}

/// Invert the brightness of a grayscale image
pub fn invert(image: &mut GrayImage) -> ImageSketchResult<()> {
    for pixel in image.pixels_mut() {
        pixel[0] = 255 - pixel[0];
    }

    Ok(())
}
