use crate::{ImageSketchError, ImageSketchResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, Luma};

/// Divide blend configuration
///
/// Each output sample is `top * scale / bottom`, rounded and saturated to
/// 8 bits. A zero divisor is treated as one.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct DivideBlendConfig {
    #[derivative(Default(value = "256.0"))]
    scale: f32,
}

impl DivideBlendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn blend(&self, top: &GrayImage, bottom: &GrayImage) -> ImageSketchResult<GrayImage> {
        if top.dimensions() != bottom.dimensions() {
            return Err(ImageSketchError::DimensionMismatch {
                left_width: top.width(),
                left_height: top.height(),
                right_width: bottom.width(),
                right_height: bottom.height(),
            });
        }

        let mut result = GrayImage::new(top.width(), top.height());
        for ((dst, t), b) in result.pixels_mut().zip(top.pixels()).zip(bottom.pixels()) {
            *dst = Luma([divide(t[0], b[0], self.scale)]);
        }

        Ok(result)
    }
}

#[inline]
fn divide(numerator: u8, divisor: u8, scale: f32) -> u8 {
    let value = numerator as f32 * scale / divisor.max(1) as f32;
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide() {
        assert_eq!(divide(76, 76, 256.0), 255);
        assert_eq!(divide(100, 200, 256.0), 128);
        assert_eq!(divide(1, 200, 256.0), 1);
        assert_eq!(divide(0, 0, 256.0), 0);
        assert_eq!(divide(1, 0, 256.0), 255);
        assert_eq!(divide(3, 0, 1.0), 3);
    }

    #[test]
    fn test_divide_rounds_half_to_even() {
        assert_eq!(divide(5, 2, 1.0), 2);
        assert_eq!(divide(7, 2, 1.0), 4);
    }

    #[test]
    fn test_blend() {
        let top = GrayImage::from_raw(3, 1, vec![0, 50, 200]).unwrap();
        let bottom = GrayImage::from_raw(3, 1, vec![0, 100, 100]).unwrap();

        let result = DivideBlendConfig::new().blend(&top, &bottom).unwrap();
        assert_eq!(result.into_raw(), vec![0, 128, 255]);
    }

    #[test]
    fn test_blend_dimension_mismatch() {
        let top = GrayImage::new(3, 2);
        let bottom = GrayImage::new(2, 3);

        let err = DivideBlendConfig::new().blend(&top, &bottom).unwrap_err();
        assert!(matches!(
            err,
            ImageSketchError::DimensionMismatch {
                left_width: 3,
                right_width: 2,
                ..
            }
        ));
    }
}
