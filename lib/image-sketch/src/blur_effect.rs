use crate::{Effect, ImageSketchError, ImageSketchResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::GrayImage;

// Fixed kernels used when sigma is derived from a small kernel size
const SMALL_KERNELS: [&[f32]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125],
];

/// Gaussian blur configuration
///
/// A `sigma` of zero (or below) derives the standard deviation from `ksize`.
/// The kernel is shrunk to fit images smaller than `ksize`, see
/// [`effective_kernel_size`].
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GaussianBlurConfig {
    #[derivative(Default(value = "111"))]
    ksize: u32,

    #[derivative(Default(value = "0.0"))]
    sigma: f64,
}

impl GaussianBlurConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ksize(&self) -> u32 {
        self.ksize
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Effect for GaussianBlurConfig {
    fn apply(&self, image: &mut GrayImage) -> ImageSketchResult<()> {
        if self.ksize == 0 || self.ksize % 2 == 0 {
            return Err(ImageSketchError::InvalidParameter(format!(
                "Gaussian kernel size must be odd and positive, got {}",
                self.ksize
            )));
        }

        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Ok(());
        }

        let ksize = effective_kernel_size(self.ksize, width, height);
        if ksize != self.ksize {
            log::debug!(
                "Gaussian kernel clamped from {} to {} for {}x{} image",
                self.ksize,
                ksize,
                width,
                height
            );
        }

        let kernel = gaussian_kernel(ksize, self.sigma);
        *image = separable_blur(image, &kernel);

        Ok(())
    }
}

/// Largest odd kernel size not exceeding `ksize` nor the smaller image side
pub fn effective_kernel_size(ksize: u32, width: u32, height: u32) -> u32 {
    let size = ksize.min(width.min(height));
    let size = if size % 2 == 0 { size.saturating_sub(1) } else { size };
    size.max(1)
}

/// Standard deviation for a kernel size when none is given
pub fn sigma_for_kernel_size(ksize: u32) -> f64 {
    0.3 * ((ksize as f64 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1D Gaussian kernel with `ksize` taps
pub fn gaussian_kernel(ksize: u32, sigma: f64) -> Vec<f32> {
    if sigma <= 0.0 && ksize <= 7 && ksize % 2 == 1 {
        return SMALL_KERNELS[(ksize / 2) as usize].to_vec();
    }

    let sigma = if sigma > 0.0 {
        sigma
    } else {
        sigma_for_kernel_size(ksize)
    };
    let scale = -0.5 / (sigma * sigma);
    let center = (ksize as f64 - 1.0) * 0.5;

    let weights: Vec<f64> = (0..ksize)
        .map(|i| {
            let x = i as f64 - center;
            (scale * x * x).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();

    weights.iter().map(|w| (w / sum) as f32).collect()
}

/// Mirror an out-of-range index back into `0..len` without repeating the edge
/// sample (`gfedcb|abcdefgh|gfedcba`).
pub fn reflect_101(index: i64, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }

    let last = len as i64 - 1;
    let mut index = index;
    while index < 0 || index > last {
        index = if index < 0 { -index } else { 2 * last - index };
    }

    index as usize
}

/// Source index for every tap position along an axis of `len` samples,
/// `len + 2 * radius` entries starting at `-radius`
pub fn reflected_indices(len: usize, radius: usize) -> Vec<usize> {
    (0..len + 2 * radius)
        .map(|i| reflect_101(i as i64 - radius as i64, len))
        .collect()
}

fn separable_blur(image: &GrayImage, kernel: &[f32]) -> GrayImage {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let radius = kernel.len() / 2;
    let src = image.as_raw();

    let columns = reflected_indices(width, radius);
    let mut padded = vec![0f32; columns.len()];
    let mut horizontal = vec![0f32; width * height];

    for (row, out) in src.chunks_exact(width).zip(horizontal.chunks_exact_mut(width)) {
        for (dst, &sx) in padded.iter_mut().zip(&columns) {
            *dst = row[sx] as f32;
        }

        for (x, value) in out.iter_mut().enumerate() {
            *value = kernel
                .iter()
                .zip(&padded[x..x + kernel.len()])
                .map(|(weight, sample)| weight * sample)
                .sum();
        }
    }

    let rows = reflected_indices(height, radius);
    let mut acc = vec![0f32; width];
    let mut blurred = GrayImage::new(width as u32, height as u32);

    for (y, out) in blurred.chunks_exact_mut(width).enumerate() {
        acc.fill(0.0);

        for (weight, &sy) in kernel.iter().zip(&rows[y..y + kernel.len()]) {
            let line = &horizontal[sy * width..(sy + 1) * width];
            for (sum, sample) in acc.iter_mut().zip(line) {
                *sum += weight * sample;
            }
        }

        for (dst, sum) in out.iter_mut().zip(&acc) {
            *dst = sum.round_ties_even().clamp(0.0, 255.0) as u8;
        }
    }

    blurred
}
