use crate::{
    Effect, ImageEffect, ImageSketchError, ImageSketchResult,
    base_effect::grayscale,
    blend_effect::DivideBlendConfig,
    blur_effect::GaussianBlurConfig,
};
use image::{DynamicImage, GrayImage, ImageDecoder, ImageFormat, ImageReader};
use std::{fs, io::Cursor, path::Path, time::Instant};

/// Pencil-sketch converter.
///
/// Stateless: every call decodes, processes and encodes into its own
/// buffers, so one converter can be shared freely between threads.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct SketchConverter;

impl SketchConverter {
    pub const BLUR_KERNEL_SIZE: u32 = 111;
    pub const DIVIDE_SCALE: f32 = 256.0;

    pub fn new() -> Self {
        Self
    }

    /// Read an image file and return the PNG-encoded sketch.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> ImageSketchResult<Vec<u8>> {
        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ImageSketchError::NotFound(path.to_path_buf()),
            _ => ImageSketchError::Io(e),
        })?;

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        self.convert(&bytes)
    }

    /// Decode encoded image bytes and return the PNG-encoded sketch.
    pub fn convert(&self, bytes: &[u8]) -> ImageSketchResult<Vec<u8>> {
        let image = decode(bytes)?;
        let sketch = self.sketch(&image)?;
        encode_png(&sketch)
    }

    /// Render a decoded image as a grayscale sketch of the same size.
    pub fn sketch(&self, image: &DynamicImage) -> ImageSketchResult<GrayImage> {
        let start = Instant::now();

        let gray = grayscale(image);

        let mut blurred = gray.clone();
        for effect in [
            ImageEffect::Invert,
            ImageEffect::GaussianBlur(
                GaussianBlurConfig::new().with_ksize(Self::BLUR_KERNEL_SIZE),
            ),
            ImageEffect::Invert,
        ] {
            effect.apply(&mut blurred)?;
        }

        let sketch = DivideBlendConfig::new()
            .with_scale(Self::DIVIDE_SCALE)
            .blend(&gray, &blurred)?;

        log::debug!(
            "Sketched {}x{} image in {:?}",
            sketch.width(),
            sketch.height(),
            start.elapsed()
        );

        Ok(sketch)
    }
}

/// Decode encoded image bytes, rotating or flipping the pixels upright when
/// the file carries an EXIF orientation.
pub fn decode(bytes: &[u8]) -> ImageSketchResult<DynamicImage> {
    let mut decoder = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ImageSketchError::Decode(image::ImageError::IoError(e)))?
        .into_decoder()
        .map_err(ImageSketchError::Decode)?;

    let orientation = decoder.orientation().map_err(ImageSketchError::Decode)?;
    let mut image = DynamicImage::from_decoder(decoder).map_err(ImageSketchError::Decode)?;
    image.apply_orientation(orientation);

    Ok(image)
}

/// Encode a grayscale image as PNG into memory.
pub fn encode_png(image: &GrayImage) -> ImageSketchResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(ImageSketchError::Encode)?;

    Ok(buffer.into_inner())
}
