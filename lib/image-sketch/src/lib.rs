//! # Image Sketch
//!
//! Turns a raster image into a pencil-sketch rendering.
//!
//! The sketch is built from a handful of single-channel effects:
//! grayscale, invert, Gaussian blur and a divide blend of the grayscale
//! layer over the inverted blur. [`SketchConverter`] chains them and
//! encodes the result as PNG.
//!
//! ```no_run
//! use image_sketch::{SaveOptions, SketchConverter, export_sketch};
//!
//! # fn main() -> image_sketch::ImageSketchResult<()> {
//! let options = SaveOptions::new().with_output_name("portrait_sketch");
//! let saved_to = export_sketch(&SketchConverter::new(), "photos/portrait.jpg", &options)?;
//! println!("{}", saved_to.display());
//! # Ok(())
//! # }
//! ```

pub mod base_effect;
pub mod blend_effect;
pub mod blur_effect;
pub mod save;
pub mod sketch;

pub use save::{SaveOptions, export_sketch, save_sketch};
pub use sketch::{SketchConverter, decode, encode_png};

use image::GrayImage;
use std::path::PathBuf;

pub type ImageSketchResult<T> = Result<T, ImageSketchError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageSketchError {
    #[error("Image file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("Failed to encode sketch: {0}")]
    Encode(#[source] image::ImageError),
    #[error("Image dimensions mismatch: {left_width}x{left_height} vs {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImageSketchError {
    /// The source could not be turned into pixels, either because the file is
    /// missing or because its bytes are not an image.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Decode(_))
    }

    pub fn is_encode_error(&self) -> bool {
        matches!(self, Self::Encode(_))
    }
}

pub trait Effect {
    fn apply(&self, image: &mut GrayImage) -> ImageSketchResult<()>;
}

#[derive(Debug, Clone)]
pub enum ImageEffect {
    Invert,
    GaussianBlur(blur_effect::GaussianBlurConfig),
}

impl Effect for ImageEffect {
    fn apply(&self, image: &mut GrayImage) -> ImageSketchResult<()> {
        match self {
            ImageEffect::Invert => base_effect::invert(image),
            ImageEffect::GaussianBlur(config) => config.apply(image),
        }
    }
}
