use crate::{ImageSketchResult, SketchConverter};
use derivative::Derivative;
use derive_setters::Setters;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_OUTPUT_NAME: &str = "sketch_output";
pub const DEFAULT_FILE_TYPE: &str = "png";

/// Where a sketch is written relative to its source image.
///
/// Blank values fall back to the defaults. The file type only names the
/// file, the written bytes are always PNG.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_", into)]
#[non_exhaustive]
pub struct SaveOptions {
    #[derivative(Default(value = "DEFAULT_OUTPUT_NAME.to_string()"))]
    output_name: String,

    #[derivative(Default(value = "DEFAULT_FILE_TYPE.to_string()"))]
    file_type: String,
}

impl SaveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_name(&self) -> &str {
        match self.output_name.trim() {
            "" => DEFAULT_OUTPUT_NAME,
            name => name,
        }
    }

    pub fn file_type(&self) -> &str {
        match self.file_type.trim().trim_start_matches('.') {
            "" => DEFAULT_FILE_TYPE,
            ext => ext,
        }
    }

    /// `<source dir>/<output_name>.<file_type>`
    pub fn output_path<P: AsRef<Path>>(&self, source: P) -> PathBuf {
        let dir = match source.as_ref().parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        dir.join(format!("{}.{}", self.output_name(), self.file_type()))
    }
}

pub fn save_sketch<P: AsRef<Path>>(bytes: &[u8], path: P) -> ImageSketchResult<()> {
    let path = path.as_ref();
    fs::write(path, bytes)?;
    log::info!("Sketch saved at: {}", path.display());
    Ok(())
}

/// Convert `source` and write the sketch next to it. Nothing is written when
/// the conversion fails.
pub fn export_sketch<P: AsRef<Path>>(
    converter: &SketchConverter,
    source: P,
    options: &SaveOptions,
) -> ImageSketchResult<PathBuf> {
    let source = source.as_ref();
    let bytes = converter.convert_file(source)?;

    let output_path = options.output_path(source);
    save_sketch(&bytes, &output_path)?;

    Ok(output_path)
}
