use anyhow::{Context, Result};
use image::GenericImageView;
use image_sketch::{SketchConverter, save_sketch};
use std::{path::PathBuf, time::Instant};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let input_file = PathBuf::from("./data/test.png");
    let output_dir = PathBuf::from("./tmp");
    std::fs::create_dir_all(&output_dir)?;

    let img = image::open(&input_file)
        .with_context(|| format!("run create_test_image first: {}", input_file.display()))?;
    let (width, height) = img.dimensions();
    log::info!("Image size: {}x{}", width, height);

    let converter = SketchConverter::new();
    let start = Instant::now();
    let bytes = converter.convert_file(&input_file)?;
    log::info!("Sketch spent: {:?}", start.elapsed());

    let output_path = output_dir.join("sketch.png");
    save_sketch(&bytes, &output_path)?;

    Ok(())
}
