use anyhow::Result;
use image::{ColorType, GenericImageView, ImageFormat, Rgb, RgbImage};
use image_sketch::{ImageSketchError, SaveOptions, SketchConverter, export_sketch};
use tempfile::TempDir;

#[test]
fn export_writes_sketch_next_to_source() -> Result<()> {
    let dir = TempDir::new()?;
    let source = dir.path().join("red.png");
    RgbImage::from_pixel(4, 4, Rgb([255, 0, 0])).save(&source)?;

    let saved_to = export_sketch(&SketchConverter::new(), &source, &SaveOptions::new())?;
    assert_eq!(saved_to, dir.path().join("sketch_output.png"));

    let sketch = image::open(&saved_to)?;
    assert_eq!(sketch.dimensions(), (4, 4));
    assert_eq!(sketch.color(), ColorType::L8);
    assert!(sketch.to_luma8().pixels().all(|p| p[0] == 255));

    Ok(())
}

#[test]
fn export_keeps_png_bytes_under_custom_extension() -> Result<()> {
    let dir = TempDir::new()?;
    let source = dir.path().join("photo.bmp");
    RgbImage::from_fn(30, 20, |x, y| Rgb([(x * 8) as u8, (y * 12) as u8, 90])).save(&source)?;

    let options = SaveOptions::new()
        .with_output_name("drawing")
        .with_file_type("jpg");
    let saved_to = export_sketch(&SketchConverter::new(), &source, &options)?;
    assert_eq!(saved_to, dir.path().join("drawing.jpg"));

    let bytes = std::fs::read(&saved_to)?;
    assert_eq!(image::guess_format(&bytes)?, ImageFormat::Png);
    assert_eq!(
        image::load_from_memory(&bytes)?.dimensions(),
        (30, 20)
    );

    Ok(())
}

#[test]
fn export_reports_corrupt_source_without_writing() -> Result<()> {
    let dir = TempDir::new()?;
    let source = dir.path().join("broken.png");
    std::fs::write(&source, b"\x89PNG but not really")?;

    let err = export_sketch(&SketchConverter::new(), &source, &SaveOptions::new()).unwrap_err();
    assert!(matches!(err, ImageSketchError::Decode(_)));
    assert!(!dir.path().join("sketch_output.png").exists());

    Ok(())
}

#[test]
fn export_reports_missing_source() -> Result<()> {
    let dir = TempDir::new()?;
    let source = dir.path().join("nowhere.png");

    let err = export_sketch(&SketchConverter::new(), &source, &SaveOptions::new()).unwrap_err();
    assert!(matches!(err, ImageSketchError::NotFound(ref path) if *path == source));

    Ok(())
}
