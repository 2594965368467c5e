use image::{Rgb, RgbImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("data")?;

    // Gradient background with a dark ring, enough structure for visible strokes
    let img = RgbImage::from_fn(800, 600, |x, y| {
        let (dx, dy) = (x as f32 - 400.0, y as f32 - 300.0);
        let dist = (dx * dx + dy * dy).sqrt();

        if (150.0..160.0).contains(&dist) {
            Rgb([30, 30, 60])
        } else {
            Rgb([
                (x * 255 / 800) as u8,
                (y * 255 / 600) as u8,
                ((x + y) * 255 / 1400) as u8,
            ])
        }
    });

    img.save("data/test.png")?;
    println!("Created data/test.png");

    Ok(())
}
