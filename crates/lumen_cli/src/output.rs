//! Writing rendered images to disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use lumen_renderer::{color_to_rgb, ImageBuffer};

/// Write an image as plain-text PPM (P3).
///
/// Rows are written top to bottom, one `r g b` triplet per line.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> io::Result<()> {
    write!(writer, "P3\n{} {}\n255\n", image.width, image.height)?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    writer.flush()
}

/// Save an image, choosing the format from the file extension.
///
/// `.ppm` is written as text; anything else goes through the `image` encoders.
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<()> {
    let is_ppm = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_ppm(image, BufWriter::new(file))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    } else {
        let buffer = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
            .context("Image buffer size does not match its dimensions")?;
        buffer
            .save(path)
            .with_context(|| format!("Failed to encode {}", path.display()))?;
    }

    log::info!("Saved {}", path.display());
    Ok(())
}
