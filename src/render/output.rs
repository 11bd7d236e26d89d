use crate::error::Error;
use crate::render::exr;
use crate::render::film;

use image::{Rgb, RgbImage};
use std::path::Path;
use tracing::info;

/// Converts the film to an 8-bit image, clamping each channel to [0, 1]. The top image row is
/// the top of the film.
pub fn to_rgb8(film: &film::Film) -> RgbImage {
    RgbImage::from_fn(film.width as u32, film.height as u32, |x, y| {
        let row = film.height - 1 - y as usize;
        let color = film.pixel(x as usize, row).clamped_unit();
        Rgb([
            (color.x * 255.0).round() as u8,
            (color.y * 255.0).round() as u8,
            (color.z * 255.0).round() as u8,
        ])
    })
}

/// Writes the film to `path`, choosing the format from the extension: `.exr` keeps the raw
/// float values, `.png` clamps them.
pub fn write_image<P: AsRef<Path>>(path: P, film: &film::Film) -> Result<(), Error> {
    let path = path.as_ref();
    let extension = path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("exr") => exr::write(path, film)?,
        Some("png") => to_rgb8(film).save(path)?,
        _ => {
            return Err(Error::config(
                format!("unsupported output extension for {}; use .png or .exr", path.display())));
        }
    }
    info!(path = %path.display(), "wrote image");
    Ok(())
}
