//! Image decoding and PNG output.

use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::discovery::PresetImages;
use crate::error::{BackdropError, Result};
use crate::output::Printer;

/// Decode an image file of any supported format.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| BackdropError::ImageRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Decode the preset's shade, if it has one.
///
/// An unreadable shade is reported as a warning and treated as missing,
/// so every render falls back to solid black the same way.
pub(super) fn load_shade(images: &PresetImages, printer: &Printer) -> Option<DynamicImage> {
    let shade = images.shade.as_ref()?;
    match open_image(&shade.path) {
        Ok(img) => Some(img),
        Err(e) => {
            printer.warning("Shade", &format!("{}; using solid black", e));
            None
        }
    }
}

/// Write an RGBA image as PNG, regardless of the path's extension.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| BackdropError::ImageWrite {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}
