//! Adding, replacing and removing images in a preset directory.
//!
//! Every image written here is re-encoded as PNG under a `.png` name.
//! Writing the background also rewrites the shade so the two always
//! share the same dimensions.

use std::fs;
use std::path::{Path, PathBuf};

use crate::compose::solid_black;
use crate::discovery::PresetImage;
use crate::error::{BackdropError, Result};
use crate::render::{open_image, write_png};
use crate::types::{ImageRole, BACKGROUND_FILENAME, SHADE_FILENAME};

/// Copy `source` into the preset directory as `<stem>.png`.
///
/// An existing file of that name is only replaced when `overwrite` is set.
pub fn add_image(preset_dir: &Path, source: &Path, overwrite: bool) -> Result<PathBuf> {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| BackdropError::config(format!("{} has no file name", source.display())))?;

    let target = preset_dir.join(format!("{}.png", stem));
    let role = ImageRole::of(&target);
    if role == Some(ImageRole::Shade) {
        return Err(shade_is_reserved());
    }

    if target.exists() && !overwrite {
        return Err(BackdropError::Config {
            message: format!("{} already exists in this preset", file_name(&target)),
            help: Some("Use --force to replace it".to_string()),
        });
    }

    let image = open_image(source)?.to_rgba8();
    write_png(&image, &target)?;

    if role == Some(ImageRole::Background) {
        write_shade(preset_dir, image.dimensions())?;
    }

    Ok(target)
}

/// Replace an existing image with `source`, keeping the original stem.
///
/// The new image is written as `<stem>.png` and the old file is removed.
/// A name that would land on the shade, or on another existing image, is
/// refused. If the original cannot be replaced it is left in place.
pub fn replace_image(target: &PresetImage, source: &Path) -> Result<PathBuf> {
    if target.role == ImageRole::Shade {
        return Err(shade_is_reserved());
    }

    let dir = parent_dir(&target.path)?;
    let dest = dir.join(format!("{}.png", target.stem()));
    let dest_role = ImageRole::of(&dest);
    if dest_role == Some(ImageRole::Shade) {
        return Err(shade_is_reserved());
    }
    if dest.exists() && !file_name(&dest).eq_ignore_ascii_case(&target.name) {
        return Err(BackdropError::Config {
            message: format!(
                "replacing {} would overwrite {}",
                target.name,
                file_name(&dest)
            ),
            help: Some("Remove or rename one of the two images first".to_string()),
        });
    }

    let image = open_image(source)?.to_rgba8();

    // Staged next to the target so the rename stays on one filesystem.
    let staged = dir.join(format!(".{}.png.tmp", target.stem()));
    if let Err(e) = write_png(&image, &staged) {
        let _ = fs::remove_file(&staged);
        return Err(e);
    }

    // Renaming onto the same name replaces it in one step.
    if target.path != dest {
        if let Err(e) = fs::remove_file(&target.path) {
            let _ = fs::remove_file(&staged);
            return Err(BackdropError::Io {
                path: target.path.clone(),
                message: format!("Failed to remove old image: {}", e),
            });
        }
    }
    fs::rename(&staged, &dest).map_err(|e| BackdropError::Io {
        path: dest.clone(),
        message: format!("Failed to move new image into place: {}", e),
    })?;

    if dest_role == Some(ImageRole::Background) {
        write_shade(dir, image.dimensions())?;
    }

    Ok(dest)
}

/// Delete an image from its preset directory.
pub fn remove_image(target: &PresetImage) -> Result<()> {
    if target.role == ImageRole::Shade {
        return Err(shade_is_reserved());
    }

    fs::remove_file(&target.path).map_err(|e| BackdropError::Io {
        path: target.path.clone(),
        message: format!("Failed to remove image: {}", e),
    })
}

/// Rewrite the shade to match the current background.
///
/// Returns `None` when the preset has no background.
pub fn regenerate_shade(preset_dir: &Path) -> Result<Option<PathBuf>> {
    let background = preset_dir.join(BACKGROUND_FILENAME);
    if !background.exists() {
        return Ok(None);
    }

    let size = image::image_dimensions(&background).map_err(|e| BackdropError::ImageRead {
        path: background.clone(),
        message: e.to_string(),
    })?;

    write_shade(preset_dir, size).map(Some)
}

fn write_shade(preset_dir: &Path, (width, height): (u32, u32)) -> Result<PathBuf> {
    let path = preset_dir.join(SHADE_FILENAME);
    write_png(&solid_black(width, height), &path)?;
    Ok(path)
}

fn parent_dir(path: &Path) -> Result<&Path> {
    path.parent()
        .ok_or_else(|| BackdropError::config(format!("{} has no parent directory", path.display())))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn shade_is_reserved() -> BackdropError {
    BackdropError::Config {
        message: format!("{} is the shade image and is managed automatically", SHADE_FILENAME),
        help: Some("Replace the background to regenerate it".to_string()),
    }
}
