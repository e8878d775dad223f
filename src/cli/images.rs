//! Images command implementation.
//!
//! Lists the images of a preset with their role and size.

use clap::Args;

use crate::discovery::{scan_preset_dir, PresetImage, PresetImages, Workspace};
use crate::error::{BackdropError, Result};
use crate::output::{display_path, plural, Printer};

/// List the images of a preset
#[derive(Args, Debug)]
pub struct ImagesArgs {
    /// Preset name
    pub preset: String,
}

pub fn run(args: ImagesArgs, ws: &Workspace, printer: &Printer) -> Result<()> {
    let repo = ws.open_repository()?;
    let dir = ws.preset_dir(&repo, &args.preset)?;
    let images = scan_preset_dir(&dir);

    printer.status(
        "Scanned",
        &format!(
            "{} ({})",
            display_path(&dir),
            plural(images.len(), "image", "images")
        ),
    );

    for image in images.shade.iter().chain(images.gallery()) {
        let size = match image::image_dimensions(&image.path) {
            Ok((w, h)) => format!("{}x{}", w, h),
            Err(_) => "unreadable".to_string(),
        };
        printer.info(
            image.role.name(),
            &format!("{} {}", image.name, printer.dim(&size)),
        );
    }

    if images.background.is_none() {
        printer.warning("Missing", "no background image (g1.png)");
    }

    Ok(())
}

/// Look up an image by file name, including the shade.
pub(super) fn lookup<'a>(images: &'a PresetImages, name: &str, preset: &str) -> Result<&'a PresetImage> {
    images
        .shade
        .iter()
        .find(|shade| shade.name.eq_ignore_ascii_case(name))
        .or_else(|| images.find(name))
        .ok_or_else(|| BackdropError::Config {
            message: format!("preset '{}' has no image named '{}'", preset, name),
            help: Some(format!("Run `backdrop images {}` to list them", preset)),
        })
}
