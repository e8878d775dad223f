//! Replace command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{scan_preset_dir, Workspace};
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::store::images::replace_image;
use crate::types::{ImageRole, SHADE_FILENAME};

use super::images::lookup;

/// Replace an image in a preset, keeping its name
#[derive(Args, Debug)]
pub struct ReplaceArgs {
    /// Preset name
    pub preset: String,

    /// File name of the image to replace
    pub image: String,

    /// New image file
    pub file: PathBuf,
}

pub fn run(args: ReplaceArgs, ws: &Workspace, printer: &Printer) -> Result<()> {
    let repo = ws.open_repository()?;
    let dir = ws.preset_dir(&repo, &args.preset)?;
    let images = scan_preset_dir(&dir);
    let target = lookup(&images, &args.image, &args.preset)?;

    let written = replace_image(target, &args.file)?;
    printer.success("Replaced", &display_path(&written));

    if target.role == ImageRole::Background {
        printer.info("Regenerated", SHADE_FILENAME);
    }

    Ok(())
}
