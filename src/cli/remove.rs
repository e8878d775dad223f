//! Remove command implementation.

use clap::Args;

use crate::discovery::{scan_preset_dir, Workspace};
use crate::error::Result;
use crate::output::Printer;
use crate::store::images::remove_image;

use super::images::lookup;

/// Remove an image from a preset
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Preset name
    pub preset: String,

    /// File name of the image to remove
    pub image: String,
}

pub fn run(args: RemoveArgs, ws: &Workspace, printer: &Printer) -> Result<()> {
    let repo = ws.open_repository()?;
    let dir = ws.preset_dir(&repo, &args.preset)?;
    let images = scan_preset_dir(&dir);
    let target = lookup(&images, &args.image, &args.preset)?;

    remove_image(target)?;
    printer.success("Removed", &format!("{} from {}", target.name, args.preset));
    Ok(())
}
