//! Add command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::Workspace;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::store::images::add_image;
use crate::types::{ImageRole, SHADE_FILENAME};

/// Add an image to a preset (converted to PNG)
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Preset name
    pub preset: String,

    /// Image file to add
    pub file: PathBuf,

    /// Overwrite an image with the same name
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: AddArgs, ws: &Workspace, printer: &Printer) -> Result<()> {
    let repo = ws.open_repository()?;
    let dir = ws.preset_dir(&repo, &args.preset)?;

    let added = add_image(&dir, &args.file, args.force)?;
    printer.success("Added", &display_path(&added));

    if ImageRole::of(&added) == Some(ImageRole::Background) {
        printer.info("Generated", SHADE_FILENAME);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_add_background_generates_shade() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("standard")).unwrap();
        let source = dir.path().join("g1.png");
        RgbaImage::from_pixel(6, 4, Rgba([10, 20, 30, 255]))
            .save(&source)
            .unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        run(
            AddArgs {
                preset: "standard".to_string(),
                file: source,
                force: false,
            },
            &ws,
            &Printer::new(),
        )
        .unwrap();

        assert!(dir.path().join("standard/g1.png").exists());
        assert_eq!(
            image::image_dimensions(dir.path().join("standard/black.png")).unwrap(),
            (6, 4)
        );
    }
}
