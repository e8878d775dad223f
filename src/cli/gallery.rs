//! Gallery command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::Workspace;
use crate::error::{BackdropError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{build_thumbnails, pack_gallery, write_png};

/// Padding around gallery tiles, in pixels.
const TILE_PADDING: u32 = 4;

/// Write a contact sheet of preset thumbnails
#[derive(Args, Debug)]
pub struct GalleryArgs {
    /// Preset name
    pub preset: String,

    /// Output file (default: <output>/<preset>-gallery.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Thumbnails per row (default from backdrop.yaml)
    #[arg(long)]
    pub columns: Option<u32>,
}

pub fn run(args: GalleryArgs, ws: &Workspace, printer: &Printer) -> Result<()> {
    let repo = ws.open_repository()?;
    let preset = repo.require(&args.preset)?;
    let dir = ws.preset_dir(&repo, &args.preset)?;
    let output = args
        .output
        .unwrap_or_else(|| ws.output_dir().join(format!("{}-gallery.png", args.preset)));
    let columns = args.columns.unwrap_or(ws.manifest.gallery_columns);

    let thumbs = build_thumbnails(&dir, preset, ws.manifest.thumbnail, printer)?;
    let sheet = pack_gallery(&thumbs, columns, TILE_PADDING);

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| BackdropError::ImageWrite {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    write_png(&sheet, &output)?;

    printer.success(
        "Wrote",
        &format!(
            "{} ({})",
            display_path(&output),
            plural(thumbs.len(), "thumbnail", "thumbnails")
        ),
    );
    Ok(())
}
