//! Preview command implementation.
//!
//! Renders the processed background at preview size. Setting overrides
//! are applied to the render only and never saved.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::compose::BackgroundSettings;
use crate::discovery::Workspace;
use crate::error::{BackdropError, Result};
use crate::output::{display_path, Printer};
use crate::render::{recompute_preview, write_png, PreviewState};
use crate::types::{Opacity, TintColour, BACKGROUND_FILENAME};

/// Render a preview of a preset's processed background
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Preset name
    pub preset: String,

    /// Output file (default: <output>/<preset>-preview.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Try a tint colour without saving it
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Try an opacity without saving it
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub opacity: Option<i64>,

    /// Try the no-colour mode without saving it
    #[arg(long, value_name = "BOOL")]
    pub no_color: Option<bool>,
}

pub fn run(args: PreviewArgs, ws: &Workspace, printer: &Printer) -> Result<()> {
    let repo = ws.open_repository()?;
    let preset = repo.require(&args.preset)?;
    let dir = ws.preset_dir(&repo, &args.preset)?;

    let saved = BackgroundSettings::from(preset);
    let settings = BackgroundSettings {
        tint: match &args.color {
            Some(hex) => TintColour::from_hex(hex)?,
            None => saved.tint,
        },
        opacity: args.opacity.map(Opacity::clamped).unwrap_or(saved.opacity),
        no_color: args.no_color.unwrap_or(saved.no_color),
    };

    let state =
        PreviewState::load(&dir, preset, ws.manifest.preview, printer)?.with_settings(settings);
    let preview = recompute_preview(&state).ok_or_else(|| BackdropError::Config {
        message: format!("preset '{}' has no background image", args.preset),
        help: Some(format!(
            "Add one with `backdrop add {} <file>` named {}",
            args.preset, BACKGROUND_FILENAME
        )),
    })?;

    let output = args
        .output
        .unwrap_or_else(|| ws.output_dir().join(format!("{}-preview.png", args.preset)));
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| BackdropError::ImageWrite {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    write_png(&preview, &output)?;

    printer.success(
        "Wrote",
        &format!(
            "{} {}",
            display_path(&output),
            printer.dim(&format!("({} opacity {})", settings.tint, settings.opacity))
        ),
    );
    Ok(())
}
