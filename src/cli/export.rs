//! Export command implementation.
//!
//! Writes every image of a preset, composited over its processed
//! background, to a flat directory of PNG files.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;

use crate::discovery::Workspace;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::export_preset;

/// Export a preset's images over its processed background
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Preset name
    pub preset: String,

    /// Output directory (default: <output>/<preset>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, ws: &Workspace, printer: &Printer) -> Result<()> {
    let start = Instant::now();
    let repo = ws.open_repository()?;
    let preset = repo.require(&args.preset)?;
    let dir = ws.preset_dir(&repo, &args.preset)?;
    let output = args
        .output
        .unwrap_or_else(|| ws.output_dir().join(&args.preset));

    let report = export_preset(&dir, preset, &output, printer)?;

    let elapsed = start.elapsed();
    let summary = format!(
        "{}/{} to {} in {:.2}s",
        report.succeeded,
        report.total,
        display_path(&output),
        elapsed.as_secs_f64()
    );
    if report.is_complete() {
        printer.success("Exported", &summary);
    } else {
        printer.warning("Exported", &summary);
    }

    Ok(())
}
