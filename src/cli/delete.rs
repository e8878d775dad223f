//! Delete command implementation.

use clap::Args;

use crate::discovery::Workspace;
use crate::error::Result;
use crate::output::Printer;

/// Delete a preset and its image directory
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Name of the preset to delete
    pub name: String,
}

pub fn run(args: DeleteArgs, ws: &Workspace, printer: &Printer) -> Result<()> {
    let mut repo = ws.open_repository()?;
    let removed = repo.delete(&args.name, &ws.presets_dir())?;

    printer.success(
        "Deleted",
        &format!("preset '{}' {}", args.name, printer.dim(&removed.code)),
    );
    Ok(())
}
