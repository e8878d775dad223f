//! Init command implementation.
//!
//! Writes a default `backdrop.yaml` manifest and a presets file holding
//! the default preset, then creates the directories they name.

use std::fs;
use std::path::Path;

use clap::Args;

use crate::discovery::{Manifest, Workspace, MANIFEST_FILENAME};
use crate::error::{BackdropError, Result};
use crate::output::{display_path, plural, Printer};
use crate::store::PresetRepository;
use crate::types::DEFAULT_PRESET;

/// Initialize a backdrop workspace
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing backdrop.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, ws: &Workspace, printer: &Printer) -> Result<()> {
    let manifest_path = ws.manifest_path();

    if manifest_path.exists() && !args.force {
        return Err(BackdropError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    create_dir(&ws.root)?;

    let ws = Workspace {
        root: ws.root.clone(),
        manifest: Manifest::default(),
        has_manifest: true,
    };

    fs::write(&manifest_path, ws.manifest.to_yaml()?).map_err(|e| BackdropError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;
    printer.success("Created", MANIFEST_FILENAME);

    // An existing presets file is kept; load() restores the default preset.
    let presets_file = ws.presets_file();
    let existed = presets_file.exists();
    let repo = ws.open_repository()?;
    repo.save()?;
    if !existed {
        printer.success("Created", &display_path(&presets_file));
    }

    create_dir(&ws.template_dir())?;
    create_dir(&repo.preset_dir(&ws.presets_dir(), DEFAULT_PRESET)?)?;

    printer.info(
        "Presets",
        &format!(
            "{} in {}",
            plural(repo.len(), "preset", "presets"),
            display_path(&presets_file)
        ),
    );

    Ok(())
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| BackdropError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create directory: {}", e),
    })
}
