//! New command implementation.

use clap::Args;

use crate::discovery::Workspace;
use crate::error::Result;
use crate::output::{display_path, Printer};

/// Create a preset with default settings
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Name of the new preset
    pub name: String,
}

pub fn run(args: NewArgs, ws: &Workspace, printer: &Printer) -> Result<()> {
    let mut repo = ws.open_repository()?;
    let presets_dir = ws.presets_dir();

    let code = repo
        .create(&args.name, &presets_dir, &ws.template_dir())?
        .code
        .clone();

    printer.success(
        "Created",
        &format!(
            "preset '{}' in {}",
            args.name.trim(),
            display_path(&presets_dir.join(&code))
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_new_copies_template_images() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("raws")).unwrap();
        fs::write(dir.path().join("raws/g1.png"), b"template").unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        run(NewArgs { name: "sunset".to_string() }, &ws, &Printer::new()).unwrap();

        let repo = ws.open_repository().unwrap();
        let preset_dir = ws.preset_dir(&repo, "sunset").unwrap();
        assert_eq!(fs::read(preset_dir.join("g1.png")).unwrap(), b"template");
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let dir = tempdir().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        run(NewArgs { name: "dup".to_string() }, &ws, &Printer::new()).unwrap();
        assert!(run(NewArgs { name: "dup".to_string() }, &ws, &Printer::new()).is_err());
    }
}
