//! Workspace discovery and preset directory scanning.
//!
//! A workspace is a directory with an optional `backdrop.yaml` manifest.
//! All paths named by the manifest are resolved against the workspace root.
//!
//! # Example
//!
//! ```ignore
//! use backdrop::discovery::{scan_preset_dir, Workspace};
//!
//! let ws = Workspace::open(".")?;
//! let repo = ws.open_repository()?;
//! let images = scan_preset_dir(&ws.preset_dir(&repo, "standard")?);
//! println!("{} images", images.len());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::{BackdropError, Result};
use crate::store::PresetRepository;

pub use manifest::{Manifest, PREVIEW_SIZE, THUMBNAIL_SIZE};
pub use scanner::{scan_preset_dir, PresetImage, PresetImages};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "backdrop.yaml";

/// A workspace root and its manifest.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// The workspace root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no backdrop.yaml was found).
    pub manifest: Manifest,

    /// Whether a backdrop.yaml manifest was found.
    pub has_manifest: bool,
}

impl Workspace {
    /// Open the workspace at `root`, loading `backdrop.yaml` if present.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let manifest_path = root.join(MANIFEST_FILENAME);

        let (manifest, has_manifest) = if manifest_path.exists() {
            (Manifest::load(&manifest_path)?, true)
        } else {
            (Manifest::default(), false)
        };

        Ok(Self {
            root,
            manifest,
            has_manifest,
        })
    }

    /// Resolve a manifest path against the workspace root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILENAME)
    }

    pub fn presets_file(&self) -> PathBuf {
        self.resolve(&self.manifest.presets_file)
    }

    pub fn presets_dir(&self) -> PathBuf {
        self.resolve(&self.manifest.presets_dir)
    }

    pub fn template_dir(&self) -> PathBuf {
        self.resolve(&self.manifest.template_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.manifest.output)
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.manifest.log_dir.as_deref().map(|p| self.resolve(p))
    }

    /// Load the preset table named by the manifest.
    pub fn open_repository(&self) -> Result<PresetRepository> {
        PresetRepository::load(&self.presets_file())
    }

    /// Directory of a named preset, which must exist on disk.
    pub fn preset_dir(&self, repo: &PresetRepository, name: &str) -> Result<PathBuf> {
        let dir = repo.preset_dir(&self.presets_dir(), name)?;
        if !dir.is_dir() {
            return Err(BackdropError::Config {
                message: format!(
                    "preset '{}' has no image directory at {}",
                    name,
                    dir.display()
                ),
                help: Some("Recreate the preset or restore its directory".to_string()),
            });
        }
        Ok(dir)
    }
}
