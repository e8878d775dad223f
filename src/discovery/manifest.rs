//! Workspace manifest (backdrop.yaml) parsing.
//!
//! The manifest defines where the presets file, preset directories,
//! template images, export output and session logs live, plus the
//! default preview and thumbnail sizes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BackdropError, Result};

/// Thumbnail size used by the gallery.
pub const THUMBNAIL_SIZE: (u32, u32) = (146, 96);

/// Size of the colour-editor preview.
pub const PREVIEW_SIZE: (u32, u32) = (400, 263);

/// Workspace manifest loaded from backdrop.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// JSON file holding the preset table.
    pub presets_file: PathBuf,

    /// Directory containing one sub-directory per preset code.
    pub presets_dir: PathBuf,

    /// Images copied into every newly created preset.
    pub template_dir: PathBuf,

    /// Default export directory.
    pub output: PathBuf,

    /// Gallery thumbnail size as `[width, height]`.
    pub thumbnail: (u32, u32),

    /// Preview size as `[width, height]`.
    pub preview: (u32, u32),

    /// Number of thumbnail columns in a gallery sheet.
    pub gallery_columns: u32,

    /// Session log directory; `null` disables session logs.
    pub log_dir: Option<PathBuf>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            presets_file: PathBuf::from("presets.json"),
            presets_dir: PathBuf::from("."),
            template_dir: PathBuf::from("raws"),
            output: PathBuf::from("dist"),
            thumbnail: THUMBNAIL_SIZE,
            preview: PREVIEW_SIZE,
            gallery_columns: 5,
            log_dir: Some(PathBuf::from("logs")),
        }
    }
}

impl Manifest {
    /// Load manifest from a backdrop.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BackdropError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Self = serde_yaml::from_str(content).map_err(|e| BackdropError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check backdrop.yaml syntax".to_string()),
        })?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Serialize the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| BackdropError::Parse {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    fn validate(&self) -> Result<()> {
        let sizes = [("thumbnail", self.thumbnail), ("preview", self.preview)];
        for (key, (w, h)) in sizes {
            if w == 0 || h == 0 {
                return Err(BackdropError::Config {
                    message: format!("{} size must be non-zero, got {}x{}", key, w, h),
                    help: Some(format!("Set {} to [width, height] in backdrop.yaml", key)),
                });
            }
        }

        if self.gallery_columns == 0 {
            return Err(BackdropError::config("gallery_columns must be at least 1"));
        }

        Ok(())
    }
}
