//! Preset directory scanner.
//!
//! Lists the images of one preset directory and tags each with its
//! [`ImageRole`]. Roles are decided here once; later code matches on the
//! tag instead of comparing file names.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::types::ImageRole;

/// An image file inside a preset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetImage {
    pub path: PathBuf,
    /// File name including extension.
    pub name: String,
    pub role: ImageRole,
}

impl PresetImage {
    /// File name without its extension.
    pub fn stem(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name)
    }
}

/// Role-tagged images of one preset directory.
#[derive(Debug, Clone, Default)]
pub struct PresetImages {
    pub background: Option<PresetImage>,
    pub shade: Option<PresetImage>,
    /// Overlays sorted by file name.
    pub overlays: Vec<PresetImage>,
}

impl PresetImages {
    /// Images shown in the gallery and exported: background first, then
    /// overlays. The shade is never included.
    pub fn gallery(&self) -> impl Iterator<Item = &PresetImage> {
        self.background.iter().chain(self.overlays.iter())
    }

    /// Find a gallery image by file name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&PresetImage> {
        self.gallery().find(|img| img.name.eq_ignore_ascii_case(name))
    }

    /// Number of gallery images.
    pub fn len(&self) -> usize {
        self.gallery().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scan a preset directory.
///
/// Only direct children are considered. A missing directory yields an
/// empty result.
pub fn scan_preset_dir(dir: &Path) -> PresetImages {
    let mut result = PresetImages::default();

    if !dir.is_dir() {
        return result;
    }

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(role) = ImageRole::of(path) else {
            continue;
        };

        let image = PresetImage {
            path: path.to_path_buf(),
            name: entry.file_name().to_string_lossy().into_owned(),
            role,
        };

        match role {
            ImageRole::Background if result.background.is_none() => {
                result.background = Some(image)
            }
            ImageRole::Shade if result.shade.is_none() => result.shade = Some(image),
            ImageRole::Overlay => result.overlays.push(image),
            // A second file differing only in case from a reserved name
            _ => {}
        }
    }

    result
}
