//! Preset store.
//!
//! [`PresetRepository`] owns the table of named presets and the JSON file
//! it is persisted to. It is the only place the table changes, and every
//! change is written back to disk immediately. The compositor never sees
//! the repository; callers hand it plain settings instead.
//!
//! # Example
//!
//! ```ignore
//! use backdrop::store::PresetRepository;
//!
//! let mut repo = PresetRepository::load(Path::new("presets.json"))?;
//! repo.create("sunset", Path::new("."), Path::new("raws"))?;
//! repo.set_tint("sunset", "#FF8800")?;
//! ```

mod code;
pub mod images;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::{BackdropError, Result};
use crate::types::{Opacity, PresetConfig, TintColour, DEFAULT_PRESET, DEFAULT_PRESET_CODE};

pub use code::{generate_code, unique_code, CODE_LEN};

/// The named preset table and the file backing it.
#[derive(Debug, Clone)]
pub struct PresetRepository {
    path: PathBuf,
    presets: BTreeMap<String, PresetConfig>,
}

impl PresetRepository {
    /// Load the table from `path`.
    ///
    /// A missing file yields a table holding only the default preset.
    /// Keys missing from older files are filled with their defaults, and
    /// the default preset is restored if the file lacks it.
    ///
    /// Every code must be a distinct single directory name, and the
    /// default preset must keep its fixed code.
    pub fn load(path: &Path) -> Result<Self> {
        let presets = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| BackdropError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to read presets: {}", e),
            })?;
            parse_presets(&content)?
        } else {
            BTreeMap::new()
        };

        let mut repo = Self {
            path: path.to_path_buf(),
            presets,
        };
        repo.presets
            .entry(DEFAULT_PRESET.to_string())
            .or_insert_with(PresetConfig::default_preset);
        check_codes(&repo.presets)?;

        Ok(repo)
    }

    /// File the table is saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the whole presets file.
    pub fn save(&self) -> Result<()> {
        let json = self.to_json()?;
        fs::write(&self.path, json).map_err(|e| BackdropError::Io {
            path: self.path.clone(),
            message: format!("Failed to write presets: {}", e),
        })
    }

    /// The table as pretty JSON with four-space indentation.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

        self.presets
            .serialize(&mut serializer)
            .map_err(|e| BackdropError::Parse {
                message: format!("Failed to serialize presets: {}", e),
                help: None,
            })?;

        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn get(&self, name: &str) -> Option<&PresetConfig> {
        self.presets.get(name)
    }

    /// Like [`get`](Self::get), but an unknown name is a `Config` error.
    pub fn require(&self, name: &str) -> Result<&PresetConfig> {
        self.presets.get(name).ok_or_else(|| unknown_preset(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// All presets: the default first, then the rest by name.
    pub fn list(&self) -> Vec<(&str, &PresetConfig)> {
        let default = self
            .presets
            .get_key_value(DEFAULT_PRESET)
            .map(|(k, v)| (k.as_str(), v));
        let rest = self
            .presets
            .iter()
            .filter(|(k, _)| k.as_str() != DEFAULT_PRESET)
            .map(|(k, v)| (k.as_str(), v));

        default.into_iter().chain(rest).collect()
    }

    /// Directory holding a preset's images.
    pub fn preset_dir(&self, presets_dir: &Path, name: &str) -> Result<PathBuf> {
        Ok(presets_dir.join(&self.require(name)?.code))
    }

    /// Create a preset with default settings.
    ///
    /// A fresh code is generated, its directory is created under
    /// `presets_dir`, and every file in `template_dir` (if it exists) is
    /// copied into it.
    pub fn create(
        &mut self,
        name: &str,
        presets_dir: &Path,
        template_dir: &Path,
    ) -> Result<&PresetConfig> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BackdropError::config("preset name must not be empty"));
        }
        if self.contains(name) {
            return Err(BackdropError::Config {
                message: format!("preset '{}' already exists", name),
                help: Some("Choose another name".to_string()),
            });
        }

        let code = unique_code(|code| {
            self.presets.values().any(|p| p.code == code) || presets_dir.join(code).exists()
        });

        let dir = presets_dir.join(&code);
        fs::create_dir_all(&dir).map_err(|e| BackdropError::Io {
            path: dir.clone(),
            message: format!("Failed to create preset directory: {}", e),
        })?;
        copy_template(template_dir, &dir)?;

        self.presets
            .insert(name.to_string(), PresetConfig::new(code));
        self.save()?;

        self.require(name)
    }

    /// Apply `f` to a preset and save.
    pub fn update(&mut self, name: &str, f: impl FnOnce(&mut PresetConfig)) -> Result<()> {
        let preset = self
            .presets
            .get_mut(name)
            .ok_or_else(|| unknown_preset(name))?;
        f(preset);
        self.save()
    }

    /// Set the tint from a `#RRGGBB` string. Invalid input changes nothing.
    pub fn set_tint(&mut self, name: &str, hex: &str) -> Result<TintColour> {
        let tint = TintColour::from_hex(hex)?;
        self.update(name, |p| p.tint = tint)?;
        Ok(tint)
    }

    /// Set the opacity, clamping into `0..=100`.
    pub fn set_opacity(&mut self, name: &str, percent: i64) -> Result<Opacity> {
        let opacity = Opacity::clamped(percent);
        self.update(name, |p| p.opacity = opacity)?;
        Ok(opacity)
    }

    pub fn set_no_color(&mut self, name: &str, no_color: bool) -> Result<()> {
        self.update(name, |p| p.no_color = no_color)
    }

    pub fn set_show_background(&mut self, name: &str, show: bool) -> Result<()> {
        self.update(name, |p| p.show_background = show)
    }

    /// Delete a preset and its image directory.
    ///
    /// The default preset cannot be deleted.
    pub fn delete(&mut self, name: &str, presets_dir: &Path) -> Result<PresetConfig> {
        if name == DEFAULT_PRESET {
            return Err(BackdropError::Config {
                message: format!("the default preset '{}' cannot be deleted", DEFAULT_PRESET),
                help: None,
            });
        }

        let code = self.require(name)?.code.clone();
        check_code(name, &code)?;
        if let Some((other, _)) = self
            .presets
            .iter()
            .find(|(other, p)| other.as_str() != name && p.code == code)
        {
            return Err(BackdropError::Config {
                message: format!(
                    "directory '{}' is shared with preset '{}' and was not removed",
                    code, other
                ),
                help: Some("Give each preset its own code in the presets file".to_string()),
            });
        }

        let removed = self
            .presets
            .remove(name)
            .ok_or_else(|| unknown_preset(name))?;

        let dir = presets_dir.join(&removed.code);
        if dir.exists() {
            fs::remove_dir_all(&dir).map_err(|e| BackdropError::Io {
                path: dir.clone(),
                message: format!("Failed to remove preset directory: {}", e),
            })?;
        }

        self.save()?;
        Ok(removed)
    }
}

fn parse_presets(content: &str) -> Result<BTreeMap<String, PresetConfig>> {
    serde_json::from_str(content).map_err(|e| BackdropError::Parse {
        message: format!("Invalid presets file: {}", e),
        help: Some("Each preset needs at least a \"code\" and a \"#RRGGBB\" \"color\"".to_string()),
    })
}

fn check_codes(presets: &BTreeMap<String, PresetConfig>) -> Result<()> {
    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();

    for (name, preset) in presets {
        check_code(name, &preset.code)?;

        if name == DEFAULT_PRESET && preset.code != DEFAULT_PRESET_CODE {
            return Err(BackdropError::Config {
                message: format!(
                    "the default preset '{}' must use code '{}', found '{}'",
                    DEFAULT_PRESET, DEFAULT_PRESET_CODE, preset.code
                ),
                help: None,
            });
        }

        if let Some(first) = seen.insert(preset.code.as_str(), name.as_str()) {
            return Err(BackdropError::Config {
                message: format!(
                    "presets '{}' and '{}' share the code '{}'",
                    first, name, preset.code
                ),
                help: Some("Give each preset its own code in the presets file".to_string()),
            });
        }
    }

    Ok(())
}

/// A code names exactly one directory directly under the presets directory.
fn check_code(name: &str, code: &str) -> Result<()> {
    let mut components = Path::new(code).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if single && !code.contains(['/', '\\']) {
        Ok(())
    } else {
        Err(BackdropError::Config {
            message: format!("preset '{}' has an invalid code {:?}", name, code),
            help: Some("A code must be a single directory name".to_string()),
        })
    }
}

fn copy_template(template_dir: &Path, dest: &Path) -> Result<()> {
    if !template_dir.is_dir() {
        return Ok(());
    }

    let entries = fs::read_dir(template_dir).map_err(|e| BackdropError::Io {
        path: template_dir.to_path_buf(),
        message: format!("Failed to read template directory: {}", e),
    })?;

    for entry in entries.filter_map(|e| e.ok()) {
        let source = entry.path();
        if !source.is_file() {
            continue;
        }
        let target = dest.join(entry.file_name());
        fs::copy(&source, &target).map_err(|e| BackdropError::Io {
            path: source.clone(),
            message: format!("Failed to copy template file: {}", e),
        })?;
    }

    Ok(())
}

fn unknown_preset(name: &str) -> BackdropError {
    BackdropError::Config {
        message: format!("unknown preset '{}'", name),
        help: Some("Run `backdrop list` to see available presets".to_string()),
    }
}
