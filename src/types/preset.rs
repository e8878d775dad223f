//! Preset configuration.

use serde::{Deserialize, Serialize};

use super::{Opacity, TintColour};

/// Name of the preset that always exists and can never be deleted.
pub const DEFAULT_PRESET: &str = "standard";

/// Directory code of the default preset.
pub const DEFAULT_PRESET_CODE: &str = "standard";

/// Settings for one named preset.
///
/// Field names on disk follow the established presets file format, and
/// keys missing from older files fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetConfig {
    /// Directory name holding the preset's images.
    pub code: String,

    #[serde(rename = "color", default)]
    pub tint: TintColour,

    /// Composite the processed background behind gallery thumbnails.
    #[serde(rename = "mostrar_fundo", default)]
    pub show_background: bool,

    #[serde(rename = "opacidade", default)]
    pub opacity: Opacity,

    /// Skip tinting and keep the background's own colours.
    #[serde(default)]
    pub no_color: bool,
}

impl PresetConfig {
    /// A preset with default settings stored under `code`.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            tint: TintColour::WHITE,
            show_background: false,
            opacity: Opacity::NONE,
            no_color: false,
        }
    }

    /// The built-in default preset.
    pub fn default_preset() -> Self {
        Self::new(DEFAULT_PRESET_CODE)
    }
}
