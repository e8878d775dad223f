//! Core value types for backdrop.

mod colour;
mod opacity;
mod preset;
mod role;

pub use colour::TintColour;
pub use opacity::Opacity;
pub use preset::{PresetConfig, DEFAULT_PRESET, DEFAULT_PRESET_CODE};
pub use role::{is_image_file, ImageRole, BACKGROUND_FILENAME, IMAGE_EXTENSIONS, SHADE_FILENAME};
