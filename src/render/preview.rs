//! Background preview.
//!
//! [`PreviewState`] holds the decoded layers of a preset and the settings
//! being tried out. Editing settings produces a new state; the preview
//! itself is a pure function of that state.

use std::path::Path;

use image::{imageops, DynamicImage, RgbaImage};

use crate::compose::{process_background, BackgroundSettings};
use crate::discovery::scan_preset_dir;
use crate::error::Result;
use crate::output::Printer;
use crate::types::PresetConfig;

use super::gallery::THUMBNAIL_FILTER;
use super::png::{load_shade, open_image};

/// Decoded layers and settings for a preview render.
#[derive(Debug, Clone)]
pub struct PreviewState {
    pub background: Option<DynamicImage>,
    pub shade: Option<DynamicImage>,
    pub settings: BackgroundSettings,
    pub size: (u32, u32),
}

impl PreviewState {
    /// Read the background and shade of a preset once.
    ///
    /// A missing background is not an error; the preview is then empty. An
    /// unreadable shade is warned about and replaced by solid black.
    pub fn load(
        preset_dir: &Path,
        preset: &PresetConfig,
        size: (u32, u32),
        printer: &Printer,
    ) -> Result<Self> {
        let images = scan_preset_dir(preset_dir);

        let background = images
            .background
            .as_ref()
            .map(|bg| open_image(&bg.path))
            .transpose()?;
        let shade = load_shade(&images, printer);

        Ok(Self {
            background,
            shade,
            settings: BackgroundSettings::from(preset),
            size,
        })
    }

    /// A copy of this state with different settings.
    pub fn with_settings(&self, settings: BackgroundSettings) -> Self {
        Self {
            settings,
            ..self.clone()
        }
    }
}

/// Render the processed background at preview size.
///
/// Returns `None` when the preset has no background.
pub fn recompute_preview(state: &PreviewState) -> Option<RgbaImage> {
    let background = state.background.as_ref()?;
    let processed = process_background(background, &state.settings, state.shade.as_ref());

    let (width, height) = state.size;
    if processed.dimensions() == state.size {
        Some(processed)
    } else {
        Some(imageops::resize(&processed, width, height, THUMBNAIL_FILTER))
    }
}
