//! Background processing and overlay compositing.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

use crate::types::{Opacity, PresetConfig, TintColour};

use super::blend::{blend, paste_masked};
use super::tint::colorize;

/// Filter used whenever a layer is resized to match another.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// The settings that drive [`process_background`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackgroundSettings {
    pub tint: TintColour,
    pub opacity: Opacity,
    /// Keep the background's own colours instead of tinting.
    pub no_color: bool,
}

impl From<&PresetConfig> for BackgroundSettings {
    fn from(preset: &PresetConfig) -> Self {
        Self {
            tint: preset.tint,
            opacity: preset.opacity,
            no_color: preset.no_color,
        }
    }
}

/// Produce the processed background layer.
///
/// The background is tinted (unless `no_color` is set) and then, for a
/// non-zero opacity, blended toward `shade`. A shade of a different size
/// is resized to fit; without one, solid opaque black is used.
///
/// The result always has the background's dimensions.
pub fn process_background(
    background: &DynamicImage,
    settings: &BackgroundSettings,
    shade: Option<&DynamicImage>,
) -> RgbaImage {
    let rgba = background.to_rgba8();
    let tinted = if settings.no_color {
        rgba
    } else {
        colorize(&rgba, settings.tint)
    };

    if settings.opacity.is_zero() {
        return tinted;
    }

    let (width, height) = tinted.dimensions();
    let shade = match shade {
        Some(shade) => fit_to(shade.to_rgba8(), width, height),
        None => solid_black(width, height),
    };

    blend(&tinted, &shade, settings.opacity.alpha())
}

/// Draw `overlay` on top of the processed background.
///
/// With no overlay (the target is the background itself) the processed
/// background is returned as is. An overlay of a different size is
/// resized to the background's dimensions first.
pub fn composite_overlay(processed: &RgbaImage, overlay: Option<&RgbaImage>) -> RgbaImage {
    let mut out = processed.clone();

    if let Some(overlay) = overlay {
        let (width, height) = processed.dimensions();
        let overlay = if overlay.dimensions() == (width, height) {
            overlay.clone()
        } else {
            imageops::resize(overlay, width, height, RESAMPLE_FILTER)
        };
        paste_masked(&mut out, &overlay);
    }

    out
}

/// Resize `image` to exactly `width`x`height` unless it already matches.
pub fn fit_to(image: RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        image
    } else {
        imageops::resize(&image, width, height, RESAMPLE_FILTER)
    }
}

/// Fully opaque black image.
pub fn solid_black(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]))
}
