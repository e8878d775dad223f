//! Luminance and duotone colorize.

use image::{Rgba, RgbaImage};

use crate::types::TintColour;

/// ITU-R 601-2 luma of an RGB pixel, in 16.16 fixed point with rounding.
pub fn luminance(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb.map(u32::from);
    ((r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16) as u8
}

/// Lookup table mapping luminance 0 to black and 255 to `tint`, linearly.
///
/// Each entry is `l * c / 255` with integer division, so the top entry is
/// exactly the tint.
pub fn colorize_lut(tint: TintColour) -> [[u8; 3]; 256] {
    let mut lut = [[0u8; 3]; 256];
    for (l, entry) in lut.iter_mut().enumerate() {
        *entry = tint
            .channels()
            .map(|c| (l as u32 * u32::from(c) / 255) as u8);
    }
    lut
}

/// Colorize an image: luminance is mapped through [`colorize_lut`] and
/// the result is fully opaque. Source alpha is ignored.
pub fn colorize(image: &RgbaImage, tint: TintColour) -> RgbaImage {
    let lut = colorize_lut(tint);

    let mut out = RgbaImage::new(image.width(), image.height());
    for (dst, src) in out.pixels_mut().zip(image.pixels()) {
        let [r, g, b, _] = src.0;
        let [tr, tg, tb] = lut[luminance([r, g, b]) as usize];
        *dst = Rgba([tr, tg, tb, 255]);
    }
    out
}
