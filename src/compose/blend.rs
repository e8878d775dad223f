//! Per-pixel blend and masked paste for RGBA8 buffers.

use image::RgbaImage;

/// Linear interpolation between two equally sized images, per channel
/// including alpha: `a + alpha * (b - a)`, truncated.
///
/// `alpha` is clamped to `0.0..=1.0`.
pub fn blend(a: &RgbaImage, b: &RgbaImage, alpha: f32) -> RgbaImage {
    debug_assert_eq!(a.dimensions(), b.dimensions());
    let alpha = alpha.clamp(0.0, 1.0);

    let mut out = a.clone();
    for (dst, src) in out.pixels_mut().zip(b.pixels()) {
        for (d, s) in dst.0.iter_mut().zip(src.0) {
            *d = lerp_channel(*d, s, alpha);
        }
    }
    out
}

fn lerp_channel(a: u8, b: u8, alpha: f32) -> u8 {
    (f32::from(a) + alpha * (f32::from(b) - f32::from(a))) as u8
}

/// Paste `top` onto `base` using `top`'s own alpha as the mask.
///
/// Every channel, alpha included, becomes `top * m + base * (255 - m)`
/// divided by 255 with rounding. Both images must have the same size.
pub fn paste_masked(base: &mut RgbaImage, top: &RgbaImage) {
    debug_assert_eq!(base.dimensions(), top.dimensions());

    for (dst, src) in base.pixels_mut().zip(top.pixels()) {
        let mask = u32::from(src.0[3]);
        if mask == 0 {
            continue;
        }
        for (d, s) in dst.0.iter_mut().zip(src.0) {
            *d = div255(u32::from(s) * mask + u32::from(*d) * (255 - mask));
        }
    }
}

/// Rounded division by 255 for values up to `255 * 255`.
fn div255(v: u32) -> u8 {
    let t = v + 128;
    (((t >> 8) + t) >> 8) as u8
}
