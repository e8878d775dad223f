//! Gallery thumbnails and contact sheets.
//!
//! Thumbnails are small previews of every gallery image in a preset. When
//! the preset shows its background, each overlay is drawn over the
//! processed background so the tiles look like the exported result.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::compose::{composite_overlay, process_background, BackgroundSettings};
use crate::discovery::{scan_preset_dir, PresetImages};
use crate::error::Result;
use crate::output::Printer;
use crate::types::{ImageRole, PresetConfig};

use super::png::{load_shade, open_image};

/// Filter for downsampling to thumbnail and preview sizes.
pub const THUMBNAIL_FILTER: FilterType = FilterType::CatmullRom;

/// Canvas colour behind gallery tiles.
pub const GALLERY_BACKGROUND: Rgba<u8> = Rgba([0xE5, 0xE5, 0xE5, 255]);

/// A rendered gallery tile.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    /// Source file name.
    pub name: String,
    pub role: ImageRole,
    pub image: RgbaImage,
}

/// Render a thumbnail for every gallery image of a preset.
///
/// Images that cannot be decoded are skipped with a warning.
pub fn build_thumbnails(
    preset_dir: &Path,
    preset: &PresetConfig,
    size: (u32, u32),
    printer: &Printer,
) -> Result<Vec<Thumbnail>> {
    let images = scan_preset_dir(preset_dir);
    let base = if preset.show_background {
        processed_thumbnail(&images, &BackgroundSettings::from(preset), size, printer)
    } else {
        None
    };

    let mut thumbs = Vec::with_capacity(images.len());
    for image in images.gallery() {
        let decoded = match open_image(&image.path) {
            Ok(img) => img,
            Err(e) => {
                printer.warning("Skipped", &e.to_string());
                continue;
            }
        };

        let tile = match (&base, image.role) {
            (Some(base), ImageRole::Background) => base.clone(),
            (Some(base), _) => {
                let overlay = downsample(&decoded.to_rgba8(), size);
                composite_overlay(base, Some(&overlay))
            }
            (None, _) => downsample(&decoded.to_rgba8(), size),
        };

        thumbs.push(Thumbnail {
            name: image.name.clone(),
            role: image.role,
            image: tile,
        });
    }

    Ok(thumbs)
}

/// Lay tiles out in a grid on a [`GALLERY_BACKGROUND`] canvas.
///
/// Every cell is as large as the largest tile. An empty input gives a
/// 1x1 canvas.
pub fn pack_gallery(thumbs: &[Thumbnail], columns: u32, padding: u32) -> RgbaImage {
    if thumbs.is_empty() {
        return RgbaImage::from_pixel(1, 1, GALLERY_BACKGROUND);
    }

    let columns = columns.max(1);
    let cell_w = thumbs.iter().map(|t| t.image.width()).max().unwrap_or(1);
    let cell_h = thumbs.iter().map(|t| t.image.height()).max().unwrap_or(1);

    let count = thumbs.len() as u32;
    let used_columns = columns.min(count);
    let rows = count.div_ceil(columns);

    let width = used_columns * cell_w + (used_columns + 1) * padding;
    let height = rows * cell_h + (rows + 1) * padding;
    let mut canvas = RgbaImage::from_pixel(width, height, GALLERY_BACKGROUND);

    for (idx, thumb) in thumbs.iter().enumerate() {
        let (col, row) = (idx as u32 % columns, idx as u32 / columns);
        let x = padding + col * (cell_w + padding);
        let y = padding + row * (cell_h + padding);
        imageops::overlay(&mut canvas, &thumb.image, x as i64, y as i64);
    }

    canvas
}

/// The processed background scaled to thumbnail size.
fn processed_thumbnail(
    images: &PresetImages,
    settings: &BackgroundSettings,
    size: (u32, u32),
    printer: &Printer,
) -> Option<RgbaImage> {
    let background = images.background.as_ref()?;
    let decoded = match open_image(&background.path) {
        Ok(img) => img,
        Err(e) => {
            printer.warning("Skipped", &e.to_string());
            return None;
        }
    };
    let shade = load_shade(images, printer);

    let processed = process_background(&decoded, settings, shade.as_ref());
    Some(downsample(&processed, size))
}

fn downsample(image: &RgbaImage, (width, height): (u32, u32)) -> RgbaImage {
    if image.dimensions() == (width, height) {
        image.clone()
    } else {
        imageops::resize(image, width, height, THUMBNAIL_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TintColour;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, img: RgbaImage) {
        img.save(dir.join(name)).unwrap();
    }

    fn thumb(name: &str, w: u32, h: u32, px: [u8; 4]) -> Thumbnail {
        Thumbnail {
            name: name.to_string(),
            role: ImageRole::Overlay,
            image: RgbaImage::from_pixel(w, h, Rgba(px)),
        }
    }

    #[test]
    fn test_thumbnails_have_requested_size() {
        let dir = tempdir().unwrap();
        write(dir.path(), "g1.png", RgbaImage::from_pixel(40, 30, Rgba([90, 90, 90, 255])));
        write(dir.path(), "black.png", RgbaImage::from_pixel(40, 30, Rgba([0, 0, 0, 255])));
        write(dir.path(), "logo.png", RgbaImage::from_pixel(12, 12, Rgba([0, 0, 255, 255])));

        let thumbs = build_thumbnails(
            dir.path(),
            &PresetConfig::default_preset(),
            (14, 9),
            &Printer::new(),
        )
        .unwrap();

        let names: Vec<&str> = thumbs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["g1.png", "logo.png"]);
        assert!(thumbs.iter().all(|t| t.image.dimensions() == (14, 9)));
    }

    #[test]
    fn test_thumbnails_with_background_are_composited() {
        let dir = tempdir().unwrap();
        write(dir.path(), "g1.png", RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255])));
        write(dir.path(), "clear.png", RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0])));

        let mut preset = PresetConfig::default_preset();
        preset.show_background = true;
        preset.tint = TintColour::from_hex("#00FF00").unwrap();

        let thumbs = build_thumbnails(dir.path(), &preset, (4, 4), &Printer::new()).unwrap();

        assert_eq!(thumbs[0].image.get_pixel(1, 1).0, [0, 255, 0, 255]);
        assert_eq!(thumbs[1].image.get_pixel(1, 1).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_thumbnails_without_background_flag_are_raw() {
        let dir = tempdir().unwrap();
        write(dir.path(), "g1.png", RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255])));

        let mut preset = PresetConfig::default_preset();
        preset.tint = TintColour::from_hex("#00FF00").unwrap();

        let thumbs = build_thumbnails(dir.path(), &preset, (4, 4), &Printer::new()).unwrap();
        assert_eq!(thumbs[0].image.get_pixel(1, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_corrupt_shade_matches_missing_shade() {
        let with_corrupt = tempdir().unwrap();
        let without = tempdir().unwrap();
        for dir in [with_corrupt.path(), without.path()] {
            write(dir, "g1.png", RgbaImage::from_pixel(8, 8, Rgba([200, 200, 200, 255])));
        }
        fs::write(with_corrupt.path().join("black.png"), b"nope").unwrap();

        let mut preset = PresetConfig::default_preset();
        preset.show_background = true;
        preset.opacity = crate::types::Opacity::clamped(50);

        let a = build_thumbnails(with_corrupt.path(), &preset, (4, 4), &Printer::new()).unwrap();
        let b = build_thumbnails(without.path(), &preset, (4, 4), &Printer::new()).unwrap();

        assert_eq!(a.len(), 1);
        assert_eq!(a[0].image, b[0].image);
        // darkened, so the corrupt shade still acted as black
        let [r, g, b, _] = a[0].image.get_pixel(0, 0).0;
        assert!([r, g, b].iter().all(|c| c.abs_diff(100) <= 1));
    }

    #[test]
    fn test_broken_images_are_skipped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.png"), b"nope").unwrap();
        write(dir.path(), "ok.png", RgbaImage::new(4, 4));

        let thumbs = build_thumbnails(
            dir.path(),
            &PresetConfig::default_preset(),
            (2, 2),
            &Printer::new(),
        )
        .unwrap();

        assert_eq!(thumbs.len(), 1);
        assert_eq!(thumbs[0].name, "ok.png");
    }

    #[test]
    fn test_pack_gallery_layout() {
        let thumbs: Vec<Thumbnail> = (0..7)
            .map(|i| thumb(&format!("{}.png", i), 10, 6, [255, 0, 0, 255]))
            .collect();

        let sheet = pack_gallery(&thumbs, 5, 4);

        // 5 columns, 2 rows
        assert_eq!(sheet.dimensions(), (5 * 10 + 6 * 4, 2 * 6 + 3 * 4));
        assert_eq!(*sheet.get_pixel(0, 0), GALLERY_BACKGROUND);
        assert_eq!(sheet.get_pixel(4, 4).0, [255, 0, 0, 255]);
        // second row, third column is empty
        assert_eq!(*sheet.get_pixel(4 + 2 * 14, 4 + 10), GALLERY_BACKGROUND);
        // second row, second column holds the seventh tile
        assert_eq!(sheet.get_pixel(4 + 14, 4 + 10).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_pack_gallery_shrinks_to_used_columns() {
        let thumbs = vec![thumb("a.png", 3, 3, [0, 0, 0, 255])];
        assert_eq!(pack_gallery(&thumbs, 5, 1).dimensions(), (5, 5));
    }

    #[test]
    fn test_pack_gallery_empty() {
        assert_eq!(pack_gallery(&[], 5, 4).dimensions(), (1, 1));
    }
}
