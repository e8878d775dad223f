//! Batch export of a preset.
//!
//! Processes the background once, then composites every gallery image
//! over it at full resolution and writes each result as PNG into a flat
//! output directory. A failure on one image is logged and skipped; the
//! run always finishes with a success count.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::compose::{composite_overlay, process_background, BackgroundSettings};
use crate::discovery::{scan_preset_dir, PresetImage, PresetImages};
use crate::error::{BackdropError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{ImageRole, PresetConfig};

use super::png::{load_shade, open_image, write_png};

/// An image that could not be exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    pub name: String,
    pub message: String,
}

/// Outcome of an export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub succeeded: usize,
    pub total: usize,
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }

    /// True when every image was exported.
    pub fn is_complete(&self) -> bool {
        self.succeeded == self.total
    }
}

/// The shared bottom layer of one export run.
enum BaseLayer {
    Processed(RgbaImage),
    /// The preset has no background; overlays are exported on their own.
    Missing,
    /// The background could not be decoded.
    Unreadable { path: PathBuf, message: String },
}

/// Export every gallery image of a preset into `output_dir`.
///
/// Output files are named `<stem>.png`. When two images share a stem the
/// first in gallery order is exported and the other is reported as failed.
/// Fails only when the preset directory is missing or the output directory
/// cannot be created.
pub fn export_preset(
    preset_dir: &Path,
    preset: &PresetConfig,
    output_dir: &Path,
    printer: &Printer,
) -> Result<ExportReport> {
    if !preset_dir.is_dir() {
        return Err(BackdropError::Config {
            message: format!(
                "preset directory {} does not exist",
                display_path(preset_dir)
            ),
            help: None,
        });
    }

    fs::create_dir_all(output_dir).map_err(|e| BackdropError::ImageWrite {
        path: output_dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let images = scan_preset_dir(preset_dir);
    let base = prepare_base(&images, &BackgroundSettings::from(preset), printer);

    printer.status(
        "Exporting",
        &format!("{} ({})", preset.code, plural(images.len(), "image", "images")),
    );

    let mut report = ExportReport::default();
    // Output name (lowercased) -> source file that claimed it
    let mut claimed: BTreeMap<String, &str> = BTreeMap::new();
    for image in images.gallery() {
        report.total += 1;
        let file_name = format!("{}.png", image.stem());
        let dest = output_dir.join(&file_name);

        let written = match claimed.get(&file_name.to_ascii_lowercase()) {
            Some(owner) => Err(BackdropError::Config {
                message: format!("{} would overwrite the export of {}", file_name, owner),
                help: Some("Rename one of the images so their names differ".to_string()),
            }),
            None => {
                claimed.insert(file_name.to_ascii_lowercase(), image.name.as_str());
                render_item(image, &base).and_then(|out| write_png(&out, &dest))
            }
        };

        match written {
            Ok(()) => {
                report.succeeded += 1;
                printer.status("Wrote", &display_path(&dest));
            }
            Err(e) => {
                printer.error("Failed", &format!("{}: {}", image.name, e));
                report.failures.push(ExportFailure {
                    name: image.name.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

fn prepare_base(images: &PresetImages, settings: &BackgroundSettings, printer: &Printer) -> BaseLayer {
    let Some(background) = &images.background else {
        printer.warning("Missing", "no background image, exporting overlays unchanged");
        return BaseLayer::Missing;
    };

    let decoded = match open_image(&background.path) {
        Ok(img) => img,
        Err(e) => {
            printer.error("Unreadable", &e.to_string());
            return BaseLayer::Unreadable {
                path: background.path.clone(),
                message: e.to_string(),
            };
        }
    };

    let shade = load_shade(images, printer);

    BaseLayer::Processed(process_background(&decoded, settings, shade.as_ref()))
}

fn render_item(image: &PresetImage, base: &BaseLayer) -> Result<RgbaImage> {
    match base {
        BaseLayer::Processed(processed) if image.role == ImageRole::Background => {
            Ok(composite_overlay(processed, None))
        }
        BaseLayer::Processed(processed) => {
            let overlay = open_image(&image.path)?.to_rgba8();
            Ok(composite_overlay(processed, Some(&overlay)))
        }
        BaseLayer::Missing => Ok(open_image(&image.path)?.to_rgba8()),
        BaseLayer::Unreadable { path, message } => Err(BackdropError::ImageRead {
            path: path.clone(),
            message: message.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Opacity, TintColour};
    use image::Rgba;
    use tempfile::tempdir;

    fn preset(tint: &str, opacity: i64) -> PresetConfig {
        let mut p = PresetConfig::new("TEST01");
        p.tint = TintColour::from_hex(tint).unwrap();
        p.opacity = Opacity::clamped(opacity);
        p
    }

    fn write(dir: &Path, name: &str, img: RgbaImage) {
        img.save(dir.join(name)).unwrap();
    }

    fn sample_preset(dir: &Path) {
        write(dir, "g1.png", RgbaImage::from_pixel(8, 8, Rgba([128, 128, 128, 255])));
        write(dir, "black.png", RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255])));

        let mut logo = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        logo.put_pixel(0, 0, Rgba([0, 255, 0, 255]));
        write(dir, "logo.png", logo);
        write(dir, "full.png", RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255])));
    }

    #[test]
    fn test_export_writes_every_gallery_image() {
        let preset_dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        sample_preset(preset_dir.path());

        let report = export_preset(preset_dir.path(), &preset("#FF0000", 50), out.path(), &Printer::new())
            .unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.succeeded, 3);
        assert!(report.is_complete());
        assert!(out.path().join("g1.png").exists());
        assert!(out.path().join("logo.png").exists());
        assert!(out.path().join("full.png").exists());
        assert!(!out.path().join("black.png").exists());
    }

    #[test]
    fn test_export_background_is_processed() {
        let preset_dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        sample_preset(preset_dir.path());

        export_preset(preset_dir.path(), &preset("#FF0000", 50), out.path(), &Printer::new()).unwrap();

        let bg = image::open(out.path().join("g1.png")).unwrap().to_rgba8();
        assert_eq!(bg.dimensions(), (8, 8));
        assert_eq!(bg.get_pixel(3, 3).0, [64, 0, 0, 255]);

        let full = image::open(out.path().join("full.png")).unwrap().to_rgba8();
        assert_eq!(full.get_pixel(3, 3).0, [1, 2, 3, 255]);
    }

    #[test]
    fn test_export_continues_past_broken_files() {
        let preset_dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        sample_preset(preset_dir.path());
        fs::write(preset_dir.path().join("broken.png"), b"garbage").unwrap();

        let report = export_preset(preset_dir.path(), &preset("#FFFFFF", 0), out.path(), &Printer::new())
            .unwrap();

        assert_eq!(report.total, 4);
        assert_eq!(report.succeeded, 3);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failures[0].name, "broken.png");
    }

    #[test]
    fn test_export_without_background_copies_overlays() {
        let preset_dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        write(
            preset_dir.path(),
            "photo.png",
            RgbaImage::from_pixel(3, 2, Rgba([9, 8, 7, 100])),
        );

        let report = export_preset(preset_dir.path(), &preset("#FF0000", 80), out.path(), &Printer::new())
            .unwrap();

        assert!(report.is_complete());
        let img = image::open(out.path().join("photo.png")).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [9, 8, 7, 100]);
    }

    #[test]
    fn test_unreadable_background_fails_every_item() {
        let preset_dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        fs::write(preset_dir.path().join("g1.png"), b"garbage").unwrap();
        write(preset_dir.path(), "a.png", RgbaImage::new(2, 2));

        let report = export_preset(preset_dir.path(), &preset("#FF0000", 0), out.path(), &Printer::new())
            .unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.succeeded, 0);
    }

    #[test]
    fn test_shared_stem_is_reported_not_overwritten() {
        let preset_dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        write(preset_dir.path(), "g1.png", RgbaImage::from_pixel(4, 4, Rgba([10, 10, 10, 255])));
        image::RgbImage::from_pixel(4, 4, image::Rgb([200, 0, 0]))
            .save(preset_dir.path().join("logo.jpg"))
            .unwrap();
        write(preset_dir.path(), "logo.png", RgbaImage::from_pixel(4, 4, Rgba([0, 0, 200, 255])));

        let report = export_preset(preset_dir.path(), &preset("#FFFFFF", 0), out.path(), &Printer::new())
            .unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].name, "logo.png");

        let written = fs::read_dir(out.path()).unwrap().count();
        assert_eq!(written, report.succeeded);
        // logo.jpg sorts first and keeps the output name
        let logo = image::open(out.path().join("logo.png")).unwrap().to_rgba8();
        assert!(logo.get_pixel(1, 1).0[0] > 150);
    }

    #[test]
    fn test_export_is_deterministic() {
        let preset_dir = tempdir().unwrap();
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        sample_preset(preset_dir.path());
        let p = preset("#3366CC", 35);

        export_preset(preset_dir.path(), &p, first.path(), &Printer::new()).unwrap();
        export_preset(preset_dir.path(), &p, second.path(), &Printer::new()).unwrap();

        for name in ["g1.png", "logo.png", "full.png"] {
            assert_eq!(
                fs::read(first.path().join(name)).unwrap(),
                fs::read(second.path().join(name)).unwrap(),
                "{} differs between runs",
                name
            );
        }
    }

    #[test]
    fn test_missing_preset_dir_is_config_error() {
        let out = tempdir().unwrap();
        let err = export_preset(
            Path::new("/nonexistent/preset"),
            &preset("#FFFFFF", 0),
            out.path(),
            &Printer::new(),
        )
        .unwrap_err();

        assert!(matches!(err, BackdropError::Config { .. }));
    }
}
