//! backdrop - tinted background presets and overlay export
//!
//! A library for managing named background presets, tinting and darkening
//! a preset's background, and compositing overlay images on top of it for
//! export, gallery thumbnails and previews.

pub mod cli;
pub mod compose;
pub mod discovery;
pub mod error;
pub mod logger;
pub mod output;
pub mod render;
pub mod store;
pub mod types;

pub use compose::{composite_overlay, process_background, BackgroundSettings};
pub use discovery::{scan_preset_dir, Manifest, PresetImage, PresetImages, Workspace};
pub use error::{BackdropError, Result};
pub use logger::SessionLog;
pub use render::{
    build_thumbnails, export_preset, pack_gallery, recompute_preview, ExportReport, PreviewState,
    Thumbnail,
};
pub use store::PresetRepository;
pub use types::{ImageRole, Opacity, PresetConfig, TintColour};
