//! Rendering module for backdrop.
//!
//! Turns a preset directory into finished images: full-resolution
//! exports, gallery thumbnails and background previews.

mod export;
mod gallery;
mod png;
mod preview;

pub use export::{export_preset, ExportFailure, ExportReport};
pub use gallery::{build_thumbnails, pack_gallery, Thumbnail, GALLERY_BACKGROUND, THUMBNAIL_FILTER};
pub use png::{open_image, write_png};
pub use preview::{recompute_preview, PreviewState};
