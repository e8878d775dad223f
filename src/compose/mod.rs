//! The compositing core.
//!
//! Everything here is a pure function of its inputs: no disk access, no
//! shared state. Export, gallery thumbnails and previews all call the
//! same two operations, [`process_background`] and [`composite_overlay`],
//! and differ only in the resolution they feed in.

mod blend;
mod pipeline;
mod tint;

pub use blend::{blend, paste_masked};
pub use pipeline::{
    composite_overlay, fit_to, process_background, solid_black, BackgroundSettings,
    RESAMPLE_FILTER,
};
pub use tint::{colorize, colorize_lut, luminance};
