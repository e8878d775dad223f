//! Set command implementation.
//!
//! Validates and saves preset settings. The colour is applied first, so
//! an invalid value fails before anything is written.

use clap::Args;

use crate::discovery::Workspace;
use crate::error::Result;
use crate::output::Printer;

/// Change a preset's settings
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Preset name
    pub preset: String,

    /// Tint colour as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Blend opacity toward the shade, 0-100 (clamped)
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub opacity: Option<i64>,

    /// Keep the background's own colours instead of tinting
    #[arg(long, value_name = "BOOL")]
    pub no_color: Option<bool>,

    /// Show the processed background behind gallery thumbnails
    #[arg(long, value_name = "BOOL")]
    pub show_background: Option<bool>,
}

pub fn run(args: SetArgs, ws: &Workspace, printer: &Printer) -> Result<()> {
    let mut repo = ws.open_repository()?;
    repo.require(&args.preset)?;

    if let Some(hex) = &args.color {
        let tint = repo.set_tint(&args.preset, hex)?;
        printer.success("Set", &format!("{} colour to {}", args.preset, tint));
    }
    if let Some(percent) = args.opacity {
        let opacity = repo.set_opacity(&args.preset, percent)?;
        printer.success("Set", &format!("{} opacity to {}", args.preset, opacity));
    }
    if let Some(no_color) = args.no_color {
        repo.set_no_color(&args.preset, no_color)?;
        printer.success("Set", &format!("{} no-color to {}", args.preset, no_color));
    }
    if let Some(show) = args.show_background {
        repo.set_show_background(&args.preset, show)?;
        printer.success("Set", &format!("{} show-background to {}", args.preset, show));
    }

    let preset = repo.require(&args.preset)?;
    printer.info(
        &args.preset,
        &format!(
            "{} {}  opacity {}  no-color {}  show-background {}",
            printer.dim(&preset.code),
            preset.tint,
            preset.opacity,
            preset.no_color,
            preset.show_background
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BackdropError;
    use crate::types::{Opacity, TintColour, DEFAULT_PRESET};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn args(color: Option<&str>, opacity: Option<i64>) -> SetArgs {
        SetArgs {
            preset: DEFAULT_PRESET.to_string(),
            color: color.map(str::to_string),
            opacity,
            no_color: None,
            show_background: None,
        }
    }

    #[test]
    fn test_set_saves_and_clamps() {
        let dir = tempdir().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        run(args(Some("#00ff80"), Some(250)), &ws, &Printer::new()).unwrap();

        let repo = ws.open_repository().unwrap();
        let preset = repo.get(DEFAULT_PRESET).unwrap();
        assert_eq!(preset.tint, TintColour::rgb(0, 255, 128));
        assert_eq!(preset.opacity, Opacity::FULL);
    }

    #[test]
    fn test_invalid_colour_changes_nothing() {
        let dir = tempdir().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        let err = run(args(Some("red"), Some(40)), &ws, &Printer::new()).unwrap_err();

        assert!(matches!(err, BackdropError::InvalidColor { .. }));
        assert!(!ws.presets_file().exists());
    }

    #[test]
    fn test_set_flags() {
        let dir = tempdir().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        let mut flags = args(None, None);
        flags.no_color = Some(true);
        flags.show_background = Some(true);
        run(flags, &ws, &Printer::new()).unwrap();

        let repo = ws.open_repository().unwrap();
        let preset = repo.get(DEFAULT_PRESET).unwrap();
        assert!(preset.no_color);
        assert!(preset.show_background);
    }

    #[test]
    fn test_unknown_preset() {
        let dir = tempdir().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        let mut missing = args(None, Some(10));
        missing.preset = "nope".to_string();

        assert!(matches!(
            run(missing, &ws, &Printer::new()),
            Err(BackdropError::Config { .. })
        ));
    }
}
