//! List command implementation.
//!
//! Prints every preset with its settings, or the same table as JSON on
//! stdout for scripting.

use clap::Args;
use serde::Serialize;

use crate::discovery::Workspace;
use crate::error::{BackdropError, Result};
use crate::output::Printer;
use crate::store::PresetRepository;
use crate::types::PresetConfig;

/// List presets and their settings
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the presets as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    #[serde(flatten)]
    config: &'a PresetConfig,
}

pub fn run(args: ListArgs, ws: &Workspace, printer: &Printer) -> Result<()> {
    let repo = ws.open_repository()?;

    if args.json {
        println!("{}", render_json(&repo)?);
        return Ok(());
    }

    for (name, preset) in repo.list() {
        printer.info(name, &describe(preset, printer));
    }

    Ok(())
}

fn render_json(repo: &PresetRepository) -> Result<String> {
    let entries: Vec<ListEntry> = repo
        .list()
        .into_iter()
        .map(|(name, config)| ListEntry { name, config })
        .collect();

    serde_json::to_string_pretty(&entries).map_err(|e| BackdropError::Parse {
        message: format!("Failed to serialize preset list: {}", e),
        help: None,
    })
}

fn describe(preset: &PresetConfig, printer: &Printer) -> String {
    let mut parts = vec![
        printer.dim(&preset.code),
        preset.tint.to_string(),
        format!("opacity {}", preset.opacity),
    ];
    if preset.no_color {
        parts.push("no colour".to_string());
    }
    if preset.show_background {
        parts.push("background shown".to_string());
    }
    parts.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Opacity, TintColour};
    use tempfile::tempdir;

    #[test]
    fn test_render_json_lists_default_first() {
        let dir = tempdir().unwrap();
        let presets = dir.path().join("presets.json");
        std::fs::write(
            &presets,
            r##"{"alpha": {"code": "ALP001", "color": "#112233", "opacidade": 20}}"##,
        )
        .unwrap();
        let repo = PresetRepository::load(&presets).unwrap();

        let json: serde_json::Value = serde_json::from_str(&render_json(&repo).unwrap()).unwrap();

        assert_eq!(json[0]["name"], "standard");
        assert_eq!(json[1]["name"], "alpha");
        assert_eq!(json[1]["code"], "ALP001");
        assert_eq!(json[1]["color"], "#112233");
        assert_eq!(json[1]["opacidade"], 20);
        assert_eq!(json[1]["no_color"], false);
    }

    #[test]
    fn test_describe_mentions_flags() {
        let mut preset = PresetConfig::new("ABC123");
        preset.tint = TintColour::rgb(255, 0, 0);
        preset.opacity = Opacity::clamped(35);
        preset.no_color = true;

        let printer = Printer::new();
        let text = describe(&preset, &printer);

        assert!(text.contains("#FF0000"));
        assert!(text.contains("opacity 35%"));
        assert!(text.contains("no colour"));
        assert!(!text.contains("background shown"));
    }

    #[test]
    fn test_run_on_empty_workspace() {
        let dir = tempdir().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        run(ListArgs { json: false }, &ws, &Printer::new()).unwrap();
    }
}
