pub mod add;
pub mod completions;
pub mod delete;
pub mod export;
pub mod gallery;
pub mod images;
pub mod init;
pub mod list;
pub mod new;
pub mod preview;
pub mod remove;
pub mod replace;
pub mod set;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::discovery::Workspace;
use crate::error::Result;
use crate::output::Printer;

/// backdrop - tinted background presets and overlay export
#[derive(Parser, Debug)]
#[command(name = "backdrop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Workspace root directory
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Do not write a session log file
    #[arg(long, global = true)]
    pub no_log: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a workspace (generates backdrop.yaml and presets.json)
    Init(init::InitArgs),

    /// List presets and their settings
    List(list::ListArgs),

    /// Create a preset
    New(new::NewArgs),

    /// Delete a preset and its images
    Delete(delete::DeleteArgs),

    /// Change a preset's tint, opacity or flags
    Set(set::SetArgs),

    /// List the images of a preset
    Images(images::ImagesArgs),

    /// Add an image to a preset
    Add(add::AddArgs),

    /// Replace an image in a preset
    Replace(replace::ReplaceArgs),

    /// Remove an image from a preset
    Remove(remove::RemoveArgs),

    /// Export every image of a preset over its processed background
    Export(export::ExportArgs),

    /// Write a contact sheet of preset thumbnails
    Gallery(gallery::GalleryArgs),

    /// Render the processed background at preview size
    Preview(preview::PreviewArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Run a workspace command.
pub fn run(command: Commands, ws: &Workspace, printer: &Printer) -> Result<()> {
    match command {
        Commands::Init(args) => init::run(args, ws, printer),
        Commands::List(args) => list::run(args, ws, printer),
        Commands::New(args) => new::run(args, ws, printer),
        Commands::Delete(args) => delete::run(args, ws, printer),
        Commands::Set(args) => set::run(args, ws, printer),
        Commands::Images(args) => images::run(args, ws, printer),
        Commands::Add(args) => add::run(args, ws, printer),
        Commands::Replace(args) => replace::run(args, ws, printer),
        Commands::Remove(args) => remove::run(args, ws, printer),
        Commands::Export(args) => export::run(args, ws, printer),
        Commands::Gallery(args) => gallery::run(args, ws, printer),
        Commands::Preview(args) => preview::run(args, ws, printer),
        Commands::Completions(args) => completions::run(args),
    }
}
