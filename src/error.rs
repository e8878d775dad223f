use miette::Diagnostic;
use thiserror::Error;

/// Main error type for backdrop operations
#[derive(Error, Diagnostic, Debug)]
pub enum BackdropError {
    #[error("IO error: {0}")]
    #[diagnostic(code(backdrop::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(backdrop::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Could not read image {path}: {message}")]
    #[diagnostic(code(backdrop::image_read))]
    ImageRead {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Could not write image {path}: {message}")]
    #[diagnostic(code(backdrop::image_write))]
    ImageWrite {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid tint colour: {value:?}")]
    #[diagnostic(
        code(backdrop::invalid_color),
        help("Use a 6-digit hex colour such as #1A2B3C")
    )]
    InvalidColor { value: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(backdrop::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(backdrop::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl BackdropError {
    /// Shorthand for a `Config` error without help text.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BackdropError>;
