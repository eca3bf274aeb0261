use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconsheet operations
#[derive(Error, Diagnostic, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    #[diagnostic(code(iconsheet::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(iconsheet::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Malformed icon {path}: {message}")]
    #[diagnostic(code(iconsheet::malformed_input))]
    MalformedInput {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(iconsheet::config))]
    InvalidConfig {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(iconsheet::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl SheetError {
    /// Build an `Io` error for `path` with a context message.
    pub fn io(path: impl Into<std::path::PathBuf>, context: &str, err: impl std::fmt::Display) -> Self {
        SheetError::Io {
            path: path.into(),
            message: format!("{}: {}", context, err),
        }
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
