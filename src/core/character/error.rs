//! Errors raised while reading, writing or decoding character sheets.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Errors from reading, writing or decoding character files.
///
/// Every failure leaves the in-memory record untouched; callers surface
/// these as notifications.
#[derive(Debug, Error, Diagnostic)]
pub enum CharacterError {
    #[error("Failed to access {}: {source}", path.display())]
    #[diagnostic(code(arcadia::io), help("Check that the path exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid character file: {0}")]
    #[diagnostic(code(arcadia::json), help("The file must be a character sheet exported by the forge"))]
    Json(#[from] serde_json::Error),
}

impl CharacterError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        CharacterError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CharacterError>;
