//! Error types for the render pipeline

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur while rendering a document
///
/// All variants are fatal: the pipeline never retries and never leaves a
/// partially written destination behind.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The source file does not exist or could not be read
    #[error("source file '{path}' could not be read: {source}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source bytes could not be handed to the Markdown converter
    #[error("source file '{path}' is not valid UTF-8: {source}")]
    ConversionFailed {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// The destination file could not be created or written
    #[error("destination '{path}' could not be written: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
