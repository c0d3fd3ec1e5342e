//! Render job configuration
//!
//! A job names the source document, the destination page, and the page title.
//! The default job reproduces the tool's original hard-coded behavior:
//! `ARCHITECTURE.md` in, `ARCHITECTURE.html` out. A TOML file can override any
//! field; omitted fields keep their defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::page::DEFAULT_TITLE;

/// Errors that can occur when loading or parsing a job config file
#[derive(Error, Debug)]
pub enum PageConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration for a single render job
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Title placed in the rendered page's `<title>` element
    pub title: String,
    /// Markdown source file
    pub source: PathBuf,
    /// HTML destination file (created or atomically replaced)
    pub destination: PathBuf,
}

/// TOML structure for deserializing job configs
#[derive(Deserialize)]
struct TomlPageConfig {
    title: Option<String>,
    source: Option<PathBuf>,
    destination: Option<PathBuf>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            source: PathBuf::from("ARCHITECTURE.md"),
            destination: PathBuf::from("ARCHITECTURE.html"),
        }
    }
}

impl PageConfig {
    /// Load a job config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PageConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a job config from a TOML string
    pub fn from_str(content: &str) -> Result<Self, PageConfigError> {
        let parsed: TomlPageConfig = toml::from_str(content)?;
        let defaults = Self::default();

        Ok(Self {
            title: parsed.title.unwrap_or(defaults.title),
            source: parsed.source.unwrap_or(defaults.source),
            destination: parsed.destination.unwrap_or(defaults.destination),
        })
    }

    /// Set the source path
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the destination path
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Set the page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_literals() {
        let config = PageConfig::default();
        assert_eq!(config.source, PathBuf::from("ARCHITECTURE.md"));
        assert_eq!(config.destination, PathBuf::from("ARCHITECTURE.html"));
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_full_toml() {
        let config = PageConfig::from_str(
            r#"
            title = "Design Notes"
            source = "notes.md"
            destination = "out/notes.html"
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "Design Notes");
        assert_eq!(config.source, PathBuf::from("notes.md"));
        assert_eq!(config.destination, PathBuf::from("out/notes.html"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PageConfig::from_str(r#"source = "README.md""#).unwrap();
        assert_eq!(config.source, PathBuf::from("README.md"));
        assert_eq!(config.destination, PathBuf::from("ARCHITECTURE.html"));
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(PageConfig::from_str("title = ").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = PageConfig::from_file(Path::new("no-such-config.toml"));
        assert!(matches!(err, Err(PageConfigError::IoError(_))));
    }

    #[test]
    fn test_builders() {
        let config = PageConfig::default()
            .with_source("a.md")
            .with_destination("a.html")
            .with_title("A");
        assert_eq!(config.source, PathBuf::from("a.md"));
        assert_eq!(config.destination, PathBuf::from("a.html"));
        assert_eq!(config.title, "A");
    }
}
