//! docpress - Markdown documentation rendered as print-ready HTML
//!
//! This library converts a Markdown document into a complete, self-contained
//! HTML5 page: the text is run through comrak (tables, fenced code blocks,
//! syntax highlighting markup), the resulting fragment is embedded into a
//! fixed CSS-styled template, and the page is written to disk atomically.
//! PDF production is deliberately left to external tools.
//!
//! # Example
//!
//! ```rust
//! use docpress::render;
//!
//! let page = render("# Title");
//! assert!(page.contains("<h1>Title</h1>"));
//! assert!(page.starts_with("<!DOCTYPE html>"));
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod page;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

pub use config::{PageConfig, PageConfigError};
pub use convert::markdown_to_fragment;
pub use error::RenderError;
pub use page::{render_page, DEFAULT_TITLE};

/// Render Markdown text to a complete HTML page with the default title
///
/// Pure in-memory variant of the pipeline: convert, then embed. Useful for
/// tests and for callers that handle the file I/O themselves.
pub fn render(markdown: &str) -> String {
    render_with_title(markdown, DEFAULT_TITLE)
}

/// Render Markdown text to a complete HTML page with a custom title
///
/// # Example
///
/// ```rust
/// use docpress::render_with_title;
///
/// let page = render_with_title("hello", "Notes");
/// assert!(page.contains("<title>Notes</title>"));
/// assert!(page.contains("<p>hello</p>"));
/// ```
pub fn render_with_title(markdown: &str, title: &str) -> String {
    let fragment = markdown_to_fragment(markdown);
    render_page(&fragment, title)
}

/// Run the full render job described by a [`PageConfig`]
///
/// Reads the source file, converts it, embeds the fragment into the page
/// template, and writes the destination file. The write goes through a
/// temporary file in the destination directory followed by a rename, so a
/// failed run never leaves a truncated destination behind: either the full
/// page lands on disk or the previous contents (or absence) of the
/// destination are untouched.
pub fn render_document(config: &PageConfig) -> Result<(), RenderError> {
    let bytes = fs::read(&config.source).map_err(|source| RenderError::SourceNotFound {
        path: config.source.clone(),
        source,
    })?;
    let markdown = String::from_utf8(bytes).map_err(|source| RenderError::ConversionFailed {
        path: config.source.clone(),
        source,
    })?;

    let page = render_with_title(&markdown, &config.title);
    write_atomic(&config.destination, &page)
}

fn write_atomic(destination: &Path, contents: &str) -> Result<(), RenderError> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_failed(destination, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| write_failed(destination, e))?;
    tmp.persist(destination)
        .map_err(|e| write_failed(destination, e.error))?;
    Ok(())
}

fn write_failed(destination: &Path, source: io::Error) -> RenderError {
    RenderError::WriteFailed {
        path: destination.to_path_buf(),
        source,
    }
}
