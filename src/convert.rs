//! Markdown to HTML conversion
//!
//! The conversion itself is delegated entirely to comrak. Three behaviors are
//! enabled on top of plain paragraphs/headings/emphasis:
//!
//! - pipe tables (`extension.table`)
//! - fenced code blocks (core CommonMark, always on in comrak)
//! - syntax highlighting markup for language-tagged fences, via comrak's
//!   syntect codefence plugin in class-emitting mode
//!
//! The adapter is built with no theme so highlighted tokens carry CSS classes
//! instead of inline styles; the page stylesheet's `pre` rules supply the
//! block's colors. Conversion is deterministic: same input text, same markup.

use comrak::options::Options;
use comrak::plugins::syntect::SyntectAdapter;
use comrak::{markdown_to_html_with_plugins, Plugins};

pub(crate) fn conversion_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options
}

/// Convert Markdown text to an HTML fragment
///
/// Returns body-level markup only; embedding into a full page is the
/// template's job. Empty input yields an empty fragment.
///
/// # Example
///
/// ```rust
/// let fragment = docpress::markdown_to_fragment("# Title");
/// assert!(fragment.contains("<h1>Title</h1>"));
/// ```
pub fn markdown_to_fragment(markdown: &str) -> String {
    let options = conversion_options();
    let adapter = SyntectAdapter::new(None);
    let mut plugins = Plugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);

    markdown_to_html_with_plugins(markdown, &options, &plugins)
}
