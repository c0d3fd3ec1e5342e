//! Fixed HTML page template
//!
//! The stylesheet and attribution footer are part of the output contract:
//! downstream print styling relies on these exact selectors, so the CSS is a
//! single literal block, not a computed artifact.

/// Default document title
pub const DEFAULT_TITLE: &str = "FirecrawlScraper Architecture Documentation";

/// Print-oriented stylesheet embedded in every rendered page
pub(crate) const PAGE_STYLE: &str = r#"        @page {
            size: A4;
            margin: 2cm;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
        }

        h1 {
            color: #2c3e50;
            border-bottom: 3px solid #3498db;
            padding-bottom: 10px;
            margin-top: 30px;
        }

        h2 {
            color: #34495e;
            border-bottom: 2px solid #95a5a6;
            padding-bottom: 8px;
            margin-top: 25px;
        }

        h3 {
            color: #5a6c7d;
            margin-top: 20px;
        }

        code {
            background-color: #f4f4f4;
            padding: 2px 6px;
            border-radius: 3px;
            font-family: 'Monaco', 'Menlo', 'Courier New', monospace;
            font-size: 0.9em;
        }

        pre {
            background-color: #2d2d2d;
            color: #f8f8f2;
            padding: 15px;
            border-radius: 5px;
            overflow-x: auto;
            page-break-inside: avoid;
        }

        pre code {
            background-color: transparent;
            padding: 0;
            color: #f8f8f2;
        }

        table {
            border-collapse: collapse;
            width: 100%;
            margin: 20px 0;
            page-break-inside: avoid;
        }

        th, td {
            border: 1px solid #ddd;
            padding: 12px;
            text-align: left;
        }

        th {
            background-color: #3498db;
            color: white;
        }

        tr:nth-child(even) {
            background-color: #f9f9f9;
        }

        blockquote {
            border-left: 4px solid #3498db;
            padding-left: 15px;
            color: #666;
            font-style: italic;
            margin: 15px 0;
        }

        ul, ol {
            margin: 10px 0;
            padding-left: 30px;
        }

        li {
            margin: 5px 0;
        }

        a {
            color: #3498db;
            text-decoration: none;
        }

        a:hover {
            text-decoration: underline;
        }

        .mermaid {
            background-color: #f9f9f9;
            border: 1px solid #ddd;
            padding: 15px;
            border-radius: 5px;
            margin: 20px 0;
            page-break-inside: avoid;
        }

        .diagram-placeholder {
            background-color: #e8f4f8;
            border: 2px dashed #3498db;
            padding: 30px;
            text-align: center;
            margin: 20px 0;
            border-radius: 5px;
            font-style: italic;
            color: #555;
        }

        .note {
            background-color: #fff3cd;
            border-left: 4px solid #ffc107;
            padding: 15px;
            margin: 15px 0;
            border-radius: 3px;
        }

        .architecture-ascii {
            font-family: 'Courier New', monospace;
            background-color: #f4f4f4;
            padding: 15px;
            border-radius: 5px;
            white-space: pre;
            overflow-x: auto;
            page-break-inside: avoid;
        }
"#;

/// Fixed two-line attribution footer
pub(crate) const PAGE_FOOTER: &str = r#"    <div style="margin-top: 50px; padding-top: 20px; border-top: 2px solid #ddd; text-align: center; color: #888;">
        <p>Generated from ARCHITECTURE.md</p>
        <p>FirecrawlScraper Documentation</p>
    </div>
"#;

/// Embed a converted HTML fragment into the fixed page template
///
/// Produces a complete HTML5 document: head with charset, title, and the
/// embedded stylesheet; the fragment as body content; the attribution footer.
/// Output depends only on the arguments.
pub fn render_page(fragment: &str, title: &str) -> String {
    let mut page = String::with_capacity(PAGE_STYLE.len() + fragment.len() + 1024);

    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"UTF-8\">\n    <title>");
    page.push_str(title);
    page.push_str("</title>\n    <style>\n");
    page.push_str(PAGE_STYLE);
    page.push_str("    </style>\n</head>\n<body>\n");
    page.push_str(fragment);
    page.push('\n');
    page.push_str(PAGE_FOOTER);
    page.push_str("</body>\n</html>\n");

    page
}
