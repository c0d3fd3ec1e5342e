//! docpress CLI
//!
//! Usage:
//!   docpress [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>  Destination HTML file
//!   -c, --config <FILE>  Render job config (TOML format)
//!       --title <TITLE>  Override the page title
//!   -h, --help           Print help

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use docpress::{render_document, PageConfig};

#[derive(Parser)]
#[command(name = "docpress")]
#[command(about = "Render Markdown documentation to a print-ready styled HTML page")]
struct Cli {
    /// Markdown source file (defaults to ARCHITECTURE.md)
    input: Option<PathBuf>,

    /// Destination HTML file (defaults to ARCHITECTURE.html)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render job config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the page title
    #[arg(long)]
    title: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Config file first, then flags on top
    let mut config = match &cli.config {
        Some(path) => match PageConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => PageConfig::default(),
    };

    if let Some(input) = cli.input {
        config.source = input;
    }
    if let Some(output) = cli.output {
        config.destination = output;
    }
    if let Some(title) = cli.title {
        config.title = title;
    }

    if let Err(e) = render_document(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    println!("✅ HTML file created: {}", config.destination.display());
    print_pdf_instructions(&config.destination);
}

/// PDF production stays outside this tool; point at the usual routes.
fn print_pdf_instructions(destination: &Path) {
    let html = destination.display();
    let pdf = destination.with_extension("pdf");

    println!("\nTo convert to PDF, you can:");
    println!("1. Open {} in your browser and print to PDF (⌘P)", html);
    println!("2. Or install wkhtmltopdf and run:");
    println!("   brew install wkhtmltopdf");
    println!("   wkhtmltopdf {} {}", html, pdf.display());
    println!("3. Or use Python library (requires weasyprint):");
    println!("   pip3 install weasyprint");
    println!(
        "   python3 -c 'from weasyprint import HTML; HTML(\"{}\").write_pdf(\"{}\")'",
        html,
        pdf.display()
    );
}
