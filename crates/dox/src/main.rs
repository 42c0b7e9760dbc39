//! Dox CLI - static document generator.
//!
//! Reads a JSON document description and a CSS stylesheet, renders the
//! document tree to HTML and writes a self-contained page.

mod error;
mod output;
mod page;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dox_renderer::DocumentRenderer;
use error::CliError;
use output::Output;

/// Dox - static document generator.
#[derive(Parser)]
#[command(name = "dox", version, about)]
struct Cli {
    /// JSON document source.
    source: PathBuf,
    /// CSS stylesheet injected into the page.
    stylesheet: PathBuf,
    /// Output file.
    #[arg(short, long, default_value = "document.html")]
    output: PathBuf,
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(&cli, &output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, output: &Output) -> Result<(), CliError> {
    for path in [&cli.source, &cli.stylesheet] {
        if !path.is_file() {
            return Err(CliError::Validation(format!(
                "cannot access file '{}'",
                path.display()
            )));
        }
    }

    let source = fs::read_to_string(&cli.source)?;
    let css = fs::read_to_string(&cli.stylesheet)?;

    let nodes = dox_document::parse(&source)?;
    tracing::info!("rendering {} top-level nodes", nodes.len());

    let result = DocumentRenderer::new().render(&nodes);
    for warning in &result.warnings {
        output.warning(&format!("Warning: {warning}"));
    }

    fs::write(&cli.output, page::assemble(&css, &result.html))?;
    output.success(&format!("Wrote {}", cli.output.display()));
    Ok(())
}
