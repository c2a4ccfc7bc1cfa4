//! Pinlty Docs CLI - documentation viewer and editor.
//!
//! Provides commands for:
//! - `show`: Render a page
//! - `list`: List all pages
//! - `edit`: Replace a page's content and save it
//! - `export`: Write the whole page tree to `PinltyDocs.json`
//! - `config`: Show the resolved configuration

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, EditArgs, ExportArgs, ListArgs, ShowArgs};
use output::Output;

/// Pinlty Docs - documentation viewer and editor.
#[derive(Parser)]
#[command(name = "pinlty-docs", version, about)]
struct Cli {
    /// Enable verbose output (show storage and edit logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page.
    Show(ShowArgs),
    /// List all pages.
    List(ListArgs),
    /// Replace a page's content and save it.
    Edit(EditArgs),
    /// Export all pages as JSON.
    Export(ExportArgs),
    /// Show the resolved configuration.
    Config(ConfigArgs),
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
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Show(args) => args.execute(),
        Commands::List(args) => args.execute(),
        Commands::Edit(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
