//! `pinlty-docs export` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use pinlty_pages::Export;

use super::StoreArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Output file or directory (default: configured file name in the current directory).
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the export to stdout instead of writing a file.
    #[arg(long)]
    stdout: bool,

    #[command(flatten)]
    store: StoreArgs,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if the pages cannot be serialized or the file cannot
    /// be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_config, viewer) = self.store.open()?;
        let export = viewer.export()?;

        if self.stdout {
            output.content(&export.body)?;
            return Ok(());
        }

        let target = export_path(self.output.as_deref(), &export);
        std::fs::write(&target, &export.body)?;

        output.success(&format!("Exported pages to {}", target.display()));
        output.info(&format!(
            "{} bytes, {}",
            export.body.len(),
            export.mime
        ));
        Ok(())
    }
}

/// Where to write `export`: into `output` if it is a directory, to `output`
/// itself otherwise, or to the export's file name when no output is given.
fn export_path(output: Option<&Path>, export: &Export) -> PathBuf {
    match output {
        Some(dir) if dir.is_dir() => dir.join(&export.file_name),
        Some(file) => file.to_path_buf(),
        None => PathBuf::from(&export.file_name),
    }
}
