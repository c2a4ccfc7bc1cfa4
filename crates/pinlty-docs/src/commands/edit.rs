//! `pinlty-docs edit` command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use pinlty_pages::Viewer;

use super::StoreArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the edit command.
#[derive(Args)]
pub(crate) struct EditArgs {
    /// Page identifier, e.g. `editor-assets`.
    page: String,

    /// Read the new content from this file (default: stdin).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the saved page afterwards.
    #[arg(long)]
    show: bool,

    #[command(flatten)]
    store: StoreArgs,
}

impl EditArgs {
    /// Execute the edit command.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be read, the page's section does
    /// not exist, or the pages cannot be saved.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let content = read_content(self.file.as_deref())?;
        let (_config, mut viewer) = self.store.open()?;

        let saved = save_page(&mut viewer, &self.page, content)?;

        if saved.created {
            output.success(&format!("Created {}", self.page));
        } else {
            output.success(&format!("Saved {}", self.page));
        }
        if self.show {
            output.content(&saved.html)?;
        }
        Ok(())
    }
}

/// Result of saving one page.
#[derive(Debug)]
struct SavedPage {
    /// The page did not resolve before the save.
    created: bool,
    /// Rendered page after the save.
    html: String,
}

/// Open `page` in the editor, replace its content and save.
fn save_page(viewer: &mut Viewer, page: &str, content: String) -> Result<SavedPage, CliError> {
    viewer.navigate(page);
    let created = !viewer.store().resolve(viewer.current()).is_found();
    viewer.enter_edit();
    let html = viewer.save(content)?;
    Ok(SavedPage { created, html })
}

/// Read new page content from `file`, or from stdin when absent.
fn read_content(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            CliError::Validation(format!("Failed to read {}: {e}", path.display()))
        }),
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}
