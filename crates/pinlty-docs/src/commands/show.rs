//! `pinlty-docs show` command implementation.

use clap::Args;

use super::StoreArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Page identifier, e.g. `editor-overview` (default: configured home page).
    page: Option<String>,

    #[command(flatten)]
    store: StoreArgs,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// Missing pages print the not-found page rather than failing.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_config, mut viewer) = self.store.open()?;

        let html = match self.page.as_deref() {
            Some(page) => viewer.navigate(page),
            None => viewer.render(),
        };

        output.content(&html)?;
        Ok(())
    }
}
