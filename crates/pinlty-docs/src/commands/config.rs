//! `pinlty-docs config` command implementation.

use clap::Args;

use super::StoreArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the config command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    #[command(flatten)]
    store: StoreArgs,
}

impl ConfigArgs {
    /// Execute the config command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.store.load_config()?;

        output.highlight("Pinlty Docs configuration");
        match &config.config_path {
            Some(path) => output.info(&format!("Config file: {}", path.display())),
            None => output.info("Config file: none (using defaults)"),
        }
        output.info(&format!(
            "Data directory: {}",
            config.storage_resolved.data_dir.display()
        ));
        output.info(&format!("Slot: {}", config.storage_resolved.slot));
        output.info(&format!("Home page: {}", config.viewer.home));
        output.info(&format!("Export file: {}", config.export.file_name));
        Ok(())
    }
}
