//! CLI command implementations.

pub(crate) mod config;
pub(crate) mod edit;
pub(crate) mod export;
pub(crate) mod list;
pub(crate) mod show;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use pinlty_config::{CliSettings, Config};
use pinlty_pages::{PageStore, Viewer};
use pinlty_slot::FileSlotStore;

use crate::error::CliError;

pub(crate) use config::ConfigArgs;
pub(crate) use edit::EditArgs;
pub(crate) use export::ExportArgs;
pub(crate) use list::ListArgs;
pub(crate) use show::ShowArgs;

/// Arguments locating the configuration and the persisted pages.
#[derive(Args)]
pub(crate) struct StoreArgs {
    /// Path to configuration file (default: auto-discover pinlty.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding persisted pages (overrides config).
    #[arg(long, env = "PINLTY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Slot the pages are stored under (overrides config).
    #[arg(long)]
    slot: Option<String>,
}

impl StoreArgs {
    /// Load configuration with these arguments applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            data_dir: self.data_dir.clone(),
            slot: self.slot.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Load configuration and open a viewer session on the persisted pages.
    pub(crate) fn open(&self) -> Result<(Config, Viewer), CliError> {
        let config = self.load_config()?;
        let viewer = open_viewer(&config);
        Ok((config, viewer))
    }
}

#[cfg(test)]
impl StoreArgs {
    /// Arguments reading `config` with no overrides.
    pub(crate) fn with_config(config: PathBuf) -> Self {
        Self {
            config: Some(config),
            data_dir: None,
            slot: None,
        }
    }
}

/// Open a viewer session backed by the configured data directory.
pub(crate) fn open_viewer(config: &Config) -> Viewer {
    let storage = &config.storage_resolved;
    tracing::debug!(data_dir = %storage.data_dir.display(), slot = %storage.slot, "Opening pages");
    let slots = Arc::new(FileSlotStore::new(storage.data_dir.clone()));
    let store = PageStore::initialize(slots, storage.slot.as_str());

    Viewer::new(store)
        .with_home(&config.viewer.home)
        .with_export_file_name(config.export.file_name.as_str())
}
