//! Configuration management for Pinlty Docs.
//!
//! Parses `pinlty.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `storage.data_dir`
//! - `storage.slot`
//! - `export.file_name`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the data directory holding persisted slots.
    pub data_dir: Option<PathBuf>,
    /// Override the slot key the page tree is stored under.
    pub slot: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pinlty.toml";

/// Default data directory name, relative to the config directory.
const DEFAULT_DATA_DIR: &str = ".pinlty";

/// Default slot key.
const DEFAULT_SLOT: &str = "pinltyDocs";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration (paths are relative strings from TOML).
    storage: StorageConfigRaw,
    /// Export configuration.
    pub export: ExportConfig,
    /// Viewer configuration.
    pub viewer: ViewerConfig,

    /// Resolved storage configuration (set after loading).
    #[serde(skip)]
    pub storage_resolved: StorageConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw storage configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct StorageConfigRaw {
    data_dir: Option<String>,
    slot: Option<String>,
}

/// Resolved storage configuration with absolute paths.
#[derive(Debug, Default)]
pub struct StorageConfig {
    /// Directory holding persisted slots.
    pub data_dir: PathBuf,
    /// Slot key the page tree is stored under.
    pub slot: String,
}

/// Export configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name offered for exports.
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: "PinltyDocs.json".to_owned(),
        }
    }
}

/// Viewer configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Page opened when no page is given.
    pub home: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            home: "intro".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`storage.data_dir`").
        field: String,
        /// Error message (e.g., "${`PINLTY_HOME`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pinlty.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(data_dir) = &settings.data_dir {
            self.storage_resolved.data_dir.clone_from(data_dir);
        }
        if let Some(slot) = &settings.slot {
            self.storage_resolved.slot.clone_from(slot);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            storage: StorageConfigRaw::default(),
            export: ExportConfig::default(),
            viewer: ViewerConfig::default(),
            storage_resolved: StorageConfig {
                data_dir: base.join(DEFAULT_DATA_DIR),
                slot: DEFAULT_SLOT.to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_storage()?;
        self.validate_export()?;
        require_non_empty(&self.viewer.home, "viewer.home")?;
        Ok(())
    }

    /// Validate storage configuration.
    fn validate_storage(&self) -> Result<(), ConfigError> {
        let slot = &self.storage_resolved.slot;
        require_non_empty(slot, "storage.slot")?;
        if slot.contains(['/', '\\']) || slot == "." || slot == ".." {
            return Err(ConfigError::Validation(format!(
                "storage.slot must be a plain name, got {slot:?}"
            )));
        }
        Ok(())
    }

    /// Validate export configuration.
    fn validate_export(&self) -> Result<(), ConfigError> {
        let file_name = &self.export.file_name;
        require_non_empty(file_name, "export.file_name")?;
        if !file_name.ends_with(".json") {
            return Err(ConfigError::Validation(
                "export.file_name must end with .json".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref data_dir) = self.storage.data_dir {
            self.storage.data_dir = Some(expand::expand_env(data_dir, "storage.data_dir")?);
        }
        if let Some(ref slot) = self.storage.slot {
            self.storage.slot = Some(expand::expand_env(slot, "storage.slot")?);
        }
        self.export.file_name = expand::expand_env(&self.export.file_name, "export.file_name")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.storage_resolved = StorageConfig {
            data_dir: config_dir.join(self.storage.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)),
            slot: self
                .storage
                .slot
                .clone()
                .unwrap_or_else(|| DEFAULT_SLOT.to_owned()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(
            config.storage_resolved.data_dir,
            PathBuf::from("/test/.pinlty")
        );
        assert_eq!(config.storage_resolved.slot, "pinltyDocs");
        assert_eq!(config.export.file_name, "PinltyDocs.json");
        assert_eq!(config.viewer.home, "intro");
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.export.file_name, "PinltyDocs.json");
        assert_eq!(config.viewer.home, "intro");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[storage]
data_dir = "state"
slot = "teamDocs"

[export]
file_name = "TeamDocs.json"

[viewer]
home = "editor-overview"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.storage_resolved.data_dir,
            PathBuf::from("/project/state")
        );
        assert_eq!(config.storage_resolved.slot, "teamDocs");
        assert_eq!(config.export.file_name, "TeamDocs.json");
        assert_eq!(config.viewer.home, "editor-overview");
    }

    #[test]
    fn test_resolve_paths_defaults() {
        let mut config: Config = toml::from_str("[export]\nfile_name = \"a.json\"").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.storage_resolved.data_dir,
            PathBuf::from("/project/.pinlty")
        );
        assert_eq!(config.storage_resolved.slot, "pinltyDocs");
    }

    #[test]
    fn test_load_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pinlty.toml");
        std::fs::write(&path, "[storage]\ndata_dir = \"data\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.storage_resolved.data_dir, tmp.path().join("data"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/pinlty.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pinlty.toml");
        std::fs::write(&path, "[storage\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pinlty.toml");
        std::fs::write(&path, "[storage]\nslot = \"fromFile\"\n").unwrap();

        let settings = CliSettings {
            data_dir: Some(PathBuf::from("/override")),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.storage_resolved.data_dir, PathBuf::from("/override"));
        assert_eq!(config.storage_resolved.slot, "fromFile");
    }

    #[test]
    fn test_apply_cli_settings_slot() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            slot: Some("scratch".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.storage_resolved.slot, "scratch");
        assert_eq!(
            config.storage_resolved.data_dir,
            PathBuf::from("/test/.pinlty")
        ); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(
            config.storage_resolved.data_dir,
            PathBuf::from("/test/.pinlty")
        );
        assert_eq!(config.storage_resolved.slot, "pinltyDocs");
    }

    #[test]
    fn test_expand_env_vars_storage() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("PINLTY_CONFIG_TEST_DIR", "/srv/docs");
        }

        let toml = r#"
[storage]
data_dir = "${PINLTY_CONFIG_TEST_DIR}/state"
slot = "${PINLTY_CONFIG_TEST_SLOT:-pinltyDocs}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.storage_resolved.data_dir,
            PathBuf::from("/srv/docs/state")
        );
        assert_eq!(config.storage_resolved.slot, "pinltyDocs");

        unsafe {
            std::env::remove_var("PINLTY_CONFIG_TEST_DIR");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("PINLTY_CONFIG_TEST_MISSING");
        }

        let toml = r#"
[export]
file_name = "${PINLTY_CONFIG_TEST_MISSING}.json"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("export.file_name"));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_slot_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.storage_resolved.slot = String::new();
        assert_validation_error(&config, &["storage.slot", "empty"]);
    }

    #[test]
    fn test_validate_slot_with_separator() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.storage_resolved.slot = "../docs".to_owned();
        assert_validation_error(&config, &["storage.slot", "plain name"]);
    }

    #[test]
    fn test_validate_export_file_name_extension() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.export.file_name = "PinltyDocs.txt".to_owned();
        assert_validation_error(&config, &["export.file_name", ".json"]);
    }

    #[test]
    fn test_validate_home_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.viewer.home = String::new();
        assert_validation_error(&config, &["viewer.home", "empty"]);
    }

    #[test]
    fn test_cli_slot_override_is_validated() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pinlty.toml");
        std::fs::write(&path, "").unwrap();

        let settings = CliSettings {
            slot: Some("a/b".to_owned()),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
