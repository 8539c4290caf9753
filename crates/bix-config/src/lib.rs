//! # bix-config
//!
//! Layered configuration loading for bix using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BIX_*` prefix, `__` as separator)
//! 2. Project-level `.bix/config.toml`
//! 3. User-level `~/.config/bix/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BIX_INSPECT__PARALLEL` -> `inspect.parallel`,
//! `BIX_OUTPUT__NAMES_PER_LINE` -> `output.names_per_line`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use bix_config::BixConfig;
//!
//! let config = BixConfig::load_with_dotenv().expect("config");
//! println!("scanning {} doc lines", config.inspect.doc_max_lines);
//! ```

mod error;
mod inspect;
mod output;

pub use error::ConfigError;
pub use inspect::InspectConfig;
pub use output::OutputConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const OUTPUT_FORMATS: &[&str] = &["text", "json", "raw", "table"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BixConfig {
    #[serde(default)]
    pub inspect: InspectConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl BixConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`BixConfig::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can layer additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".bix/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("BIX_").split("__"))
    }

    /// Reject values the inspector and reporter cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inspect.doc_max_lines == 0 {
            return Err(ConfigError::InvalidValue {
                field: "inspect.doc_max_lines".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.output.names_per_line == 0 {
            return Err(ConfigError::InvalidValue {
                field: "output.names_per_line".into(),
                reason: "must be at least 1".into(),
            });
        }
        if !OUTPUT_FORMATS.contains(&self.output.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "output.format".into(),
                reason: format!(
                    "'{}' is not one of {}",
                    self.output.format,
                    OUTPUT_FORMATS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bix").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_is_valid() {
        let config = BixConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.inspect.doc_max_lines, 3);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn figment_builds_without_files() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());
            let config: BixConfig = BixConfig::figment().extract()?;
            assert!(!config.inspect.parallel);
            assert_eq!(config.output.names_per_line, 5);
            Ok(())
        });
    }

    #[test]
    fn project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());
            std::fs::create_dir(".bix").map_err(|e| e.to_string())?;
            jail.create_file(
                ".bix/config.toml",
                r#"
                [inspect]
                parallel = true

                [output]
                format = "json"
                "#,
            )?;
            let config: BixConfig = BixConfig::figment().extract()?;
            assert!(config.inspect.parallel);
            assert_eq!(config.output.format, "json");
            assert_eq!(config.inspect.doc_max_lines, 3);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());
            std::fs::create_dir(".bix").map_err(|e| e.to_string())?;
            jail.create_file(".bix/config.toml", "[output]\nnames_per_line = 8\n")?;
            jail.set_env("BIX_OUTPUT__NAMES_PER_LINE", "3");
            let config: BixConfig = BixConfig::figment().extract()?;
            assert_eq!(config.output.names_per_line, 3);
            Ok(())
        });
    }

    #[test]
    fn zero_doc_lines_is_rejected() {
        let mut config = BixConfig::default();
        config.inspect.doc_max_lines = 0;
        let error = config.validate().expect_err("zero lines should be invalid");
        assert!(error.to_string().contains("inspect.doc_max_lines"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let mut config = BixConfig::default();
        config.output.format = "xml".into();
        let error = config.validate().expect_err("xml is not a format");
        assert!(error.to_string().contains("output.format"));
    }
}
