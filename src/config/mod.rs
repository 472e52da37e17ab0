//! Layered configuration.
//!
//! Values are resolved from three sources, later ones winning:
//!
//! 1. built-in defaults ([`OleloConfig::default`])
//! 2. an optional TOML, JSON or YAML file
//! 3. environment variables such as `OLELO__DICTIONARY__TEXT_PATH`
//!
//! The merged result is validated before it is handed out.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod dictionary;

pub use dictionary::DictionaryConfig;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Prefix of environment variables that override file values.
pub const ENV_PREFIX: &str = "OLELO";

/// Separator between the prefix, section and field in variable names.
const ENV_SEPARATOR: &str = "__";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Checks a configuration section after merging.
pub trait Validate {
    /// Returns the first invalid field, if any.
    fn validate(&self) -> ConfigResult<()>;
}

/// Complete configuration of the `olelo` binary.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OleloConfig {
    /// Where the dictionary lives and how the session behaves
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Diagnostics output
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for OleloConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.dictionary.validate()?;
        self.log.validate()
    }
}

/// Diagnostics output. Events go to stderr so command output stays clean.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` overrides it
    pub level: String,

    /// Emit one JSON object per event
    pub json: bool,

    /// Annotate events with file and line
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        if LOG_LEVELS.contains(&self.level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::invalid(
                "log",
                "level",
                format!("expected one of {}, got {:?}", LOG_LEVELS.join(", "), self.level),
            ))
        }
    }
}

/// Builds an [`OleloConfig`] from defaults, a file and the environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(ENV_PREFIX)
    }
}

impl ConfigLoader {
    /// Loader reading variables named `<env_prefix>__<SECTION>__<FIELD>`.
    pub fn new<S: Into<String>>(env_prefix: S) -> Self {
        Self {
            file: None,
            env_prefix: env_prefix.into(),
        }
    }

    /// Adds a config file layer. The file must exist when [`load`](Self::load) runs.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Merges all layers and validates the result.
    pub fn load(&self) -> ConfigResult<OleloConfig> {
        let defaults = Config::try_from(&OleloConfig::default()).map_err(load_error)?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(path) = &self.file {
            if !path.is_file() {
                return Err(ConfigError::Missing(path.clone()));
            }
            builder = builder.add_source(File::from(path.as_path()).format(file_format(path)?));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let merged: OleloConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(load_error)?;
        merged.validate()?;
        Ok(merged)
    }
}

fn file_format(path: &Path) -> ConfigResult<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(FileFormat::Toml),
        Some("json") => Ok(FileFormat::Json),
        Some("yaml" | "yml") => Ok(FileFormat::Yaml),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn load_error(e: ::config::ConfigError) -> ConfigError {
    ConfigError::Load(e.to_string())
}

/// Loads the configuration from `path` (if any) and the `OLELO` environment.
///
/// A missing file is an error only when a path was given explicitly.
pub fn load_config(path: Option<&Path>) -> ConfigResult<OleloConfig> {
    let loader = ConfigLoader::default();
    match path {
        Some(path) => loader.with_file(path).load(),
        None => loader.load(),
    }
}
