//! Errors raised while assembling the layered configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration failures, split by the layer that produced them.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Config file {0} does not exist")]
    Missing(PathBuf),

    /// The config file extension is not one of toml, json, yaml or yml.
    #[error("Config file {0} has an unsupported format")]
    UnsupportedFormat(PathBuf),

    /// A source could not be merged or deserialized.
    #[error("Cannot load configuration: {0}")]
    Load(String),

    /// A merged value is outside what the dictionary accepts.
    #[error("Invalid value for {section}.{field}: {reason}")]
    Invalid {
        /// Config section, e.g. `dictionary`
        section: &'static str,
        /// Field within the section
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::Invalid`].
    pub fn invalid<S: Into<String>>(section: &'static str, field: &'static str, reason: S) -> Self {
        Self::Invalid {
            section,
            field,
            reason: reason.into(),
        }
    }

    /// The offending `section.field` for validation failures.
    pub fn field(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Invalid { section, field, .. } => Some((section, field)),
            _ => None,
        }
    }
}
