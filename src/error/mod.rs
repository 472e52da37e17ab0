//! Error taxonomy.
//!
//! Lookups that miss are not errors; they surface as `Option` or `bool`.
//! Everything that touches a file or the configuration returns a typed error
//! from this module. Failures that must not interrupt the caller, such as a
//! failed autosave, are handed to the process-wide [`ErrorReporter`] instead.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;

pub mod config;
pub mod persistence;

pub use persistence::PersistenceError;

/// Result type alias used throughout the crate.
pub type OleloResult<T> = Result<T, OleloError>;

/// Any failure the library can return.
#[derive(Error, Debug)]
pub enum OleloError {
    /// Layered configuration could not be assembled or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A dictionary file could not be read, decoded or written.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// A non-fatal failure together with where it happened.
#[derive(Debug)]
pub struct ErrorContext {
    pub error: OleloError,
    /// Subsystem name, e.g. `dictionary`
    pub component: String,
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new<S: Into<String>>(error: OleloError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Attaches free-form detail, e.g. the operation that triggered the failure.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.component, self.error)?;
        match &self.details {
            Some(details) => write!(f, " ({details})"),
            None => Ok(()),
        }
    }
}

/// Sink for failures that are recorded rather than returned.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorReporter: Send + Sync + fmt::Debug {
    fn report(&self, context: ErrorContext);
}

/// Reports failures as `tracing` error events.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl TracingErrorReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            component = %context.component,
            details = context.details.as_deref().unwrap_or(""),
            error = %context.error,
            "Non-fatal error"
        );
    }
}

/// Installed reporter; `None` falls back to [`TracingErrorReporter`].
static REPORTER: Lazy<RwLock<Option<Arc<dyn ErrorReporter>>>> = Lazy::new(|| RwLock::new(None));

/// Hands `context` to the installed reporter.
pub fn report_error(context: ErrorContext) {
    match REPORTER.read().as_ref() {
        Some(reporter) => reporter.report(context),
        None => TracingErrorReporter.report(context),
    }
}

/// Replaces the process-wide reporter.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    *REPORTER.write() = Some(reporter);
}
