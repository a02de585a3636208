//! Error types for startup and template rendering.

use thiserror::Error;

/// Errors that abort the process before the listener binds.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid listen address '{addr}': {reason}")]
    Address { addr: String, reason: String },

    #[error("template '{name}' failed to load: {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A per-request template rendering failure.
///
/// Routes never catch this; the dispatcher logs it and answers with a
/// plain 500.
#[derive(Debug, Error)]
#[error("failed to render template '{name}': {source}")]
pub struct RenderError {
    pub name: String,
    #[source]
    pub source: minijinja::Error,
}
