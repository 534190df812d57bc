//! Error types for crm-http

use thiserror::Error;

use crate::router::FailureKind;

/// A failed remote call as seen by the request pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("HTTP {status}: {message}")]
pub struct HttpFailure {
    pub status: u16,
    pub message: String,
    pub body: Option<String>,
}

impl HttpFailure {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn kind(&self) -> FailureKind {
        FailureKind::from_status(self.status)
    }
}

/// Errors that can occur when loading the router configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid route for {field}: {route:?} (must start with '/')")]
    InvalidRoute { field: &'static str, route: String },
}
