//! Typed errors and the error-kind taxonomy.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
}

/// Errors surfaced while constructing the SDK. Request methods never return
/// these; every request outcome normalizes into an [`ApiResponse`](crate::ApiResponse).
#[derive(Error, Debug)]
pub enum SdkError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Decoding a where-clause received as JSON (the inverse of what the builder emits).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WhereError {
    #[error("where must be a JSON object")]
    NotAnObject,
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    #[error("field '{0}' mixes operator keys with plain keys")]
    MixedKeys(String),
}

/// The three kinds of failure a normalized response can carry.
///
/// Transport errors and decode failures collapse to a generic `"error"`
/// message with status 500. Validation errors bind to form fields and are not
/// toast-worthy. Domain errors (any other non-2xx, 401 included) carry a
/// user-facing message; a 401 additionally terminates the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Validation,
    Domain,
}
