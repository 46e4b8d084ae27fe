//! Error types for the task backend client.
//!
//! # Design
//! The backend contract treats any non-2xx response as failure, and the
//! store reacts the same way to all of them (rollback or reload), so one
//! `HttpError` variant with the raw status and body covers the whole wire
//! taxonomy. Serialization and deserialization failures get their own
//! variants for debugging.

use std::fmt;

/// Errors returned by `TodoApi` parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned a non-2xx status. Status 0 is the driver
    /// convention for a transport-level failure that produced no response.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::HttpError { status: 0, body } => {
                write!(f, "transport failure: {body}")
            }
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
