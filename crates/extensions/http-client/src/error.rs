//! HTTP client errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Client has been disposed")]
    Disposed,

    #[error("Invalid request path '{path}': {message}")]
    InvalidPath { path: String, message: String },
}
