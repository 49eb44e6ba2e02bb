//! Client disposal errors.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DisposeError {
    #[error("Dispose failed: {0}")]
    Failed(String),
}
