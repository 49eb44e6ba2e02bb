//! Registry errors.

use thiserror::Error;

use super::{BuildError, DisposeError};

/// Errors raised by registry operations.
///
/// `NotFound` and `UseAfterDispose` are kept apart so callers can tell a name
/// that never existed from one whose client was torn down.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid client name: {0}")]
    InvalidArgument(String),

    #[error("Client already registered: {0}")]
    DuplicateRegistration(String),

    #[error("Client not found: {0}")]
    NotFound(String),

    #[error("Client has been disposed: {0}")]
    UseAfterDispose(String),

    #[error("Failed to build client '{name}': {source}")]
    Build {
        name: String,
        #[source]
        source: BuildError,
    },

    #[error("Failed to dispose client '{name}': {source}")]
    Dispose {
        name: String,
        #[source]
        source: DisposeError,
    },

    #[error("Failed to dispose {} client(s) while clearing: {}", .0.len(), format_failures(.0))]
    ClearFailed(Vec<(String, DisposeError)>),
}

impl RegistryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_use_after_dispose(&self) -> bool {
        matches!(self, Self::UseAfterDispose(_))
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateRegistration(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

fn format_failures(failures: &[(String, DisposeError)]) -> String {
    failures
        .iter()
        .map(|(name, err)| format!("{}: {}", name, err))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
