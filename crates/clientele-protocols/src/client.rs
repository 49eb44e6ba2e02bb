//! Client and builder contracts.

use crate::error::{BuildError, DisposeError};

/// A long-lived client owning resources that must be released explicitly.
///
/// The registry is the only party expected to call [`dispose`](Self::dispose)
/// on clients it hands out.
pub trait ManagedClient: Send + Sync + 'static {
    /// Whether the client has released its resources.
    fn is_disposed(&self) -> bool;

    /// Release the client's resources.
    ///
    /// Implementations should treat repeated calls as a no-op.
    fn dispose(&self) -> Result<(), DisposeError>;
}

/// Builder producing a configured [`ManagedClient`].
///
/// A builder is used by exactly one slot during that slot's construction, so
/// it carries no concurrency contract of its own.
pub trait ClientBuilder: Sized + Send + 'static {
    /// The client type this builder produces.
    type Client: ManagedClient;

    /// Create a fresh builder seeded with `base_url` and no other configuration.
    fn create(base_url: &str) -> Result<Self, BuildError>;

    /// Materialize the client from the accumulated settings.
    fn build(self) -> Result<Self::Client, BuildError>;
}
