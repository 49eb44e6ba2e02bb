//! # Clientele
//!
//! A concurrency-safe registry of long-lived, named clients.
//!
//! Each name maps to exactly one live client. Clients are built lazily on
//! first use, exactly once even under concurrent access, and disposed when
//! removed. A client found disposed is replaced transparently by
//! [`ClientRegistry::get_or_add`].
//!
//! ```no_run
//! use clientele::{HttpClientRegistry, steps};
//!
//! let registry = HttpClientRegistry::new();
//! registry.with_defaults(steps::user_agent("my-service/1.0"));
//! registry.add("github", "https://api.github.com", steps::bearer_auth("token"))?;
//!
//! let github = registry.get("github")?;
//! let request = github.get("user/repos");
//! # Ok::<(), clientele::RegistryError>(())
//! ```

pub use clientele_core::{ClientRegistry, ConfigureStep, DefaultSteps, SlotState, steps};
pub use clientele_http::{ClientError, HttpClient, HttpClientBuilder, HttpClientSettings};
pub use clientele_protocols::{
    BuildError, ClientBuilder, DisposeError, HeaderSettings, ManagedClient, RegistryError,
    TimeoutSettings,
};

/// Registry of named [`HttpClient`]s.
pub type HttpClientRegistry = ClientRegistry<HttpClientBuilder>;
