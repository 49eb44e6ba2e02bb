//! # Clientele Protocols
//!
//! Protocol definitions (traits) for the clientele client registry.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`ManagedClient`] - A long-lived client that must be disposed explicitly
//! - [`ClientBuilder`] - Accumulates configuration and builds a [`ManagedClient`]
//! - [`HeaderSettings`] / [`TimeoutSettings`] - Capabilities a builder may expose
//!   to generic configuration steps

pub mod client;
pub mod error;
pub mod settings;

pub use client::{ClientBuilder, ManagedClient};
pub use error::{BuildError, DisposeError, RegistryError};
pub use settings::{HeaderSettings, TimeoutSettings};
