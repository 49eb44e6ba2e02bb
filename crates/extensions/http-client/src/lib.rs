//! HTTP client extension for clientele.
//!
//! Provides [`HttpClientBuilder`] and [`HttpClient`], a `reqwest`-backed
//! implementation of the registry's builder and client contracts.

mod builder;
mod client;
mod error;
mod settings;

pub use builder::HttpClientBuilder;
pub use client::HttpClient;
pub use error::ClientError;
pub use settings::HttpClientSettings;
