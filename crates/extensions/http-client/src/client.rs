//! HTTP client.

use parking_lot::RwLock;
use reqwest::header::HeaderMap;
use reqwest::{Method, RequestBuilder};
use tracing::debug;
use url::Url;

use clientele_protocols::ManagedClient;
use clientele_protocols::error::DisposeError;

use crate::error::ClientError;
use crate::settings::HttpClientSettings;

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

/// A configured HTTP client bound to a base URL.
///
/// Owns a pooled `reqwest::Client`. Disposing drops it, closing idle pooled
/// connections once in-flight requests finish.
pub struct HttpClient {
    base_url: Url,
    headers: HeaderMap,
    settings: HttpClientSettings,
    inner: RwLock<Option<reqwest::Client>>,
}

impl HttpClient {
    pub(crate) fn new(
        base_url: Url,
        headers: HeaderMap,
        settings: HttpClientSettings,
        inner: reqwest::Client,
    ) -> Self {
        Self {
            base_url,
            headers,
            settings,
            inner: RwLock::new(Some(inner)),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn settings(&self) -> &HttpClientSettings {
        &self.settings
    }

    /// Resolve `path` against the base URL.
    ///
    /// The path is appended to the base URL's path rather than replacing it,
    /// so `https://host/v1` + `users` gives `https://host/v1/users`. Absolute
    /// URLs are rejected.
    pub fn url_for(&self, path: &str) -> Result<Url, ClientError> {
        // `Url::join` would let an absolute URL replace the base host.
        if Url::parse(path).is_ok() {
            return Err(ClientError::InvalidPath {
                path: path.to_string(),
                message: "expected a path relative to the base URL".to_string(),
            });
        }

        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }

        base.join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidPath {
                path: path.to_string(),
                message: e.to_string(),
            })
    }

    /// Start a request against `path`.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.url_for(path)?;
        let inner = self.inner.read();
        let client = inner.as_ref().ok_or(ClientError::Disposed)?;
        Ok(client.request(method, url))
    }

    pub fn get(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        self.request(Method::POST, path)
    }
}

impl ManagedClient for HttpClient {
    fn is_disposed(&self) -> bool {
        self.inner.read().is_none()
    }

    fn dispose(&self) -> Result<(), DisposeError> {
        if self.inner.write().take().is_some() {
            debug!("HTTP client disposed: {}", self.base_url);
        }
        Ok(())
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
