//! HTTP client builder.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use tracing::debug;
use url::Url;

use clientele_protocols::error::BuildError;
use clientele_protocols::{ClientBuilder, HeaderSettings, TimeoutSettings};

use crate::client::HttpClient;
use crate::settings::HttpClientSettings;

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;

/// Accumulates settings for an [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpClientBuilder {
    base_url: Url,
    settings: HttpClientSettings,
}

impl HttpClientBuilder {
    /// Endpoint this builder was seeded with.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Replace all accumulated settings.
    pub fn with_settings(&mut self, settings: HttpClientSettings) -> &mut Self {
        self.settings = settings;
        self
    }

    pub fn with_header(&mut self, name: &str, value: &str) -> &mut Self {
        self.settings.set_header(name, value);
        self
    }

    pub fn with_timeout(&mut self, timeout: Option<Duration>) -> &mut Self {
        self.settings.set_timeout(timeout);
        self
    }

    pub fn with_connect_timeout(&mut self, timeout: Option<Duration>) -> &mut Self {
        self.settings.set_connect_timeout(timeout);
        self
    }

    pub fn with_max_redirects(&mut self, max_redirects: usize) -> &mut Self {
        self.settings.max_redirects = max_redirects;
        self
    }

    pub fn settings(&self) -> &HttpClientSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut HttpClientSettings {
        &mut self.settings
    }

    fn header_map(&self) -> Result<HeaderMap, BuildError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.settings.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| BuildError::InvalidHeader {
                    name: name.clone(),
                    message: e.to_string(),
                })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| BuildError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
            })?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }
}

impl ClientBuilder for HttpClientBuilder {
    type Client = HttpClient;

    fn create(base_url: &str) -> Result<Self, BuildError> {
        let invalid = |message: String| BuildError::InvalidBaseUrl {
            url: base_url.to_string(),
            message,
        };

        let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        Ok(Self {
            base_url: url,
            settings: HttpClientSettings::default(),
        })
    }

    fn build(self) -> Result<HttpClient, BuildError> {
        let headers = self.header_map()?;

        let redirect = match self.settings.max_redirects {
            0 => Policy::none(),
            max => Policy::limited(max),
        };

        let mut builder = reqwest::Client::builder()
            .default_headers(headers.clone())
            .redirect(redirect)
            .pool_idle_timeout(self.settings.pool_idle_timeout());
        if let Some(timeout) = self.settings.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.settings.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(max_idle) = self.settings.pool_max_idle_per_host {
            builder = builder.pool_max_idle_per_host(max_idle);
        }

        let inner = builder
            .build()
            .map_err(|e| BuildError::Client(e.to_string()))?;

        debug!("HTTP client built for {}", self.base_url);
        Ok(HttpClient::new(self.base_url, headers, self.settings, inner))
    }
}

impl HeaderSettings for HttpClientBuilder {
    fn set_header(&mut self, name: &str, value: &str) {
        self.settings.set_header(name, value);
    }

    fn remove_header(&mut self, name: &str) -> bool {
        self.settings.remove_header(name)
    }
}

impl TimeoutSettings for HttpClientBuilder {
    fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.with_timeout(timeout);
    }
}
