//! HTTP client settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

/// Settings accumulated by an [`HttpClientBuilder`](crate::HttpClientBuilder).
///
/// Every field has a default, so host applications can embed this in their
/// own configuration and only spell out what they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpClientSettings {
    /// Overall request timeout in milliseconds. `None` disables it.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: Option<u64>,

    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,

    /// How long idle pooled connections are kept.
    #[serde(default = "default_pool_idle_timeout_secs")]
    pub pool_idle_timeout_secs: Option<u64>,

    #[serde(default)]
    pub pool_max_idle_per_host: Option<usize>,

    /// Redirects followed per request; 0 disables following.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl HttpClientSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }

    pub fn pool_idle_timeout(&self) -> Option<Duration> {
        self.pool_idle_timeout_secs.map(Duration::from_secs)
    }

    /// Set a header, replacing any existing one whose name matches
    /// case-insensitively.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.remove_header(name);
        self.headers.insert(name.to_string(), value.to_string());
    }

    pub fn remove_header(&mut self, name: &str) -> bool {
        let before = self.headers.len();
        self.headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        before != self.headers.len()
    }

    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout_ms = timeout.map(duration_ms);
    }

    pub fn set_connect_timeout(&mut self, timeout: Option<Duration>) {
        self.connect_timeout_ms = timeout.map(duration_ms);
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl Default for HttpClientSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: None,
            pool_idle_timeout_secs: default_pool_idle_timeout_secs(),
            pool_max_idle_per_host: None,
            max_redirects: default_max_redirects(),
            headers: BTreeMap::new(),
        }
    }
}

fn default_timeout_ms() -> Option<u64> {
    Some(100_000)
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn default_pool_idle_timeout_secs() -> Option<u64> {
    Some(90)
}

fn default_max_redirects() -> usize {
    10
}
