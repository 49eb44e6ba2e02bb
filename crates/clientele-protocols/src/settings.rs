//! Capability traits over builder settings.
//!
//! Configuration steps written against these traits work with any builder
//! implementation that exposes the capability, not just the HTTP one.

use std::time::Duration;

/// Builders that carry default request headers.
pub trait HeaderSettings {
    /// Set a header, replacing any previous value for the same name.
    ///
    /// Header names compare case-insensitively.
    fn set_header(&mut self, name: &str, value: &str);

    /// Remove a header. Returns whether one was present.
    fn remove_header(&mut self, name: &str) -> bool;

    /// Set an `Authorization: Bearer <token>` header.
    fn set_bearer_auth(&mut self, token: &str) {
        self.set_header("Authorization", &format!("Bearer {}", token));
    }

    /// Set the `User-Agent` header.
    fn set_user_agent(&mut self, agent: &str) {
        self.set_header("User-Agent", agent);
    }
}

/// Builders that carry a request timeout.
pub trait TimeoutSettings {
    /// Set the overall request timeout. `None` disables it.
    fn set_timeout(&mut self, timeout: Option<Duration>);
}
