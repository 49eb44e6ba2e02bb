//! Test doubles for the registry.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use clientele_protocols::error::{BuildError, DisposeError};
use clientele_protocols::{ClientBuilder, HeaderSettings, ManagedClient, TimeoutSettings};

pub(crate) struct MockBuilder {
    pub base_url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
    pub build_delay: Option<Duration>,
    pub fail_build: bool,
    pub fail_dispose: bool,
}

impl ClientBuilder for MockBuilder {
    type Client = MockClient;

    fn create(base_url: &str) -> Result<Self, BuildError> {
        if !base_url.starts_with("http") {
            return Err(BuildError::InvalidBaseUrl {
                url: base_url.to_string(),
                message: "expected an http(s) URL".to_string(),
            });
        }
        Ok(Self {
            base_url: base_url.to_string(),
            headers: Vec::new(),
            timeout: None,
            build_delay: None,
            fail_build: false,
            fail_dispose: false,
        })
    }

    fn build(self) -> Result<MockClient, BuildError> {
        if let Some(delay) = self.build_delay {
            std::thread::sleep(delay);
        }
        if self.fail_build {
            return Err(BuildError::Client("mock build failure".to_string()));
        }
        Ok(MockClient {
            base_url: self.base_url,
            headers: self.headers,
            timeout: self.timeout,
            fail_dispose: self.fail_dispose,
            disposed: AtomicBool::new(false),
            dispose_calls: AtomicUsize::new(0),
        })
    }
}

impl HeaderSettings for MockBuilder {
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }

    fn remove_header(&mut self, name: &str) -> bool {
        let before = self.headers.len();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        before != self.headers.len()
    }
}

impl TimeoutSettings for MockBuilder {
    fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }
}

#[derive(Debug)]
pub(crate) struct MockClient {
    pub base_url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
    fail_dispose: bool,
    disposed: AtomicBool,
    dispose_calls: AtomicUsize,
}

impl MockClient {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn dispose_calls(&self) -> usize {
        self.dispose_calls.load(Ordering::SeqCst)
    }

    /// Simulate teardown that bypasses the registry.
    pub fn tear_down_externally(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }
}

impl ManagedClient for MockClient {
    fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    fn dispose(&self) -> Result<(), DisposeError> {
        self.dispose_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_dispose {
            return Err(DisposeError::Failed(format!("{} refused to close", self.base_url)));
        }
        self.disposed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Step that counts how many times a client was constructed.
pub(crate) fn counting_step(
    counter: &Arc<AtomicUsize>,
) -> impl Fn(&mut MockBuilder) + Send + Sync + 'static {
    let counter = counter.clone();
    move |_builder: &mut MockBuilder| {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}
