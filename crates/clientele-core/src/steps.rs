//! Reusable configuration steps.
//!
//! Each function returns a step usable with [`ClientRegistry::add`],
//! [`ClientRegistry::get_or_add`] or [`ClientRegistry::with_defaults`] for any
//! builder exposing the matching capability.
//!
//! [`ClientRegistry::add`]: crate::ClientRegistry::add
//! [`ClientRegistry::get_or_add`]: crate::ClientRegistry::get_or_add
//! [`ClientRegistry::with_defaults`]: crate::ClientRegistry::with_defaults

use std::time::Duration;

use clientele_protocols::{HeaderSettings, TimeoutSettings};

/// Set a header on every request.
pub fn header<B>(
    name: impl Into<String>,
    value: impl Into<String>,
) -> impl Fn(&mut B) + Send + Sync + 'static
where
    B: HeaderSettings + 'static,
{
    let name = name.into();
    let value = value.into();
    move |builder: &mut B| builder.set_header(&name, &value)
}

/// Authenticate with a bearer token.
pub fn bearer_auth<B>(token: impl Into<String>) -> impl Fn(&mut B) + Send + Sync + 'static
where
    B: HeaderSettings + 'static,
{
    let token = token.into();
    move |builder: &mut B| builder.set_bearer_auth(&token)
}

pub fn user_agent<B>(agent: impl Into<String>) -> impl Fn(&mut B) + Send + Sync + 'static
where
    B: HeaderSettings + 'static,
{
    let agent = agent.into();
    move |builder: &mut B| builder.set_user_agent(&agent)
}

/// Set the request timeout.
pub fn timeout<B>(timeout: Duration) -> impl Fn(&mut B) + Send + Sync + 'static
where
    B: TimeoutSettings + 'static,
{
    move |builder: &mut B| builder.set_timeout(Some(timeout))
}
