//! Per-name client slot.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use clientele_protocols::error::{BuildError, DisposeError, RegistryError};
use clientele_protocols::{ClientBuilder, ManagedClient};

use super::defaults::ConfigureStep;

#[cfg(test)]
#[path = "slot_tests.rs"]
mod tests;

/// Lifecycle state of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SlotState {
    /// Client not constructed yet.
    Unbuilt = 0,
    /// Client constructed and usable.
    Live = 1,
    /// Client torn down. Terminal.
    Disposed = 2,
}

impl From<u8> for SlotState {
    fn from(v: u8) -> Self {
        match v {
            0 => SlotState::Unbuilt,
            1 => SlotState::Live,
            _ => SlotState::Disposed,
        }
    }
}

/// Deferred, memoized construction of one named client.
///
/// The slot captures everything needed to build its client when it is
/// created: the endpoint, a snapshot of the registry defaults and its own
/// step. The first access builds; concurrent accessors wait for that build
/// and share its result.
pub(crate) struct ClientSlot<B: ClientBuilder> {
    name: String,
    base_url: String,
    defaults: Arc<[ConfigureStep<B>]>,
    configure: ConfigureStep<B>,
    cell: OnceCell<Arc<B::Client>>,
    state: AtomicU8,
    // Set by whoever calls `dispose` on the client, so it runs once.
    released: AtomicBool,
}

impl<B: ClientBuilder> ClientSlot<B> {
    pub(crate) fn new(
        name: &str,
        base_url: &str,
        defaults: Arc<[ConfigureStep<B>]>,
        configure: ConfigureStep<B>,
    ) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            defaults,
            configure,
            cell: OnceCell::new(),
            state: AtomicU8::new(SlotState::Unbuilt as u8),
            released: AtomicBool::new(false),
        }
    }

    /// Current state.
    ///
    /// A live client that reports itself disposed (torn down outside the
    /// registry) moves the slot to `Disposed`.
    pub fn state(&self) -> SlotState {
        let state = SlotState::from(self.state.load(Ordering::Acquire));
        if state != SlotState::Live {
            return state;
        }

        match self.cell.get() {
            Some(client) if client.is_disposed() => {
                self.released.store(true, Ordering::Release);
                let _ = self.state.compare_exchange(
                    SlotState::Live as u8,
                    SlotState::Disposed as u8,
                    Ordering::AcqRel,
                    Ordering::Acquire,
                );
                SlotState::Disposed
            }
            _ => SlotState::Live,
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.state() == SlotState::Disposed
    }

    /// Return the client, constructing it on first access.
    pub fn client(&self) -> Result<Arc<B::Client>, RegistryError> {
        if self.is_disposed() {
            return Err(RegistryError::UseAfterDispose(self.name.clone()));
        }

        let client = self
            .cell
            .get_or_try_init(|| self.construct().map(Arc::new))
            .map_err(|source| RegistryError::Build {
                name: self.name.clone(),
                source,
            })?
            .clone();

        match self.state.compare_exchange(
            SlotState::Unbuilt as u8,
            SlotState::Live as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => Ok(client),
            Err(current) if SlotState::from(current) == SlotState::Live => Ok(client),
            Err(_) => {
                // Torn down while the build was in flight; nobody else will
                // release what was just built.
                warn!("Client '{}' was disposed during construction", self.name);
                if let Err(e) = self.release(&client) {
                    warn!("Failed to dispose abandoned client '{}': {}", self.name, e);
                }
                Err(RegistryError::UseAfterDispose(self.name.clone()))
            }
        }
    }

    /// Move the slot to `Disposed` and dispose its client if one was built.
    ///
    /// Returns whether this call disposed a client.
    pub(crate) fn dispose(&self) -> Result<bool, DisposeError> {
        self.state.swap(SlotState::Disposed as u8, Ordering::AcqRel);

        match self.cell.get() {
            Some(client) => self.release(client),
            None => Ok(false),
        }
    }

    fn construct(&self) -> Result<B::Client, BuildError> {
        debug!("Building client '{}' for {}", self.name, self.base_url);

        let mut builder = B::create(&self.base_url)?;
        for step in self.defaults.iter() {
            step(&mut builder);
        }
        (self.configure)(&mut builder);

        let client = builder.build()?;
        debug!("Client built: {}", self.name);
        Ok(client)
    }

    fn release(&self, client: &B::Client) -> Result<bool, DisposeError> {
        if self.released.swap(true, Ordering::AcqRel) || client.is_disposed() {
            return Ok(false);
        }
        client.dispose()?;
        Ok(true)
    }
}

impl<B: ClientBuilder> std::fmt::Debug for ClientSlot<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSlot")
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("state", &SlotState::from(self.state.load(Ordering::Acquire)))
            .finish()
    }
}
