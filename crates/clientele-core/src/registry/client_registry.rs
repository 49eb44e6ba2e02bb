//! Registry mapping names to lazily built clients.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, info, warn};

use clientele_protocols::ClientBuilder;
use clientele_protocols::error::{DisposeError, RegistryError};

use super::defaults::{ConfigureStep, DefaultSteps};
use super::slot::{ClientSlot, SlotState};

#[cfg(test)]
#[path = "client_registry_tests.rs"]
mod tests;

/// Registry of named clients.
///
/// - At most one live client per name
/// - Construction is deferred to first access and runs once per slot
/// - Disposed clients are replaced transparently by [`get_or_add`](Self::get_or_add)
///
/// Slots live in a `DashMap`, so unrelated names do not share a lock. Map
/// guards are never held while a client is built or disposed.
pub struct ClientRegistry<B: ClientBuilder> {
    slots: DashMap<String, Arc<ClientSlot<B>>>,
    defaults: DefaultSteps<B>,
}

impl<B: ClientBuilder> ClientRegistry<B> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
            defaults: DefaultSteps::new(),
        }
    }

    /// Register a client under `name` without building it.
    ///
    /// Returns an error if the name is already registered, built or not.
    pub fn add<F>(&self, name: &str, base_url: &str, configure: F) -> Result<(), RegistryError>
    where
        F: Fn(&mut B) + Send + Sync + 'static,
    {
        validate_name(name)?;

        match self.slots.entry(name.to_string()) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateRegistration(name.to_string())),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(self.new_slot(name, base_url, Arc::new(configure))));
                info!("Client registered: {} ({})", name, base_url);
                Ok(())
            }
        }
    }

    /// Get a registered client, building it on first access.
    pub fn get(&self, name: &str) -> Result<Arc<B::Client>, RegistryError> {
        validate_name(name)?;

        let slot = self
            .slots
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        slot.client()
    }

    /// Get the client for `name`, registering it first if needed.
    ///
    /// An existing live slot wins and the arguments are ignored. A disposed
    /// one is replaced by a slot built from this call's arguments.
    pub fn get_or_add<F>(
        &self,
        name: &str,
        base_url: &str,
        configure: F,
    ) -> Result<Arc<B::Client>, RegistryError>
    where
        F: Fn(&mut B) + Send + Sync + 'static,
    {
        validate_name(name)?;
        let configure: ConfigureStep<B> = Arc::new(configure);

        loop {
            let slot = self.resolve_slot(name, base_url, &configure);
            match slot.client() {
                Err(RegistryError::UseAfterDispose(_)) => {
                    debug!("Client '{}' torn down while resolving, retrying", name);
                }
                result => return result,
            }
        }
    }

    /// Append a step applied to every client registered after this call.
    pub fn with_defaults<F>(&self, configure: F) -> &Self
    where
        F: Fn(&mut B) + Send + Sync + 'static,
    {
        self.defaults.push(Arc::new(configure));
        self
    }

    /// Remove a client, disposing it if it was built.
    ///
    /// Removing an unknown name is a no-op. The name stays removed even if
    /// disposal fails.
    pub fn remove(&self, name: &str) -> Result<(), RegistryError> {
        validate_name(name)?;

        let Some((name, slot)) = self.slots.remove(name) else {
            return Ok(());
        };

        info!("Client removed: {}", name);
        dispose_slot(&name, &slot).map_err(|source| RegistryError::Dispose { name, source })
    }

    /// Remove and dispose every client.
    ///
    /// Keeps going past disposal failures and reports all of them.
    pub fn clear(&self) -> Result<(), RegistryError> {
        let names: Vec<String> = self.slots.iter().map(|entry| entry.key().clone()).collect();
        let mut failures = Vec::new();

        for name in names {
            // A concurrent `remove` may have taken it already.
            let Some((name, slot)) = self.slots.remove(&name) else {
                continue;
            };
            if let Err(e) = dispose_slot(&name, &slot) {
                failures.push((name, e));
            }
        }

        info!("Client registry cleared");
        if failures.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::ClearFailed(failures))
        }
    }

    /// Check if a client is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Lifecycle state of the slot registered under `name`.
    pub fn state(&self, name: &str) -> Option<SlotState> {
        self.slots.get(name).map(|entry| entry.value().state())
    }

    /// List all registered names.
    pub fn names(&self) -> Vec<String> {
        self.slots.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Get the number of registered clients.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn new_slot(&self, name: &str, base_url: &str, configure: ConfigureStep<B>) -> ClientSlot<B> {
        ClientSlot::new(name, base_url, self.defaults.snapshot(), configure)
    }

    /// Find the live slot for `name` or install a fresh one.
    ///
    /// The disposed check and the replacement happen under the same entry
    /// lock, so only one caller can replace a disposed slot.
    fn resolve_slot(
        &self,
        name: &str,
        base_url: &str,
        configure: &ConfigureStep<B>,
    ) -> Arc<ClientSlot<B>> {
        match self.slots.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                if !entry.get().is_disposed() {
                    return Arc::clone(entry.get());
                }
                debug!("Replacing disposed client: {}", name);
                let slot = Arc::new(self.new_slot(name, base_url, configure.clone()));
                entry.insert(Arc::clone(&slot));
                slot
            }
            Entry::Vacant(entry) => {
                let slot = Arc::new(self.new_slot(name, base_url, configure.clone()));
                entry.insert(Arc::clone(&slot));
                info!("Client registered: {} ({})", name, base_url);
                slot
            }
        }
    }
}

impl<B: ClientBuilder> Default for ClientRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ClientBuilder> std::fmt::Debug for ClientRegistry<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientRegistry")
            .field("names", &self.names())
            .field("default_steps", &self.defaults.len())
            .finish()
    }
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    if name.trim().is_empty() {
        return Err(RegistryError::InvalidArgument(
            "client name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn dispose_slot<B: ClientBuilder>(name: &str, slot: &ClientSlot<B>) -> Result<(), DisposeError> {
    match slot.dispose() {
        Ok(true) => {
            debug!("Client disposed: {}", name);
            Ok(())
        }
        Ok(false) => Ok(()),
        Err(e) => {
            warn!("Failed to dispose client '{}': {}", name, e);
            Err(e)
        }
    }
}
