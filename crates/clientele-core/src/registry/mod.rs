//! Client registry, slots and the shared default-step list.

mod client_registry;
mod defaults;
mod slot;

#[cfg(test)]
pub(crate) mod test_support;

pub use client_registry::ClientRegistry;
pub use defaults::{ConfigureStep, DefaultSteps};
pub(crate) use slot::ClientSlot;
pub use slot::SlotState;
