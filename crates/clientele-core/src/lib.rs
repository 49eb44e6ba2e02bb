//! # Clientele Core
//!
//! Registry of long-lived, named clients.
//!
//! ## Components
//!
//! - [`ClientRegistry`] - Name to client mapping with lazy, exactly-once construction
//! - [`SlotState`] - Lifecycle state of a registered name
//! - [`DefaultSteps`] - Configuration applied to every slot created after it was added
//! - [`steps`] - Reusable configuration steps over builder capabilities

pub mod registry;
pub mod steps;

pub use registry::{ClientRegistry, ConfigureStep, DefaultSteps, SlotState};
