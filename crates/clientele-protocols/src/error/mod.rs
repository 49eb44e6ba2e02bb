//! Error types for the clientele protocol layer.

mod build;
mod dispose;
mod registry;

pub use build::*;
pub use dispose::*;
pub use registry::*;
