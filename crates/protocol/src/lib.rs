//! Shared wire types for settings-sync
//!
//! Defines the JSON structures and response semantics of the
//! user-settings endpoint consumed by the UI.

pub mod endpoint;
pub mod wire;

pub use endpoint::*;
pub use wire::*;
