//! Data store module
//!
//! Process-local tables shared by the manager implementations.

pub mod store;

pub use store::*;
