//! Application layer managing store lifecycle and mutation workflows.
//!
//! This module coordinates between the domain records and the persistence
//! layer: every mutation runs to completion and flushes the full
//! collection before returning.

pub mod store;

pub use store::*;
