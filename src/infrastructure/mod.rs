//! Infrastructure layer providing external service integrations.
//!
//! This module contains the file persistence backing the record stores.

pub mod persistence;

pub use persistence::*;
