//! Clinic record-keeping library.
//!
//! Maintains the doctor and patient rosters for a single clinic: ordered,
//! uniquely-keyed record collections with JSON file persistence. The UI
//! layer drives the stores through their public operations and renders
//! whatever they return.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use domain::*;
pub use application::*;
