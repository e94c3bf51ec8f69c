//! Domain building blocks shared by the persistence and HTTP layers.
//!
//! This crate has no internal dependencies: error types, id and site-code
//! generation, the wall clock, and required-field validation live here so
//! both `sara-db` and `sara-api` can use them.

pub mod alert;
pub mod clock;
pub mod error;
pub mod ids;
pub mod samples;
pub mod types;
pub mod validation;
