//! Persistence layer for sites, users, alerts, and toolbox talks.
//!
//! Every collection sits behind the [`collection::Collection`] trait with two
//! interchangeable backends: an insertion-ordered in-memory map and a MongoDB
//! collection. [`StoreResolver`] picks one per process; callers only ever see
//! a [`Store`].

pub mod collection;
pub mod error;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::{Backend, Store, StoreCounts, StoreResolver};
