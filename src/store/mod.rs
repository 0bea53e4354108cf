//! Record store for todobase
//!
//! Holds the immutable snapshot of todos loaded once at startup.
//!
//! # Invariants
//!
//! - Identifiers are unique across the snapshot
//! - Records are never mutated after load
//! - Iteration order is load order

mod errors;
mod record;
mod store;

pub use errors::{StoreError, StoreResult};
pub use record::Todo;
pub use store::{RecordStore, TodoStore};
