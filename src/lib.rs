//! todobase - A deterministic, read-only query service over a todo snapshot
//!
//! The todo collection is loaded once at startup and never mutated. Queries
//! filter, order and limit that snapshot; lookups fetch a single todo.

pub mod cli;
pub mod http_server;
pub mod query;
pub mod rest_api;
pub mod store;
