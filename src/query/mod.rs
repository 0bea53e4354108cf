//! Query evaluation engine for todobase
//!
//! Turns raw, untyped query parameters into a deterministic view of the
//! record store.
//!
//! # Evaluation Flow (strict order)
//!
//! 1. Validate every recognized parameter, aborting on the first failure
//! 2. Build the conjunction of per-field predicates
//! 3. Filter the store snapshot, preserving store order
//! 4. Stable-sort by `orderBy` (if specified)
//! 5. Truncate to a positive `limit` (if specified)
//! 6. Return an owned copy of the result
//!
//! Nothing in this module performs I/O or logs.

mod engine;
mod errors;
mod params;
mod predicate;
mod sorter;

pub use engine::{QueryEngine, QueryOutcome};
pub use errors::{QueryError, QueryResult};
pub use params::{RawParams, TodoQuery};
pub use predicate::{PredicateSet, TodoPredicate};
pub use sorter::{OrderField, TodoSorter};
