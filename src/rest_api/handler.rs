//! # REST API Handler
//!
//! Thin adapters from requests onto the query engine.

use std::sync::Arc;

use crate::query::{QueryEngine, RawParams, TodoQuery};
use crate::store::{RecordStore, Todo};

use super::errors::RestResult;
use super::response::{ListResponse, SingleResponse};

/// Handler trait for the todo endpoints
pub trait TodoHandler: Send + Sync {
    /// List todos matching the raw query parameters
    fn list(&self, params: &RawParams) -> RestResult<ListResponse<Todo>>;

    /// Get a single todo by ID
    fn get(&self, id: &str) -> RestResult<SingleResponse<Todo>>;

    /// Number of todos being served
    fn size(&self) -> usize;
}

/// Handler backed by a shared record store
pub struct StoreHandler<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> StoreHandler<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: RecordStore> TodoHandler for StoreHandler<S> {
    fn list(&self, params: &RawParams) -> RestResult<ListResponse<Todo>> {
        let query = TodoQuery::parse(params).map_err(|e| {
            tracing::debug!(error = %e, "rejected todo query");
            e
        })?;

        let outcome = QueryEngine::new(self.store.as_ref()).execute(&query);
        tracing::debug!(
            scanned = outcome.scanned_count,
            matched = outcome.matched_count,
            returned = outcome.len(),
            "todo query complete"
        );

        Ok(ListResponse::new(outcome.todos, query.limit))
    }

    fn get(&self, id: &str) -> RestResult<SingleResponse<Todo>> {
        let todo = QueryEngine::new(self.store.as_ref())
            .get_record_by_id(id)
            .map_err(|e| {
                tracing::debug!(id, error = %e, "todo lookup failed");
                e
            })?;

        Ok(SingleResponse::new(todo))
    }

    fn size(&self) -> usize {
        self.store.len()
    }
}
