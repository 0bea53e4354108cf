//! # REST API Routes
//!
//! Axum routes for the todo endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::query::RawParams;
use crate::store::Todo;

use super::errors::RestError;
use super::handler::TodoHandler;
use super::response::{ListResponse, SingleResponse};

/// REST API server state
pub struct RestServer<H: TodoHandler> {
    handler: Arc<H>,
    get_status: StatusCode,
}

impl<H: TodoHandler + 'static> RestServer<H> {
    pub fn new(handler: Arc<H>) -> Self {
        Self {
            handler,
            get_status: StatusCode::OK,
        }
    }

    /// Status for a successful single-todo read (200 unless overridden)
    pub fn with_get_status(mut self, status: StatusCode) -> Self {
        self.get_status = status;
        self
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/todos", get(list_handler::<H>))
            .route("/todos/:id", get(get_handler::<H>))
            .with_state(state)
    }
}

/// Shared state type
type ServerState<H> = Arc<RestServer<H>>;

/// List todos handler
///
/// Query pairs are kept in order so repeated parameters resolve to their
/// first value.
async fn list_handler<H: TodoHandler + 'static>(
    State(server): State<ServerState<H>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ListResponse<Todo>>, RestError> {
    let params: RawParams = pairs.into_iter().collect();

    let result = server.handler.list(&params)?;
    Ok(Json(result))
}

/// Get single todo handler
async fn get_handler<H: TodoHandler + 'static>(
    State(server): State<ServerState<H>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<SingleResponse<Todo>>), RestError> {
    let result = server.handler.get(&id)?;
    Ok((server.get_status, Json(result)))
}
