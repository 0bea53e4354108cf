//! # todobase REST API Module
//!
//! Read-only HTTP endpoints over the todo snapshot:
//!
//! - `GET /api/todos` lists todos matching the query string
//! - `GET /api/todos/:id` returns a single todo
//!
//! [`RestServer::router`] serves the paths without the `/api` prefix;
//! the HTTP server nests it there.

pub mod errors;
pub mod handler;
pub mod response;
pub mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use handler::{StoreHandler, TodoHandler};
pub use response::{ListResponse, SingleResponse};
pub use server::RestServer;
