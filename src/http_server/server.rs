//! # HTTP Server
//!
//! Combines the health check and the REST routes behind CORS and request
//! tracing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::rest_api::{RestServer, TodoHandler};

use super::config::{HttpConfigResult, HttpServerConfig};

/// HTTP server for the todo API
pub struct HttpServer {
    addr: SocketAddr,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `handler`.
    ///
    /// Fails if the config has an unusable address or CORS origin.
    pub fn with_config<H: TodoHandler + 'static>(
        config: &HttpServerConfig,
        handler: Arc<H>,
    ) -> HttpConfigResult<Self> {
        let addr = config.socket_addr()?;
        let router = Self::build_router(config, handler)?;
        Ok(Self { addr, router })
    }

    fn build_router<H: TodoHandler + 'static>(
        config: &HttpServerConfig,
        handler: Arc<H>,
    ) -> HttpConfigResult<Router> {
        let allow_origin = match config.allowed_origins()? {
            Some(origins) => AllowOrigin::list(origins),
            None => AllowOrigin::from(Any),
        };
        let cors = CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any);

        let health = Router::new()
            .route("/health", get(health_handler::<H>))
            .with_state(handler.clone());

        let rest = RestServer::new(handler)
            .with_get_status(config.get_one_status())
            .router();

        Ok(Router::new()
            .merge(health)
            .nest("/api", rest)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(cors),
            ))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server
    pub async fn start(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!(addr = %self.addr, "todobase listening");
        tracing::info!("endpoints: GET /health, GET /api/todos, GET /api/todos/:id");

        axum::serve(listener, self.router).await
    }
}

async fn health_handler<H: TodoHandler + 'static>(State(handler): State<Arc<H>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "todos": handler.size(),
    }))
}
