//! HTTP API for todo items backed by SQLite.
//!
//! # Overview
//! - [`store::TodoStore`] owns the single `todos` table.
//! - [`handlers`] validate requests, call the store and map results to
//!   status codes and JSON bodies.
//! - [`app`] wires the five `/api/todos` routes; the binary adds CORS and
//!   serves it.
//!
//! The storage handle is passed in through [`AppState`], so tests build
//! their own in-memory state per case.

pub mod config;
pub mod error;
pub mod handlers;
pub mod request;
pub mod state;
pub mod store;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;
pub use store::{StoreError, Todo, TodoChanges, TodoId, TodoStore, UpdateOutcome};

/// Builds the router for the todo API with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy admitting a single browser origin with credentials.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, header::InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(origin.parse::<HeaderValue>()?)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Serves `router` on `listener` until the server stops.
pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}
