//! Typed client for the todo HTTP API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, which keeps the client deterministic and testable.
//!
//! # Design
//! - `TodoClient` is stateless: it holds only `base_url` (including `/api`).
//! - Each endpoint is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), so the I/O boundary is explicit.
//! - Any unexpected status is an error. Nothing is retried.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, DeleteConfirmation, Todo, UpdateTodo};
