//! Route handlers for `/api/todos`.
//!
//! Each handler validates its input before touching the store, performs one
//! store operation under the state lock, and maps the outcome to a status
//! code. Store failures are logged and replaced by a generic message.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::error::ApiError;
use crate::request::{changes_from_body, todo_id_from_path, NewTodo};
use crate::state::AppState;
use crate::store::{StoreError, Todo, UpdateOutcome};

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub message: &'static str,
}

/// Converts a store failure into a 500 carrying `message`.
fn internal(message: &'static str) -> impl Fn(StoreError) -> ApiError {
    move |err| match err {
        StoreError::EmptyTitle => ApiError::InvalidInput(err.to_string()),
        StoreError::Sqlite(_) => {
            error!(error = %err, "{message}");
            ApiError::Internal(message.to_string())
        }
    }
}

/// `GET /api/todos`
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let store = state.store.lock().await;
    let todos = store.list_all().map_err(internal("Failed to fetch todos"))?;
    Ok(Json(todos))
}

/// `GET /api/todos/{id}`
pub async fn get_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = todo_id_from_path(path)?;
    let store = state.store.lock().await;
    store
        .get_by_id(id)
        .map_err(internal("Failed to fetch todo"))?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `POST /api/todos`
pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input = NewTodo::from_body(&body)?;
    let on_error = internal("Failed to create todo");

    let store = state.store.lock().await;
    let id = store.create(&input.title).map_err(&on_error)?;
    let todo = store
        .get_by_id(id)
        .map_err(&on_error)?
        .ok_or(ApiError::NotFound)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PUT /api/todos/{id}`
///
/// A body with neither `title` nor `completed` is treated like a missing
/// todo and answers 404.
pub async fn update_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let id = todo_id_from_path(path)?;
    let changes = changes_from_body(&body)?;
    let on_error = internal("Failed to update todo");

    let store = state.store.lock().await;
    match store.update(id, &changes).map_err(&on_error)? {
        UpdateOutcome::Updated => {}
        UpdateOutcome::NotFound | UpdateOutcome::NoChanges => return Err(ApiError::NotFound),
    }
    store
        .get_by_id(id)
        .map_err(&on_error)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `DELETE /api/todos/{id}`
pub async fn delete_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Deleted>, ApiError> {
    let id = todo_id_from_path(path)?;
    let store = state.store.lock().await;
    if !store.delete(id).map_err(internal("Failed to delete todo"))? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(Deleted {
        message: "Todo deleted successfully",
    }))
}
