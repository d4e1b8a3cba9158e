//! Request validation for the todo routes.
//!
//! Bodies arrive as raw bytes and are checked field by field so that every
//! malformed input maps to a 400 with a specific message instead of axum's
//! default extractor rejections.

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::store::{TodoChanges, TodoId};

const INVALID_ID: &str = "Invalid todo ID";
const INVALID_BODY: &str = "Invalid request body";
const TITLE_REQUIRED: &str = "Title is required";
const TITLE_NOT_STRING: &str = "Title must be a non-empty string";
const COMPLETED_NOT_BOOL: &str = "Completed must be a boolean";

/// Parses the `{id}` path segment as a base-10 integer.
pub fn parse_todo_id(raw: &str) -> Result<TodoId, ApiError> {
    raw.parse::<TodoId>().map_err(|_| ApiError::invalid(INVALID_ID))
}

/// Resolves the `{id}` segment, folding axum's own path rejections (for
/// example a segment that is not valid UTF-8) into the same 400 response.
pub fn todo_id_from_path(path: Result<Path<String>, PathRejection>) -> Result<TodoId, ApiError> {
    let Path(raw) = path.map_err(|_| ApiError::invalid(INVALID_ID))?;
    parse_todo_id(&raw)
}

/// Decodes a request body that must be a JSON object.
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ApiError::invalid(INVALID_BODY)),
    }
}

/// Validated input for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    /// Trimmed, non-empty.
    pub title: String,
}

impl NewTodo {
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let fields = parse_object(body)?;
        let title = fields
            .get("title")
            .and_then(Value::as_str)
            .and_then(non_blank)
            .ok_or_else(|| ApiError::invalid(TITLE_REQUIRED))?;
        Ok(Self { title })
    }
}

/// Builds the partial change set for an update. Fields that are absent stay
/// `None`; fields that are present (including `null`) must be well typed.
pub fn changes_from_body(body: &[u8]) -> Result<TodoChanges, ApiError> {
    let fields = parse_object(body)?;
    let mut changes = TodoChanges::default();

    if let Some(title) = fields.get("title") {
        let title = title
            .as_str()
            .and_then(non_blank)
            .ok_or_else(|| ApiError::invalid(TITLE_NOT_STRING))?;
        changes.title = Some(title);
    }

    if let Some(completed) = fields.get("completed") {
        let completed = completed
            .as_bool()
            .ok_or_else(|| ApiError::invalid(COMPLETED_NOT_BOOL))?;
        changes.completed = Some(completed);
    }

    Ok(changes)
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
