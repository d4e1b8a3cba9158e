//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, DeleteConfirmation, Todo, UpdateTodo};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    /// `base_url` is the API root, e.g. `http://localhost:3002/api`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, format!("{}/todos", self.base_url))
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, self.todo_path(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ClientError> {
        let path = format!("{}/todos", self.base_url);
        self.json_request(HttpMethod::Post, path, input)
    }

    pub fn build_update_todo(
        &self,
        id: i64,
        input: &UpdateTodo,
    ) -> Result<HttpRequest, ClientError> {
        self.json_request(HttpMethod::Put, self.todo_path(id), input)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, self.todo_path(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ClientError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        check_status(&response, 201)?;
        decode(&response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_delete_todo(
        &self,
        response: HttpResponse,
    ) -> Result<DeleteConfirmation, ClientError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    fn todo_path(&self, id: i64) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<T: serde::Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        input: &T,
    ) -> Result<HttpRequest, ClientError> {
        let body =
            serde_json::to_string(input).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Map non-success status codes to the appropriate `ClientError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ClientError> {
    if response.status == expected {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .map(|body| body.error)
        .unwrap_or_else(|_| response.body.clone());
    Err(match response.status {
        404 => ClientError::NotFound,
        400 => ClientError::BadRequest(message),
        status => ClientError::Http { status, message },
    })
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ClientError> {
    serde_json::from_str(&response.body).map_err(|e| ClientError::Deserialization(e.to_string()))
}
