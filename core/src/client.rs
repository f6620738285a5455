//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Todo, TodoDto};

/// Everything except RFC 3986 unreserved characters is escaped, so a title
/// always stays a single path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request(
        &self,
        method: HttpMethod,
        path: &str,
        input: &TodoDto,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let mut req = self.request(method, path);
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        req.body = Some(body);
        Ok(req)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/todoitems")
    }

    pub fn build_list_completed(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/todoitems/complete")
    }

    pub fn build_get_todo(&self, id: Uuid) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/todoitems/{id}"))
    }

    pub fn build_create_todo(&self, input: &TodoDto) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/todoitems", input)
    }

    pub fn build_update_todo(&self, id: Uuid, input: &TodoDto) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, &format!("/todoitems/{id}"), input)
    }

    /// PUT with no body; the title travels percent-encoded in the path.
    pub fn build_complete_todo(&self, title: &str) -> HttpRequest {
        let encoded = utf8_percent_encode(title, PATH_SEGMENT);
        self.request(HttpMethod::Put, &format!("/todoitems/complete/{encoded}"))
    }

    pub fn build_delete_todo(&self, id: Uuid) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/todoitems/{id}"))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        parse_json(&response)
    }

    pub fn parse_list_completed(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        parse_json(&response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        parse_json(&response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        parse_json(&response)
    }

    /// Returns the server's confirmation text.
    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response, 200)?;
        Ok(response.body)
    }

    pub fn parse_complete_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response, 200)?;
        Ok(response.body)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response, 200)?;
        Ok(response.body)
    }
}

fn parse_json<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound(response.body.clone()));
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
