//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and parses `HttpResponse` values; a [`Transport`] supplied by the
//! host executes the round-trip in between.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data. `path` is the absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Executes requests on behalf of the core.
///
/// Implementations must return non-2xx responses as `Ok` so the client can
/// interpret the status; `Err` is reserved for requests that got no response.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}
