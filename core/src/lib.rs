//! Synchronous API client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and keeps the client's view
//! state on top of that.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each endpoint is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `TodoApp` drives a host-supplied [`Transport`] and reloads the full list
//!   after every successful mutation.
//! - DTOs are defined independently from the `todo-api` crate; the end-to-end
//!   test catches schema drift.

pub mod app;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use app::{Filter, ParseFilterError, TodoApp};
pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{Todo, TodoDto};
