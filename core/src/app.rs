//! Client-side view state.
//!
//! # Design
//! `TodoApp` owns the last fetched list, the active filter and an error
//! banner. Every action issues exactly one API call through the transport
//! and, if it succeeds, reloads the full list; nothing is patched locally.
//! Failures are collapsed into one fixed message per action and leave the
//! previous list in place.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Todo, TodoDto};

pub const LOAD_FAILED: &str = "Failed to load todos. Make sure the API is running.";
pub const ADD_FAILED: &str = "Failed to add todo.";
pub const UPDATE_FAILED: &str = "Failed to update todo.";
pub const COMPLETE_FAILED: &str = "Failed to complete todo.";
pub const DELETE_FAILED: &str = "Failed to delete todo.";
pub const FETCH_FAILED: &str = "Failed to load todo.";

/// View filter, applied to the already fetched list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.is_completed,
            Filter::Completed => todo.is_completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter {0:?} (expected all, active or completed)")]
pub struct ParseFilterError(String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}

pub struct TodoApp<T> {
    client: TodoClient,
    transport: T,
    todos: Vec<Todo>,
    filter: Filter,
    loading: bool,
    error: Option<&'static str>,
}

impl<T: Transport> TodoApp<T> {
    /// Starts in the loading state with an empty list; call [`load`](Self::load).
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            todos: Vec::new(),
            filter: Filter::All,
            loading: true,
            error: None,
        }
    }

    /// True until the first load has finished, successfully or not.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| self.filter.matches(t)).collect()
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.is_completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_completed).count()
    }

    /// Replace the list with the server's. Clears any previous error first.
    pub fn load(&mut self) -> Result<(), ApiError> {
        self.error = None;
        let req = self.client.build_list_todos();
        let result = self
            .transport
            .execute(req)
            .and_then(|resp| self.client.parse_list_todos(resp));
        self.loading = false;
        match result {
            Ok(todos) => {
                self.todos = todos;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "loading todos failed");
                self.error = Some(LOAD_FAILED);
                Err(err)
            }
        }
    }

    /// Create an open item titled `title`. Blank titles are ignored.
    pub fn add(&mut self, title: &str) -> Result<(), ApiError> {
        if title.trim().is_empty() {
            return Ok(());
        }
        let req = self.client.build_create_todo(&TodoDto::new(title, false));
        self.mutate(ADD_FAILED, req, TodoClient::parse_create_todo)
    }

    /// Flip the completion flag of a listed item, resending its title.
    pub fn toggle(&mut self, id: Uuid) -> Result<(), ApiError> {
        let Some(todo) = self.todos.iter().find(|t| t.id == id) else {
            self.error = Some(UPDATE_FAILED);
            return Err(ApiError::NotFound(format!("todo {id} is not in the list")));
        };
        let input = TodoDto {
            title: todo.title.clone(),
            is_completed: !todo.is_completed,
        };
        self.update(id, &input)
    }

    pub fn update(&mut self, id: Uuid, input: &TodoDto) -> Result<(), ApiError> {
        let req = self.client.build_update_todo(id, input);
        self.mutate(UPDATE_FAILED, req, TodoClient::parse_update_todo)
    }

    pub fn complete_by_title(&mut self, title: &str) -> Result<(), ApiError> {
        let req = Ok(self.client.build_complete_todo(title));
        self.mutate(COMPLETE_FAILED, req, TodoClient::parse_complete_todo)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<(), ApiError> {
        let req = Ok(self.client.build_delete_todo(id));
        self.mutate(DELETE_FAILED, req, TodoClient::parse_delete_todo)
    }

    /// Fetch one item. Only the error banner is touched; the list stays as is.
    pub fn fetch(&mut self, id: Uuid) -> Result<Todo, ApiError> {
        let req = self.client.build_get_todo(id);
        self.query(FETCH_FAILED, req, TodoClient::parse_get_todo)
    }

    /// The server-side completed list. Only the error banner is touched.
    pub fn fetch_completed(&mut self) -> Result<Vec<Todo>, ApiError> {
        let req = self.client.build_list_completed();
        self.query(LOAD_FAILED, req, TodoClient::parse_list_completed)
    }

    fn query<R>(
        &mut self,
        failure: &'static str,
        req: HttpRequest,
        parse: fn(&TodoClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        self.error = None;
        let result = self
            .transport
            .execute(req)
            .and_then(|resp| parse(&self.client, resp));
        if let Err(err) = &result {
            tracing::warn!(error = %err, "{failure}");
            self.error = Some(failure);
        }
        result
    }

    fn mutate<R>(
        &mut self,
        failure: &'static str,
        request: Result<HttpRequest, ApiError>,
        parse: fn(&TodoClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<(), ApiError> {
        let result = request
            .and_then(|req| self.transport.execute(req))
            .and_then(|resp| parse(&self.client, resp));
        match result {
            Ok(_) => self.load(),
            Err(err) => {
                tracing::warn!(error = %err, "{failure}");
                self.error = Some(failure);
                Err(err)
            }
        }
    }
}
