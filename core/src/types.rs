//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined independently
//! of the `todo-api` crate, so the client never links axum. The end-to-end
//! test catches schema drift between the two.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: Option<String>,
    pub is_completed: bool,
}

impl Todo {
    /// The title, or an empty string for items stored without one.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// Request payload for creating a todo or replacing an existing one. Both
/// fields are always sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
    pub title: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

impl TodoDto {
    pub fn new(title: impl Into<String>, is_completed: bool) -> Self {
        Self {
            title: Some(title.into()),
            is_completed,
        }
    }
}
