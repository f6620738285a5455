//! Wire types for the todo API.
//!
//! Field names follow the JSON contract (`id`, `title`, `isCompleted`), so the
//! structs rename to camelCase rather than exposing Rust's snake_case.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: Option<String>,
    pub is_completed: bool,
}

impl Todo {
    /// Build a todo with a freshly minted id from a request payload.
    pub fn from_dto(input: TodoDto) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            is_completed: input.is_completed,
        }
    }

    /// Whether this item's title is exactly `title`.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.as_deref() == Some(title)
    }
}

/// Payload for both create and update. Update replaces both fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}
