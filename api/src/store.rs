//! Storage behind the HTTP handlers.
//!
//! Handlers only see `dyn TodoStore`, so a durable backend can replace
//! `InMemoryStore` without touching routing. Every operation touches at most
//! one record and takes the lock exactly once.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use uuid::Uuid;

use crate::types::{Todo, TodoDto};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("todo item not found")]
    NotFound,
}

/// The todo collection.
pub trait TodoStore: Send + Sync {
    /// Every item, in insertion order.
    fn list(&self) -> Vec<Todo>;

    fn list_completed(&self) -> Vec<Todo> {
        self.list().into_iter().filter(|t| t.is_completed).collect()
    }

    fn get(&self, id: Uuid) -> Result<Todo, StoreError>;

    /// Store a new item under a fresh id and return it.
    fn create(&self, input: TodoDto) -> Todo;

    /// Replace both `title` and `is_completed` of an existing item.
    fn update(&self, id: Uuid, input: TodoDto) -> Result<Todo, StoreError>;

    /// Mark the first item (in insertion order) titled exactly `title` as
    /// completed. Later items sharing the title are left alone.
    fn complete_by_title(&self, title: &str) -> Result<Todo, StoreError>;

    fn delete(&self, id: Uuid) -> Result<Todo, StoreError>;
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    todos: RwLock<IndexMap<Uuid, Todo>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-written record, so a
    // poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, IndexMap<Uuid, Todo>> {
        self.todos.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<Uuid, Todo>> {
        self.todos.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TodoStore for InMemoryStore {
    fn list(&self) -> Vec<Todo> {
        self.read().values().cloned().collect()
    }

    fn list_completed(&self) -> Vec<Todo> {
        self.read()
            .values()
            .filter(|t| t.is_completed)
            .cloned()
            .collect()
    }

    fn get(&self, id: Uuid) -> Result<Todo, StoreError> {
        self.read().get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn create(&self, input: TodoDto) -> Todo {
        let mut todos = self.write();
        let mut todo = Todo::from_dto(input);
        while todos.contains_key(&todo.id) {
            todo.id = Uuid::new_v4();
        }
        todos.insert(todo.id, todo.clone());
        todo
    }

    fn update(&self, id: Uuid, input: TodoDto) -> Result<Todo, StoreError> {
        let mut todos = self.write();
        let todo = todos.get_mut(&id).ok_or(StoreError::NotFound)?;
        todo.title = input.title;
        todo.is_completed = input.is_completed;
        Ok(todo.clone())
    }

    fn complete_by_title(&self, title: &str) -> Result<Todo, StoreError> {
        let mut todos = self.write();
        let todo = todos
            .values_mut()
            .find(|t| t.has_title(title))
            .ok_or(StoreError::NotFound)?;
        todo.is_completed = true;
        Ok(todo.clone())
    }

    fn delete(&self, id: Uuid) -> Result<Todo, StoreError> {
        // shift_remove keeps the remaining items in insertion order.
        self.write().shift_remove(&id).ok_or(StoreError::NotFound)
    }
}
