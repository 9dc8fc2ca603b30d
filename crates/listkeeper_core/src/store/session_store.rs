//! Session store contract, record shapes and in-memory implementation.
//!
//! # Responsibility
//! - Round-trip one collection of lists per session key through a plain
//!   serializable record shape.
//! - Reconstruct entities on every load so requests never share live state.
//!
//! # Invariants
//! - Records carry exactly the persisted fields: id, title, done, todos.
//! - The external collaborator handles any cross-request racing; a session's
//!   collection is only mutated by its single in-flight request.

use crate::model::todo::{Todo, TodoId};
use crate::model::todo_list::{TodoList, TodoListId};
use crate::store::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Persisted shape of one todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

/// Persisted shape of one todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListRecord {
    pub id: TodoListId,
    pub title: String,
    pub todos: Vec<TodoRecord>,
}

impl From<&Todo> for TodoRecord {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            done: todo.done,
        }
    }
}

impl From<TodoRecord> for Todo {
    fn from(record: TodoRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            done: record.done,
        }
    }
}

impl From<&TodoList> for TodoListRecord {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id,
            title: list.title.clone(),
            todos: list.todos.iter().map(TodoRecord::from).collect(),
        }
    }
}

impl From<TodoListRecord> for TodoList {
    fn from(record: TodoListRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            todos: record.todos.into_iter().map(Todo::from).collect(),
        }
    }
}

/// Store contract: one collection per session key.
///
/// The collection is recreated from records at the start of each request and
/// replaced wholesale at the end.
pub trait SessionStore {
    /// Loads and reconstructs the session's collection.
    ///
    /// An unknown session key yields an empty collection; a fresh session
    /// legitimately has no lists yet.
    ///
    /// # Errors
    /// - [`StoreError::Deserialize`] when persisted records are unreadable.
    fn load(&self, session_key: &str) -> StoreResult<Vec<TodoList>>;

    /// Serializes and replaces the session's collection.
    ///
    /// # Errors
    /// - [`StoreError::Serialize`] when the records cannot be encoded.
    fn save(&mut self, session_key: &str, lists: &[TodoList]) -> StoreResult<()>;
}

/// In-memory store keeping serialized JSON per session key.
///
/// Holding serialized text rather than live entities makes every `load` a
/// genuine deserialization, so two requests for the same session never alias
/// the same entities.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of sessions with a stored collection.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, session_key: &str) -> StoreResult<Vec<TodoList>> {
        let Some(raw) = self.sessions.get(session_key) else {
            return Ok(Vec::new());
        };

        let records: Vec<TodoListRecord> =
            serde_json::from_str(raw).map_err(StoreError::Deserialize)?;
        Ok(records.into_iter().map(TodoList::from).collect())
    }

    fn save(&mut self, session_key: &str, lists: &[TodoList]) -> StoreResult<()> {
        let records: Vec<TodoListRecord> = lists.iter().map(TodoListRecord::from).collect();
        let raw = serde_json::to_string(&records).map_err(StoreError::Serialize)?;
        self.sessions.insert(session_key.to_string(), raw);
        Ok(())
    }
}
