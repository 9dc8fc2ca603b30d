//! Todo item domain model.
//!
//! # Responsibility
//! - Define the single task record owned by a `TodoList`.
//! - Provide idempotent done/undone lifecycle transitions.
//!
//! # Invariants
//! - `id` is stable and never reused for another todo.
//! - `done` is the only mutable lifecycle state; both transitions are no-ops
//!   when the flag already has the target value.

use uuid::Uuid;

/// Stable identifier for a todo within its owning list.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// A single task with a title and a done/undone state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Stable ID used for lookup and removal inside the owning list.
    pub id: TodoId,
    /// Display title. Non-emptiness and length are enforced by the
    /// validation layer before construction, not by the entity.
    pub title: String,
    /// Completion flag.
    pub done: bool,
}

impl Todo {
    /// Creates a todo with a generated stable ID and `done = false`.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a todo with a caller-provided stable ID.
    ///
    /// Used where identity already exists externally, e.g. when the session
    /// store reconstructs entities from persisted records.
    pub fn with_id(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Marks this todo as done. Redundant calls are no-ops.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks this todo as not done. Redundant calls are no-ops.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Returns the current completion flag.
    pub fn is_done(&self) -> bool {
        self.done
    }
}
