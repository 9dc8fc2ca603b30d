//! Todo list domain model.
//!
//! # Responsibility
//! - Own an ordered sequence of todos under one list title.
//! - Provide add/lookup/removal and bulk completion operations.
//!
//! # Invariants
//! - `id` is stable and never reused for another list.
//! - Todos keep insertion order; display ordering is a separate concern
//!   handled by the sort module.
//! - `is_done` is true only for a non-empty list where every todo is done.

use crate::model::todo::{Todo, TodoId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a list within the session's collection.
pub type TodoListId = Uuid;

/// Positional removal was called with an index past the end of the sequence.
///
/// Callers that resolve positions via [`TodoList::find_index_of`] first never
/// hit this; it indicates a caller bug and is propagated as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    /// Requested position.
    pub index: usize,
    /// Sequence length at the time of the call.
    pub len: usize,
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "index {} out of range for todo sequence of length {}",
            self.index, self.len
        )
    }
}

impl Error for IndexError {}

/// A named, ordered collection of todos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    /// Stable ID used for lookup within the session collection.
    pub id: TodoListId,
    /// Display title. Uniqueness among sibling lists is enforced by the
    /// validation layer, not by the entity.
    pub title: String,
    /// Owned todos in insertion order.
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list with a generated stable ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates an empty list with a caller-provided stable ID.
    pub fn with_id(id: TodoListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Appends a todo to the end of the sequence.
    ///
    /// No duplicate-ID check is performed; callers are responsible for only
    /// adding freshly created todos.
    pub fn add(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Returns the position of the todo with the given ID, if present.
    pub fn find_index_of(&self, todo_id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == todo_id)
    }

    /// Returns the todo with the given ID, if present.
    pub fn find_todo(&self, todo_id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == todo_id)
    }

    /// Returns the todo with the given ID for mutation, if present.
    pub fn find_todo_mut(&mut self, todo_id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == todo_id)
    }

    /// Removes and returns the todo at `index`.
    ///
    /// # Errors
    /// - [`IndexError`] when `index` is past the end of the sequence. State
    ///   is untouched in that case.
    pub fn remove_at(&mut self, index: usize) -> Result<Todo, IndexError> {
        if index >= self.todos.len() {
            return Err(IndexError {
                index,
                len: self.todos.len(),
            });
        }
        Ok(self.todos.remove(index))
    }

    /// Sets `done` on every contained todo. No-op on an empty list.
    pub fn mark_all_done(&mut self) {
        for todo in &mut self.todos {
            todo.mark_done();
        }
    }

    /// Replaces the list title.
    ///
    /// Does not enforce uniqueness among sibling lists; callers validate
    /// against siblings before calling.
    pub fn set_title(&mut self, new_title: impl Into<String>) {
        self.title = new_title.into();
    }

    /// Returns whether the list counts as completed.
    ///
    /// An empty list is not done; a list is done only when every contained
    /// todo is done.
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(Todo::is_done)
    }

    /// Returns the number of contained todos.
    pub fn size(&self) -> usize {
        self.todos.len()
    }

    /// Returns whether the list contains no todos.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns how many contained todos are done.
    pub fn count_done(&self) -> usize {
        self.todos.iter().filter(|todo| todo.is_done()).count()
    }

    /// Returns how many contained todos are not done.
    pub fn count_undone(&self) -> usize {
        self.size() - self.count_done()
    }
}
