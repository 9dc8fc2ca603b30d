//! Session-collection use-case service.
//!
//! # Responsibility
//! - Provide the request-level operations over one session's lists.
//! - Keep callers on explicit result types for lookup failures.
//!
//! # Invariants
//! - Validation runs before any mutation; a failed operation leaves the
//!   collection untouched.
//! - The collection travels through an explicit [`SessionContext`], never
//!   ambient state.
//! - Log lines carry ids only, never user-entered titles.

use crate::model::todo::{Todo, TodoId};
use crate::model::todo_list::{IndexError, TodoList, TodoListId};
use crate::sort::{sort_todo_lists, sort_todos};
use crate::store::{SessionStore, StoreResult};
use crate::validate::{
    validate_list_title, validate_rename, validate_todo_title, ValidationError,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Request-level failure for session-collection operations.
#[derive(Debug)]
pub enum ServiceError {
    /// No list in the collection carries the given ID.
    ListNotFound(TodoListId),
    /// The target list has no todo with the given ID.
    TodoNotFound(TodoId),
    /// Form input was rejected; field messages are for re-rendering.
    Validation(ValidationError),
    /// Positional removal with a stale index; a caller bug, not recoverable
    /// by the user.
    Index(IndexError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListNotFound(id) => write!(f, "todo list not found: {id}"),
            Self::TodoNotFound(id) => write!(f, "todo not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Index(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ListNotFound(_) => None,
            Self::TodoNotFound(_) => None,
            Self::Validation(err) => Some(err),
            Self::Index(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<IndexError> for ServiceError {
    fn from(value: IndexError) -> Self {
        Self::Index(value)
    }
}

/// Per-request context carrying one session's deserialized collection.
///
/// A request brackets its work with [`SessionContext::load`] and
/// [`SessionContext::persist`]; in between, every operation goes through this
/// value rather than any global session object.
#[derive(Debug, Default)]
pub struct SessionContext {
    lists: Vec<TodoList>,
}

impl SessionContext {
    /// Builds a context from an already-deserialized collection.
    pub fn new(lists: Vec<TodoList>) -> Self {
        Self { lists }
    }

    /// Loads the session's collection from the store at request start.
    pub fn load<S: SessionStore>(store: &S, session_key: &str) -> StoreResult<Self> {
        Ok(Self::new(store.load(session_key)?))
    }

    /// Persists the collection back to the store at request end.
    pub fn persist<S: SessionStore>(&self, store: &mut S, session_key: &str) -> StoreResult<()> {
        store.save(session_key, &self.lists)
    }

    /// Returns the collection in insertion order.
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    /// Returns the collection in display order.
    pub fn lists_sorted(&self) -> Vec<TodoList> {
        sort_todo_lists(&self.lists)
    }

    /// Returns the list with the given ID, if present.
    pub fn find_list(&self, id: TodoListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// Returns the list with the given ID for mutation, if present.
    pub fn find_list_mut(&mut self, id: TodoListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|list| list.id == id)
    }

    /// Creates a new empty list and appends it to the collection.
    ///
    /// # Contract
    /// - Title is validated against sibling lists, uniqueness included.
    /// - On validation failure nothing is appended.
    pub fn create_list(&mut self, title: &str) -> ServiceResult<TodoListId> {
        validate_list_title(title, &self.lists)?;

        let list = TodoList::new(title);
        let id = list.id;
        self.lists.push(list);
        info!("event=list_created module=service status=ok list_id={id}");
        Ok(id)
    }

    /// Renames an existing list.
    ///
    /// # Contract
    /// - The list keeping its own current title is not a duplicate.
    /// - On validation failure the title is unchanged.
    pub fn rename_list(&mut self, id: TodoListId, new_title: &str) -> ServiceResult<()> {
        let position = self
            .lists
            .iter()
            .position(|list| list.id == id)
            .ok_or(ServiceError::ListNotFound(id))?;

        validate_rename(new_title, id, &self.lists)?;
        self.lists[position].set_title(new_title);
        info!("event=list_renamed module=service status=ok list_id={id}");
        Ok(())
    }

    /// Removes a list from the collection and returns it.
    pub fn delete_list(&mut self, id: TodoListId) -> ServiceResult<TodoList> {
        let position = self
            .lists
            .iter()
            .position(|list| list.id == id)
            .ok_or(ServiceError::ListNotFound(id))?;

        let removed = self.lists.remove(position);
        info!("event=list_deleted module=service status=ok list_id={id}");
        Ok(removed)
    }

    /// Creates a new undone todo at the end of the target list.
    pub fn add_todo(&mut self, list_id: TodoListId, title: &str) -> ServiceResult<TodoId> {
        let position = self
            .lists
            .iter()
            .position(|list| list.id == list_id)
            .ok_or(ServiceError::ListNotFound(list_id))?;

        validate_todo_title(title)?;

        let todo = Todo::new(title);
        let todo_id = todo.id;
        self.lists[position].add(todo);
        info!("event=todo_added module=service status=ok list_id={list_id} todo_id={todo_id}");
        Ok(todo_id)
    }

    /// Flips a todo's done flag and returns the new value.
    pub fn toggle_todo(&mut self, list_id: TodoListId, todo_id: TodoId) -> ServiceResult<bool> {
        let list = self
            .find_list_mut(list_id)
            .ok_or(ServiceError::ListNotFound(list_id))?;
        let todo = list
            .find_todo_mut(todo_id)
            .ok_or(ServiceError::TodoNotFound(todo_id))?;

        if todo.is_done() {
            todo.mark_undone();
        } else {
            todo.mark_done();
        }
        let done = todo.is_done();
        info!(
            "event=todo_toggled module=service status=ok list_id={list_id} todo_id={todo_id} done={done}"
        );
        Ok(done)
    }

    /// Removes a todo from its list and returns it.
    ///
    /// The position is resolved via [`TodoList::find_index_of`] before the
    /// positional removal, so the index error path stays unreachable here.
    pub fn remove_todo(&mut self, list_id: TodoListId, todo_id: TodoId) -> ServiceResult<Todo> {
        let list = self
            .find_list_mut(list_id)
            .ok_or(ServiceError::ListNotFound(list_id))?;
        let index = list
            .find_index_of(todo_id)
            .ok_or(ServiceError::TodoNotFound(todo_id))?;

        let removed = list.remove_at(index)?;
        info!("event=todo_removed module=service status=ok list_id={list_id} todo_id={todo_id}");
        Ok(removed)
    }

    /// Marks every todo in the target list as done.
    pub fn complete_all(&mut self, list_id: TodoListId) -> ServiceResult<()> {
        let list = self
            .find_list_mut(list_id)
            .ok_or(ServiceError::ListNotFound(list_id))?;

        list.mark_all_done();
        info!("event=list_completed module=service status=ok list_id={list_id}");
        Ok(())
    }

    /// Returns one list's todos in display order.
    pub fn todos_sorted(&self, list_id: TodoListId) -> ServiceResult<Vec<Todo>> {
        let list = self
            .find_list(list_id)
            .ok_or(ServiceError::ListNotFound(list_id))?;
        Ok(sort_todos(list))
    }
}
