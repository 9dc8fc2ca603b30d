//! Core domain logic for ListKeeper.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod sort;
pub mod store;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Todo, TodoId};
pub use model::todo_list::{IndexError, TodoList, TodoListId};
pub use service::list_service::{ServiceError, ServiceResult, SessionContext};
pub use sort::{sort_todo_lists, sort_todos};
pub use store::{
    MemorySessionStore, SessionStore, StoreError, StoreResult, TodoListRecord, TodoRecord,
};
pub use validate::{
    validate_list_title, validate_rename, validate_todo_title, FieldError, ValidationError,
    MAX_TITLE_LEN,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
