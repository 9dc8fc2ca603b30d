//! Session-backed persistence for todo-list collections.
//!
//! # Responsibility
//! - Define the load-at-request-start / save-at-request-end contract.
//! - Keep serialization details inside the store boundary.
//!
//! # Invariants
//! - A session's collection is replaced wholesale on save (last-write-wins).
//! - Loading an unknown session key yields an empty collection, not an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod session_store;

pub use session_store::{MemorySessionStore, SessionStore, TodoListRecord, TodoRecord};

pub type StoreResult<T> = Result<T, StoreError>;

/// Serialization failure while persisting or reconstructing a session.
#[derive(Debug)]
pub enum StoreError {
    Serialize(serde_json::Error),
    Deserialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize session records: {err}"),
            Self::Deserialize(err) => {
                write!(f, "failed to deserialize session records: {err}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Deserialize(err) => Some(err),
        }
    }
}
