//! Domain model for session-scoped todo management.
//!
//! # Responsibility
//! - Define the entities the rest of core operates on: `Todo` and `TodoList`.
//! - Keep lifecycle rules (done/undone, positional removal) next to the data.
//!
//! # Invariants
//! - Every entity is identified by a stable uuid, immutable after creation.
//! - A `TodoList` exclusively owns its todos; entities are never shared
//!   between lists.

pub mod todo;
pub mod todo_list;
