//! Form validation for list and todo titles.
//!
//! # Responsibility
//! - Provide one explicit validation function per form, callable and
//!   testable independently of any HTTP layer.
//! - Report failures as field-level messages; validation is never fatal.
//!
//! # Invariants
//! - List titles must be unique among sibling lists; the check is applied on
//!   every create and rename, never skipped.
//! - Validation reads its inputs and mutates nothing.

use crate::model::todo_list::{TodoList, TodoListId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum accepted title length for lists and todos, in characters.
pub const MAX_TITLE_LEN: usize = 100;

const TITLE_FIELD: &str = "title";

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the message belongs to.
    pub field: &'static str,
    /// User-facing message for re-rendering the form.
    pub message: String,
}

/// Structured validation failure carrying every failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Returns the messages in declaration order, for display.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|err| err.message.as_str()).collect()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: {}", self.messages().join("; "))
    }
}

impl Error for ValidationError {}

/// Validates the title for a new todo list against its future siblings.
///
/// Callers pass already-trimmed input. Checks: title present, at most
/// [`MAX_TITLE_LEN`] characters, not already used by a sibling list.
///
/// # Errors
/// - [`ValidationError`] carrying one [`FieldError`] per failed rule.
pub fn validate_list_title(title: &str, siblings: &[TodoList]) -> Result<(), ValidationError> {
    let mut errors = check_title(title, "The list title is required.", "List title");

    if !title.trim().is_empty() && siblings.iter().any(|list| list.title == title) {
        errors.push(FieldError {
            field: TITLE_FIELD,
            message: "List title must be unique.".to_string(),
        });
    }

    into_result(errors)
}

/// Validates a rename of an existing todo list.
///
/// Same rules as [`validate_list_title`], except the list keeping its own
/// current title is not a duplicate.
///
/// # Errors
/// - [`ValidationError`] carrying one [`FieldError`] per failed rule.
pub fn validate_rename(
    title: &str,
    list_id: TodoListId,
    siblings: &[TodoList],
) -> Result<(), ValidationError> {
    let mut errors = check_title(title, "The list title is required.", "List title");

    let duplicate = siblings
        .iter()
        .any(|list| list.id != list_id && list.title == title);
    if !title.trim().is_empty() && duplicate {
        errors.push(FieldError {
            field: TITLE_FIELD,
            message: "List title must be unique.".to_string(),
        });
    }

    into_result(errors)
}

/// Validates the title for a new todo.
///
/// Todo titles are not checked for uniqueness; two todos in one list may
/// carry the same title.
///
/// # Errors
/// - [`ValidationError`] carrying one [`FieldError`] per failed rule.
pub fn validate_todo_title(title: &str) -> Result<(), ValidationError> {
    into_result(check_title(
        title,
        "The todo title is required.",
        "Todo title",
    ))
}

fn check_title(title: &str, required_message: &str, label: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push(FieldError {
            field: TITLE_FIELD,
            message: required_message.to_string(),
        });
    } else if title.chars().count() > MAX_TITLE_LEN {
        errors.push(FieldError {
            field: TITLE_FIELD,
            message: format!("{label} must be between 1 and {MAX_TITLE_LEN} characters."),
        });
    }

    errors
}

fn into_result(errors: Vec<FieldError>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { errors })
    }
}
