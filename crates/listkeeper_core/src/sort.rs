//! Display ordering for lists and todos.
//!
//! # Responsibility
//! - Produce the view order used by callers: not-done group first, done group
//!   second, each group sorted by case-insensitive title ascending.
//!
//! # Invariants
//! - Functions are pure; inputs are never mutated.
//! - Equal titles keep their relative input order. `Vec::sort_by` is
//!   documented stable, which this module relies on deliberately rather than
//!   inheriting whatever the underlying sort happens to do.

use crate::model::todo::Todo;
use crate::model::todo_list::TodoList;
use std::cmp::Ordering;

/// Case-insensitive lexicographic title comparison.
fn compare_by_title(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Returns the lists in display order.
///
/// Lists where [`TodoList::is_done`] is false come first, completed lists
/// after them; both groups are independently sorted by case-insensitive
/// title. The input slice is left untouched.
pub fn sort_todo_lists(lists: &[TodoList]) -> Vec<TodoList> {
    let (mut undone, mut done): (Vec<TodoList>, Vec<TodoList>) =
        lists.iter().cloned().partition(|list| !list.is_done());

    undone.sort_by(|a, b| compare_by_title(&a.title, &b.title));
    done.sort_by(|a, b| compare_by_title(&a.title, &b.title));

    undone.extend(done);
    undone
}

/// Returns one list's todos in display order.
///
/// Same two-group rule as [`sort_todo_lists`], applied to each todo's done
/// flag. The list is left untouched.
pub fn sort_todos(list: &TodoList) -> Vec<Todo> {
    let (mut undone, mut done): (Vec<Todo>, Vec<Todo>) =
        list.todos.iter().cloned().partition(|todo| !todo.is_done());

    undone.sort_by(|a, b| compare_by_title(&a.title, &b.title));
    done.sort_by(|a, b| compare_by_title(&a.title, &b.title));

    undone.extend(done);
    undone
}

#[cfg(test)]
mod tests {
    use super::compare_by_title;
    use std::cmp::Ordering;

    #[test]
    fn compare_by_title_ignores_case() {
        assert_eq!(compare_by_title("apple", "BANANA"), Ordering::Less);
        assert_eq!(compare_by_title("Cherry", "banana"), Ordering::Greater);
        assert_eq!(compare_by_title("Milk", "milk"), Ordering::Equal);
    }
}
