use listkeeper_core::{
    validate_list_title, validate_rename, validate_todo_title, TodoList, MAX_TITLE_LEN,
};

#[test]
fn empty_list_title_is_required() {
    let err = validate_list_title("", &[]).unwrap_err();

    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors[0].field, "title");
    assert_eq!(err.errors[0].message, "The list title is required.");
}

#[test]
fn whitespace_only_list_title_is_required() {
    let err = validate_list_title("   ", &[]).unwrap_err();
    assert_eq!(err.messages(), ["The list title is required."]);
}

#[test]
fn list_title_at_max_length_passes() {
    let title = "a".repeat(MAX_TITLE_LEN);
    assert!(validate_list_title(&title, &[]).is_ok());
}

#[test]
fn list_title_over_max_length_fails() {
    let title = "a".repeat(MAX_TITLE_LEN + 1);
    let err = validate_list_title(&title, &[]).unwrap_err();

    assert_eq!(
        err.messages(),
        ["List title must be between 1 and 100 characters."]
    );
}

#[test]
fn duplicate_sibling_title_fails() {
    let siblings = vec![TodoList::new("Groceries")];
    let err = validate_list_title("Groceries", &siblings).unwrap_err();

    assert_eq!(err.messages(), ["List title must be unique."]);
}

#[test]
fn duplicate_check_is_case_sensitive() {
    let siblings = vec![TodoList::new("Groceries")];
    assert!(validate_list_title("groceries", &siblings).is_ok());
}

#[test]
fn overlong_duplicate_reports_both_errors() {
    let long_title = "a".repeat(MAX_TITLE_LEN + 1);
    let siblings = vec![TodoList::new(long_title.as_str())];
    let err = validate_list_title(&long_title, &siblings).unwrap_err();

    assert_eq!(
        err.messages(),
        [
            "List title must be between 1 and 100 characters.",
            "List title must be unique."
        ]
    );
}

#[test]
fn rename_keeping_own_title_is_not_a_duplicate() {
    let list = TodoList::new("Groceries");
    let id = list.id;
    let siblings = vec![list, TodoList::new("Chores")];

    assert!(validate_rename("Groceries", id, &siblings).is_ok());
}

#[test]
fn rename_to_a_sibling_title_fails() {
    let list = TodoList::new("Groceries");
    let id = list.id;
    let siblings = vec![list, TodoList::new("Chores")];

    let err = validate_rename("Chores", id, &siblings).unwrap_err();
    assert_eq!(err.messages(), ["List title must be unique."]);
}

#[test]
fn empty_todo_title_is_required() {
    let err = validate_todo_title("").unwrap_err();
    assert_eq!(err.messages(), ["The todo title is required."]);
}

#[test]
fn overlong_todo_title_fails() {
    let title = "b".repeat(MAX_TITLE_LEN + 1);
    let err = validate_todo_title(&title).unwrap_err();
    assert_eq!(
        err.messages(),
        ["Todo title must be between 1 and 100 characters."]
    );
}

#[test]
fn todo_title_at_max_length_passes() {
    let title = "b".repeat(MAX_TITLE_LEN);
    assert!(validate_todo_title(&title).is_ok());
}
