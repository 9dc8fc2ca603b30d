use listkeeper_core::{IndexError, Todo, TodoList};
use uuid::Uuid;

#[test]
fn new_list_is_empty_and_not_done() {
    let list = TodoList::new("Groceries");

    assert!(!list.id.is_nil());
    assert_eq!(list.title, "Groceries");
    assert!(list.is_empty());
    assert_eq!(list.size(), 0);
    assert!(!list.is_done(), "an empty list must not count as done");
}

#[test]
fn is_done_requires_every_todo_done() {
    let mut list = TodoList::new("Chores");
    let mut vacuum = Todo::new("Vacuum");
    vacuum.mark_done();
    list.add(vacuum);
    list.add(Todo::new("Dishes"));

    assert!(!list.is_done());

    list.mark_all_done();
    assert!(list.is_done());
}

#[test]
fn add_preserves_insertion_order() {
    let mut list = TodoList::new("Groceries");
    list.add(Todo::new("Milk"));
    list.add(Todo::new("Eggs"));
    list.add(Todo::new("Flour"));

    let titles: Vec<&str> = list.todos.iter().map(|todo| todo.title.as_str()).collect();
    assert_eq!(titles, ["Milk", "Eggs", "Flour"]);
}

#[test]
fn find_index_of_resolves_by_id() {
    let mut list = TodoList::new("Groceries");
    let milk = Todo::new("Milk");
    let eggs = Todo::new("Eggs");
    let eggs_id = eggs.id;
    list.add(milk);
    list.add(eggs);

    assert_eq!(list.find_index_of(eggs_id), Some(1));
    assert_eq!(list.find_index_of(Uuid::new_v4()), None);
}

#[test]
fn remove_at_returns_the_removed_todo() {
    let mut list = TodoList::new("Groceries");
    list.add(Todo::new("Milk"));
    list.add(Todo::new("Eggs"));

    let removed = list.remove_at(0).unwrap();
    assert_eq!(removed.title, "Milk");
    assert_eq!(list.size(), 1);
    assert_eq!(list.todos[0].title, "Eggs");
}

#[test]
fn remove_at_with_index_equal_to_length_fails() {
    let mut list = TodoList::new("Groceries");
    list.add(Todo::new("Milk"));

    let err = list.remove_at(1).unwrap_err();
    assert_eq!(err, IndexError { index: 1, len: 1 });
    assert_eq!(list.size(), 1, "failed removal must not mutate the list");
}

#[test]
fn mark_all_done_sets_every_flag() {
    let mut list = TodoList::new("Chores");
    list.add(Todo::new("A"));
    let mut b = Todo::new("B");
    b.mark_done();
    list.add(b);

    list.mark_all_done();

    assert!(list.todos.iter().all(|todo| todo.is_done()));
    assert_eq!(list.count_done(), 2);
    assert_eq!(list.count_undone(), 0);
}

#[test]
fn mark_all_done_is_a_no_op_on_empty_list() {
    let mut list = TodoList::new("Empty");
    list.mark_all_done();

    assert!(list.is_empty());
    assert!(!list.is_done());
}

#[test]
fn set_title_replaces_the_title() {
    let mut list = TodoList::new("Groceries");
    list.set_title("Weekend groceries");

    assert_eq!(list.title, "Weekend groceries");
}

#[test]
fn counts_track_done_and_undone_todos() {
    let mut list = TodoList::new("Mixed");
    list.add(Todo::new("A"));
    let mut b = Todo::new("B");
    b.mark_done();
    list.add(b);
    list.add(Todo::new("C"));

    assert_eq!(list.size(), 3);
    assert_eq!(list.count_done(), 1);
    assert_eq!(list.count_undone(), 2);
}
