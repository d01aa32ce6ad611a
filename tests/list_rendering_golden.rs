//! Golden tests for list rendering
//!
//! Display layers depend on the rendered text byte for byte, so these
//! tests pin the exact output of the item and list `Display` impls.

use std::rc::Rc;

use todo_list::{Item, ItemList};
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber honoring `RUST_LOG`
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds the "Today's Todos" list, returning the caller's handles too
fn todays_todos() -> (ItemList, Vec<Rc<Item>>) {
    let handles: Vec<Rc<Item>> = ["Buy milk", "Clean room", "Go to the gym"]
        .into_iter()
        .map(|title| Rc::new(Item::new(title)))
        .collect();

    let mut list = ItemList::new("Today's Todos");
    for handle in &handles {
        list.add(Rc::clone(handle));
    }
    (list, handles)
}

// =============================================================================
// List Rendering
// =============================================================================

#[test]
fn test_fresh_list_renders_all_undone() {
    init_tracing();
    let (list, _) = todays_todos();

    let expected = "\
---- Today's Todos ----
[ ] Buy milk
[ ] Clean room
[ ] Go to the gym";

    assert_eq!(list.to_string(), expected);
}

#[test]
fn test_marking_caller_handle_changes_rendering() {
    init_tracing();
    let (list, handles) = todays_todos();
    handles[0].mark_done();

    let expected = "\
---- Today's Todos ----
[X] Buy milk
[ ] Clean room
[ ] Go to the gym";

    assert_eq!(list.to_string(), expected);
}

#[test]
fn test_mark_all_done_renders_all_done() {
    init_tracing();
    let (list, _) = todays_todos();
    list.mark_all_done();

    let expected = "\
---- Today's Todos ----
[X] Buy milk
[X] Clean room
[X] Go to the gym";

    assert_eq!(list.to_string(), expected);
}

#[test]
fn test_rendering_has_no_trailing_newline() {
    init_tracing();
    let (list, _) = todays_todos();
    assert!(!list.to_string().ends_with('\n'));
    assert_eq!(list.to_string().lines().count(), 4);
}

#[test]
fn test_filtered_list_renders_with_same_header() {
    init_tracing();
    let (list, _) = todays_todos();
    list.mark_done_at(1).unwrap();

    let done = list.filter(|todo| todo.is_done());
    assert_eq!(done.to_string(), "---- Today's Todos ----\n[X] Clean room");

    let none = ItemList::new("Today's Todos").filter(|todo| todo.is_done());
    assert_eq!(none.to_string(), "---- Today's Todos ----");
}

#[test]
fn test_removals_shift_rendered_lines() {
    init_tracing();
    let (mut list, _) = todays_todos();
    list.remove_at(1).unwrap();

    assert_eq!(
        list.to_string(),
        "---- Today's Todos ----\n[ ] Buy milk\n[ ] Go to the gym"
    );

    list.shift();
    list.pop();
    assert_eq!(list.to_string(), "---- Today's Todos ----");
}

// =============================================================================
// JSON Snapshot
// =============================================================================

#[test]
fn test_json_snapshot_shape() {
    init_tracing();
    let (list, handles) = todays_todos();
    handles[2].mark_done();

    let json: serde_json::Value = serde_json::from_str(&list.to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "title": "Today's Todos",
            "items": [
                {"title": "Buy milk", "done": false},
                {"title": "Clean room", "done": false},
                {"title": "Go to the gym", "done": true}
            ]
        })
    );
}

#[test]
fn test_json_snapshot_renders_identically_after_parse() {
    init_tracing();
    let (list, handles) = todays_todos();
    handles[1].mark_done();

    let parsed = ItemList::from_json(&list.to_json().unwrap()).unwrap();
    assert_eq!(
        parsed.to_string(),
        "---- Today's Todos ----\n[ ] Buy milk\n[X] Clean room\n[ ] Go to the gym"
    );
}
