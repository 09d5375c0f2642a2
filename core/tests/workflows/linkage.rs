// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Todo to event linkage workflow tests.
//!
//! These tests validate that todo references are resolved against the live
//! event list and survive the deletion of the event they point to.

use planner_core::{EventId, TodoDraft};

use crate::common::{assert_todo_matches, planner_with_standup};

#[test]
fn linkage_standup_scenario() {
    // Arrange
    let (mut planner, standup) = planner_with_standup();
    let event = planner.resolve_event(standup).unwrap();
    assert_eq!(event.title, "Standup");
    assert_eq!(event.description, None);

    // Act - create a todo assigned to the event
    let todo = planner.add_todo("Prepare slides", Some(standup)).unwrap();

    // Assert
    let todo_ref = planner.todos().get(todo).unwrap();
    assert_eq!(
        planner.assigned_event(todo_ref).map(|e| e.title.as_str()),
        Some("Standup")
    );

    // Act - delete the event
    planner.delete_event(standup).unwrap();

    // Assert - todo remains, reference no longer resolves
    let todo_ref = planner.todos().get(todo).unwrap();
    assert_todo_matches(todo_ref, "Prepare slides", false);
    assert_eq!(todo_ref.event_id, Some(standup));
    assert_eq!(planner.assigned_event(todo_ref), None);
    assert_eq!(planner.resolve_event(standup), None);
}

#[test]
fn linkage_completion_is_independent_of_event() {
    // Arrange
    let (mut planner, standup) = planner_with_standup();
    let todo = planner.add_todo("Prepare slides", Some(standup)).unwrap();
    planner.toggle_todo(todo);

    // Act
    planner.delete_event(standup);

    // Assert
    assert_todo_matches(planner.todos().get(todo).unwrap(), "Prepare slides", true);
}

#[test]
fn linkage_selection_is_captured_at_creation_only() {
    // Arrange
    let (mut planner, standup) = planner_with_standup();
    planner.todo_draft = TodoDraft::new("Book room", Some(standup));

    // Act
    let todo = planner.submit_todo().unwrap();

    // Assert - the selection is reset with the rest of the input
    assert_eq!(planner.todo_draft.event_id, None);
    assert_eq!(planner.todos().get(todo).unwrap().event_id, Some(standup));
}

#[test]
fn linkage_unknown_event_id_is_kept_but_unresolved() {
    // Arrange
    let (mut planner, _) = planner_with_standup();

    // Act
    let todo = planner
        .add_todo("Orphan from the start", Some(EventId::new(404)))
        .unwrap();

    // Assert
    let row = planner
        .todo_rows()
        .find(|row| row.todo.id == todo)
        .unwrap();
    assert_eq!(row.todo.event_id, Some(EventId::new(404)));
    assert_eq!(row.event, None);
}
