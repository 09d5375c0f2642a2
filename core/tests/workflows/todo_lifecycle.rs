// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end todo lifecycle workflow tests.
//!
//! These tests validate complete workflows from todo creation through
//! completion and deletion.

use planner_core::PlannerState;

use crate::common::assert_todo_matches;

#[test]
fn todo_lifecycle_counts_follow_adds() {
    // Arrange
    let mut planner = PlannerState::new();
    let texts = ["one", "two", "three", "four", "five"];

    // Act
    for (i, text) in texts.iter().enumerate() {
        planner.add_todo(*text, None).unwrap();
        assert_eq!(planner.total_count(), i + 1);
    }

    // Assert
    assert!(planner.todos().iter().all(|t| !t.completed));
    assert_eq!(planner.completed_count(), 0);
}

#[test]
fn todo_lifecycle_blank_text_is_rejected() {
    // Arrange
    let mut planner = PlannerState::new();
    planner.add_todo("Existing", None).unwrap();
    let before: Vec<_> = planner.todos().iter().cloned().collect();

    // Act
    let empty = planner.add_todo("", None);
    let spaces = planner.add_todo("   ", None);

    // Assert
    assert_eq!(empty, None);
    assert_eq!(spaces, None);
    let after: Vec<_> = planner.todos().iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn todo_lifecycle_toggle_twice_restores_state() {
    // Arrange
    let mut planner = PlannerState::new();
    let id = planner.add_todo("Water plants", None).unwrap();

    // Act & Assert
    assert_eq!(planner.toggle_todo(id), Some(true));
    assert_todo_matches(planner.todos().get(id).unwrap(), "Water plants", true);
    assert_eq!(planner.toggle_todo(id), Some(false));
    assert_todo_matches(planner.todos().get(id).unwrap(), "Water plants", false);
}

#[test]
fn todo_lifecycle_operations_after_delete_are_no_ops() {
    // Arrange
    let mut planner = PlannerState::new();
    let keep = planner.add_todo("Keep", None).unwrap();
    let gone = planner.add_todo("Gone", None).unwrap();

    // Act
    let deleted = planner.delete_todo(gone);

    // Assert
    assert_eq!(deleted.map(|t| t.text), Some("Gone".to_string()));
    assert_eq!(planner.toggle_todo(gone), None);
    assert_eq!(planner.delete_todo(gone), None);
    assert_eq!(planner.total_count(), 1);
    assert!(planner.todos().get(keep).is_some());
}

#[test]
fn todo_lifecycle_milk_and_dog_scenario() {
    // Arrange
    let mut planner = PlannerState::new();

    // Act - add two todos
    let milk = planner.add_todo("Buy milk", None).unwrap();
    let dog = planner.add_todo("Walk dog", None).unwrap();

    // Assert
    assert_eq!(planner.total_count(), 2);
    assert_eq!(planner.completed_count(), 0);

    // Act - complete the first
    planner.toggle_todo(milk);
    assert_eq!(planner.completed_count(), 1);

    // Act - delete the second
    planner.delete_todo(dog);

    // Assert
    assert_eq!(planner.total_count(), 1);
    assert_eq!(planner.completed_count(), 1);
    assert_todo_matches(planner.todos().get(milk).unwrap(), "Buy milk", true);
}

#[test]
fn todo_lifecycle_ids_are_unique() {
    // Arrange
    let mut planner = PlannerState::new();

    // Act
    let ids: Vec<_> = (0..50)
        .filter_map(|i| planner.add_todo(format!("task {i}"), None))
        .collect();

    // Assert
    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}
