// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.
//!
//! These tests validate complete workflows from event creation through
//! deletion, including the pending form input.

use jiff::civil::{date, time};
use planner_core::{EventDraft, PlannerState};

use crate::common::{assert_event_matches, standup_date, standup_time, test_event_draft};

#[test]
fn event_lifecycle_create_flow() {
    // Arrange
    let mut planner = PlannerState::new();
    planner.event_draft = test_event_draft("Team Meeting").with_description("  Room 4 ");

    // Act
    let id = planner.submit_event().unwrap();

    // Assert
    let event = planner.resolve_event(id).unwrap();
    assert_event_matches(
        event,
        "Team Meeting",
        standup_date(),
        standup_time(),
        Some("Room 4"),
    );
    assert_eq!(planner.event_draft, EventDraft::default());
    assert_eq!(planner.event_count(), 1);
}

#[test]
fn event_lifecycle_incomplete_form_is_rejected() {
    // Arrange
    let mut planner = PlannerState::new();
    planner.event_draft.title = "No time yet".to_string();
    planner.event_draft.date = Some(standup_date());

    // Act
    let rejected = planner.submit_event();

    // Assert - nothing created, input kept for the user to finish
    assert_eq!(rejected, None);
    assert_eq!(planner.event_count(), 0);
    assert_eq!(planner.event_draft.title, "No time yet");

    // Act - complete the form
    planner.event_draft.time = Some(time(14, 0, 0, 0));
    let id = planner.submit_event().unwrap();

    // Assert
    assert_eq!(planner.resolve_event(id).unwrap().time, time(14, 0, 0, 0));
}

#[test]
fn event_lifecycle_keeps_insertion_order() {
    // Arrange
    let mut planner = PlannerState::new();

    // Act - later dates added first stay first
    let late = planner
        .add_event("Late", date(2025, 6, 1), time(8, 0, 0, 0), None)
        .unwrap();
    let early = planner
        .add_event("Early", date(2024, 1, 1), time(8, 0, 0, 0), None)
        .unwrap();

    // Assert
    let order: Vec<_> = planner.events().iter().map(|e| e.id).collect();
    assert_eq!(order, vec![late, early]);
}

#[test]
fn event_lifecycle_delete_flow() {
    // Arrange
    let mut planner = PlannerState::new();
    let a = planner
        .add_event("A", standup_date(), standup_time(), None)
        .unwrap();
    let b = planner
        .add_event("B", standup_date(), standup_time(), None)
        .unwrap();

    // Act
    let deleted = planner.delete_event(a);

    // Assert
    assert_eq!(deleted.map(|e| e.title), Some("A".to_string()));
    assert_eq!(planner.delete_event(a), None);
    assert_eq!(planner.event_count(), 1);
    assert!(planner.resolve_event(b).is_some());
}
