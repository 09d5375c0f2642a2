// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use jiff::civil::{Date, Time};
use planner_core::{Event, Todo};

/// Asserts that an event carries the expected fields.
///
/// # Panics
///
/// Panics if any field doesn't match.
pub fn assert_event_matches(
    event: &Event,
    title: &str,
    date: Date,
    time: Time,
    description: Option<&str>,
) {
    assert_eq!(event.title, title, "Event title mismatch");
    assert_eq!(event.date, date, "Event date mismatch");
    assert_eq!(event.time, time, "Event time mismatch");
    assert_eq!(
        event.description.as_deref(),
        description,
        "Event description mismatch"
    );
}

/// Asserts that a todo carries the expected text and completion state.
///
/// # Panics
///
/// Panics if any field doesn't match.
pub fn assert_todo_matches(todo: &Todo, text: &str, completed: bool) {
    assert_eq!(todo.text, text, "Todo text mismatch");
    assert_eq!(todo.completed, completed, "Todo completion mismatch");
}
