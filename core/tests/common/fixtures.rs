// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use jiff::civil::{Date, Time, date, time};
use planner_core::{EventDraft, EventId, PlannerState};

/// The date used by the standup fixtures, 2024-01-10.
#[must_use]
pub fn standup_date() -> Date {
    date(2024, 1, 10)
}

/// The time used by the standup fixtures, 09:00.
#[must_use]
pub fn standup_time() -> Time {
    time(9, 0, 0, 0)
}

/// Creates an event draft with every required field filled in.
///
/// # Example
///
/// ```ignore
/// let draft = test_event_draft("Team Meeting");
/// ```
#[must_use]
pub fn test_event_draft(title: &str) -> EventDraft {
    EventDraft::new(title, standup_date(), standup_time())
}

/// Creates a planner holding a single "Standup" event.
#[must_use]
pub fn planner_with_standup() -> (PlannerState, EventId) {
    let mut planner = PlannerState::new();
    planner.event_draft = test_event_draft("Standup");
    let id = planner
        .submit_event()
        .expect("standup fixture should be accepted");
    (planner, id)
}
