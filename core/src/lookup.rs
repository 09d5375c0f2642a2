// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Event, EventId, EventStore, Todo, TodoStore};

/// Resolves an event reference against the store as it is right now.
///
/// Returns `None` both when there is no reference and when the referenced
/// event no longer exists.
pub fn resolve_event(events: &EventStore, event_id: Option<EventId>) -> Option<&Event> {
    event_id.and_then(|id| events.get(id))
}

/// A todo joined with the event it refers to, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TodoRow<'a> {
    /// The todo.
    #[serde(flatten)]
    pub todo: &'a Todo,

    /// The assigned event, if the todo has one and it still exists.
    pub event: Option<&'a Event>,
}

/// Joins every todo with its assigned event, in todo order.
pub fn todo_rows<'a>(
    todos: &'a TodoStore,
    events: &'a EventStore,
) -> impl Iterator<Item = TodoRow<'a>> + 'a {
    todos.iter().map(move |todo| TodoRow {
        todo,
        event: resolve_event(events, todo.event_id),
    })
}
