// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Time};

use crate::lookup::{self, TodoRow};
use crate::{
    Event, EventDraft, EventId, EventStore, IdGenerator, Todo, TodoDraft, TodoId, TodoStore,
};

/// State of one planner session: the todo list, the event list and the
/// pending input of both forms.
///
/// Every operation runs to completion and none of them fails; invalid input
/// is rejected by leaving the state unchanged.
#[derive(Debug, Default, Clone)]
pub struct PlannerState {
    ids: IdGenerator,
    todos: TodoStore,
    events: EventStore,

    /// Pending input of the todo form, consumed by [`Self::submit_todo`].
    pub todo_draft: TodoDraft,

    /// Pending input of the event form, consumed by [`Self::submit_event`].
    pub event_draft: EventDraft,
}

impl PlannerState {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with a custom identifier sequence.
    pub fn with_ids(ids: IdGenerator) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    /// The todo list, in insertion order.
    pub fn todos(&self) -> &TodoStore {
        &self.todos
    }

    /// The event list, in insertion order.
    pub fn events(&self) -> &EventStore {
        &self.events
    }

    /// Submits the pending todo input, clearing it on success.
    pub fn submit_todo(&mut self) -> Option<TodoId> {
        self.todos.add(&mut self.todo_draft, &mut self.ids)
    }

    /// Submits the pending event input, clearing it on success.
    pub fn submit_event(&mut self) -> Option<EventId> {
        self.events.add(&mut self.event_draft, &mut self.ids)
    }

    /// Adds a todo directly, leaving the pending input alone.
    pub fn add_todo(
        &mut self,
        text: impl Into<String>,
        event_id: Option<EventId>,
    ) -> Option<TodoId> {
        let mut draft = TodoDraft::new(text, event_id);
        self.todos.add(&mut draft, &mut self.ids)
    }

    /// Adds an event directly, leaving the pending input alone.
    pub fn add_event(
        &mut self,
        title: impl Into<String>,
        date: Date,
        time: Time,
        description: Option<&str>,
    ) -> Option<EventId> {
        let mut draft =
            EventDraft::new(title, date, time).with_description(description.unwrap_or_default());
        self.events.add(&mut draft, &mut self.ids)
    }

    /// Flips a todo's completion state; `None` if it does not exist.
    pub fn toggle_todo(&mut self, id: TodoId) -> Option<bool> {
        self.todos.toggle(id)
    }

    /// Removes a todo; `None` if it does not exist.
    pub fn delete_todo(&mut self, id: TodoId) -> Option<Todo> {
        self.todos.delete(id)
    }

    /// Removes an event; `None` if it does not exist.
    ///
    /// Todos assigned to the event keep their reference, which from now on
    /// resolves to nothing.
    pub fn delete_event(&mut self, id: EventId) -> Option<Event> {
        let event = self.events.delete(id)?;
        if tracing::enabled!(tracing::Level::DEBUG) {
            let orphans = self.todos_referencing(id);
            if orphans > 0 {
                tracing::debug!(%id, orphans, "deleted event is still referenced by todos");
            }
        }
        Some(event)
    }

    /// Number of todos whose `event_id` is `event_id`, whether or not the
    /// event still exists.
    pub fn todos_referencing(&self, event_id: EventId) -> usize {
        self.todos
            .iter()
            .filter(|t| t.event_id == Some(event_id))
            .count()
    }

    /// The live event with this id, if any.
    pub fn resolve_event(&self, event_id: EventId) -> Option<&Event> {
        lookup::resolve_event(&self.events, Some(event_id))
    }

    /// The event a todo is assigned to, if it still exists.
    pub fn assigned_event(&self, todo: &Todo) -> Option<&Event> {
        lookup::resolve_event(&self.events, todo.event_id)
    }

    /// Every todo joined with its assigned event, in todo order.
    pub fn todo_rows(&self) -> impl Iterator<Item = TodoRow<'_>> {
        lookup::todo_rows(&self.todos, &self.events)
    }

    /// Number of completed todos.
    pub fn completed_count(&self) -> usize {
        self.todos.completed_count()
    }

    /// Number of todos.
    pub fn total_count(&self) -> usize {
        self.todos.total_count()
    }

    /// Number of events.
    pub fn event_count(&self) -> usize {
        self.events.event_count()
    }
}
