// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::slice;

use crate::{EventId, IdGenerator, TodoId};

/// A task item with completion state and an optional link to an event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Todo {
    /// The unique identifier of the todo.
    pub id: TodoId,

    /// What needs to be done, trimmed and never empty.
    pub text: String,

    /// Whether the todo has been completed.
    pub completed: bool,

    /// The event this todo was assigned to when it was created.
    ///
    /// This is not kept in sync with the event store: the event may have been
    /// deleted since, in which case the reference no longer resolves.
    pub event_id: Option<EventId>,
}

/// Pending input of the todo form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    /// The raw text as typed, untrimmed.
    pub text: String,

    /// The currently selected event, `None` for no event.
    pub event_id: Option<EventId>,
}

impl TodoDraft {
    /// Creates a draft from the given input.
    pub fn new(text: impl Into<String>, event_id: Option<EventId>) -> Self {
        Self {
            text: text.into(),
            event_id,
        }
    }

    /// Whether submitting this draft would create a todo.
    pub fn is_ready(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Resets the draft to its empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Ordered collection of todos, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct TodoStore {
    items: Vec<Todo>,
}

impl TodoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a todo from the draft and appends it.
    ///
    /// Returns `None` and leaves both the store and the draft untouched if
    /// the text is blank or no id is left. On success the draft is cleared.
    pub fn add(&mut self, draft: &mut TodoDraft, ids: &mut IdGenerator) -> Option<TodoId> {
        let text = draft.text.trim();
        if text.is_empty() {
            tracing::debug!("rejecting todo with blank text");
            return None;
        }
        let Some(id) = ids.next_todo() else {
            tracing::warn!("rejecting todo, identifiers are exhausted");
            return None;
        };

        let todo = Todo {
            id,
            text: text.to_string(),
            completed: false,
            event_id: draft.event_id,
        };
        tracing::debug!(%id, event_id = ?todo.event_id, "todo added");

        self.items.push(todo);
        draft.clear();
        Some(id)
    }

    /// Flips the completion state of a todo.
    ///
    /// Returns the new state, or `None` if no todo has this id.
    pub fn toggle(&mut self, id: TodoId) -> Option<bool> {
        let todo = self.items.iter_mut().find(|t| t.id == id)?;
        todo.completed = !todo.completed;
        tracing::debug!(%id, completed = todo.completed, "todo toggled");
        Some(todo.completed)
    }

    /// Removes a todo, returning it if it existed.
    pub fn delete(&mut self, id: TodoId) -> Option<Todo> {
        let index = self.items.iter().position(|t| t.id == id)?;
        tracing::debug!(%id, "todo deleted");
        Some(self.items.remove(index))
    }

    /// Looks up a todo by id.
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Iterates over the todos in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Todo> {
        self.items.iter()
    }

    /// The todos in insertion order.
    pub fn as_slice(&self) -> &[Todo] {
        &self.items
    }

    /// Number of completed todos.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    /// Number of todos.
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no todos.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a TodoStore {
    type Item = &'a Todo;
    type IntoIter = slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
