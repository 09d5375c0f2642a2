// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::slice;

use jiff::civil::{Date, Time};

use crate::{EventId, IdGenerator};

/// A scheduled calendar item.
///
/// Events are never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Event {
    /// The unique identifier of the event.
    pub id: EventId,

    /// The title, trimmed and never empty.
    pub title: String,

    /// The calendar date of the event.
    pub date: Date,

    /// The time of day of the event.
    pub time: Time,

    /// Optional free text, `None` if the user left it blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Pending input of the event form.
///
/// Date and time are `None` while their inputs are empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// The raw title as typed, untrimmed.
    pub title: String,

    /// The chosen date, if any.
    pub date: Option<Date>,

    /// The chosen time, if any.
    pub time: Option<Time>,

    /// The raw description as typed, untrimmed.
    pub description: String,
}

impl EventDraft {
    /// Creates a draft with every required field filled in.
    pub fn new(title: impl Into<String>, date: Date, time: Time) -> Self {
        Self {
            title: title.into(),
            date: Some(date),
            time: Some(time),
            description: String::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether submitting this draft would create an event.
    pub fn is_ready(&self) -> bool {
        !self.title.trim().is_empty() && self.date.is_some() && self.time.is_some()
    }

    /// Resets the draft to its empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Ordered collection of events, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    items: Vec<Event>,
}

impl EventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an event from the draft and appends it.
    ///
    /// Returns `None` and leaves both the store and the draft untouched if
    /// the title is blank, the date or time is missing, or no id is left. On
    /// success the draft is cleared.
    pub fn add(&mut self, draft: &mut EventDraft, ids: &mut IdGenerator) -> Option<EventId> {
        let title = draft.title.trim();
        let (Some(date), Some(time)) = (draft.date, draft.time) else {
            tracing::debug!("rejecting event without date or time");
            return None;
        };
        if title.is_empty() {
            tracing::debug!("rejecting event with blank title");
            return None;
        }
        let Some(id) = ids.next_event() else {
            tracing::warn!("rejecting event, identifiers are exhausted");
            return None;
        };

        let description = Some(draft.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let event = Event {
            id,
            title: title.to_string(),
            date,
            time,
            description,
        };
        tracing::debug!(%id, %date, %time, "event added");

        self.items.push(event);
        draft.clear();
        Some(id)
    }

    /// Removes an event, returning it if it existed.
    ///
    /// Todos referring to the event are not touched.
    pub fn delete(&mut self, id: EventId) -> Option<Event> {
        let index = self.items.iter().position(|e| e.id == id)?;
        tracing::debug!(%id, "event deleted");
        Some(self.items.remove(index))
    }

    /// Looks up an event by id.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.items.iter().find(|e| e.id == id)
    }

    /// Iterates over the events in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Event> {
        self.items.iter()
    }

    /// The events in insertion order.
    pub fn as_slice(&self) -> &[Event] {
        &self.items
    }

    /// Number of events.
    pub fn event_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
