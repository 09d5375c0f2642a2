// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, num::ParseIntError, str::FromStr};

/// Hands out identifiers for todos and events.
///
/// Both kinds are drawn from one increasing sequence, so an id is never
/// handed out twice within a session, regardless of its kind. `u64::MAX` is
/// the last id; after it the generator is exhausted and allocates nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: Option<u64>,
}

impl IdGenerator {
    /// Creates a generator whose first id is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    /// The value the next allocation will return, `None` once exhausted.
    pub fn peek(&self) -> Option<u64> {
        self.next
    }

    /// Allocates a todo identifier.
    pub fn next_todo(&mut self) -> Option<TodoId> {
        self.bump().map(TodoId)
    }

    /// Allocates an event identifier.
    pub fn next_event(&mut self) -> Option<EventId> {
        self.bump().map(EventId)
    }

    fn bump(&mut self) -> Option<u64> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier of a todo item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Wraps a raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_raw(s).map(Self)
    }
}

/// Identifier of an event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    /// Wraps a raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_raw(s).map(Self)
    }
}

/// Error returned when text cannot be read as an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIdError {
    /// The input was blank.
    #[error("identifier is empty")]
    Empty,

    /// The input was not a non-negative integer.
    #[error("invalid identifier '{input}': {source}")]
    Invalid {
        /// The offending input.
        input: String,
        /// The underlying integer error.
        source: ParseIntError,
    },
}

/// Accepts `3` as well as `#3`, the form ids are displayed in.
fn parse_raw(s: &str) -> Result<u64, ParseIdError> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.is_empty() {
        return Err(ParseIdError::Empty);
    }

    digits.parse().map_err(|source| ParseIdError::Invalid {
        input: s.to_string(),
        source,
    })
}
