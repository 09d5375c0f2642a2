// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory todo list and event schedule.
//!
//! A [`PlannerState`] owns both lists for one session. Todos may refer to an
//! event; such references are resolved at read time and simply stop
//! resolving once the event is deleted.

mod event;
mod id;
mod lookup;
mod planner;
mod todo;

pub use crate::event::{Event, EventDraft, EventStore};
pub use crate::id::{EventId, IdGenerator, ParseIdError, TodoId};
pub use crate::lookup::{TodoRow, resolve_event, todo_rows};
pub use crate::planner::PlannerState;
pub use crate::todo::{Todo, TodoDraft, TodoStore};

/// The name of the application.
pub const APP_NAME: &str = "planner";
