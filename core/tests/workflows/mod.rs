// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the planner-core crate.
//!
//! These tests drive a `PlannerState` through multi-step user sessions and
//! check the todo list, the event list and the links between them.

mod event_lifecycle;
mod linkage;
mod todo_lifecycle;
