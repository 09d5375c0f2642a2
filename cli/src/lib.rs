// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Interactive shell for the planner: todos, events and the links between them.

mod arg;
mod cli;
mod cmd_dashboard;
mod cmd_event;
mod cmd_generate_completion;
mod cmd_session;
mod cmd_todo;
mod command;
mod config;
mod event_formatter;
mod parser;
mod session;
mod table;
mod todo_formatter;

pub use crate::arg::OutputFormat;
pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;
pub use crate::session::{Flow, Session};
