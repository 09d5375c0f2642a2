// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command};
use planner_core::APP_NAME;

use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_event::{CmdEventDelete, CmdEventList, CmdEventNew};
use crate::cmd_todo::{CmdTodoDelete, CmdTodoList, CmdTodoNew, CmdTodoToggle};
use crate::session::{Flow, Session};

/// A command entered on one line of a session.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// Show both lists
    Dashboard(CmdDashboard),

    /// Add a new event
    EventNew(CmdEventNew),

    /// Delete an event
    EventDelete(CmdEventDelete),

    /// List events
    EventList(CmdEventList),

    /// Add a new todo
    TodoNew(CmdTodoNew),

    /// Toggle whether a todo is completed
    TodoToggle(CmdTodoToggle),

    /// Delete a todo
    TodoDelete(CmdTodoDelete),

    /// List todos
    TodoList(CmdTodoList),

    /// End the session
    Quit,
}

impl SessionCommand {
    pub const QUIT: &str = "quit";

    /// Create the parser for session lines, which carry no binary name.
    pub fn command() -> Command {
        Command::new(APP_NAME)
            .no_binary_name(true)
            .subcommand_required(true)
            .disable_version_flag(true)
            .subcommand(CmdDashboard::command())
            .subcommand(
                Command::new("todo")
                    .alias("t")
                    .about("Manage your todo list")
                    .subcommand_required(true)
                    .subcommand(CmdTodoNew::command())
                    .subcommand(CmdTodoToggle::command())
                    .subcommand(CmdTodoDelete::command())
                    .subcommand(CmdTodoList::command()),
            )
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Manage your event list")
                    .subcommand_required(true)
                    .subcommand(CmdEventNew::command())
                    .subcommand(CmdEventDelete::command())
                    .subcommand(CmdEventList::command()),
            )
            .subcommand(
                Command::new(Self::QUIT)
                    .alias("exit")
                    .about("End the session"),
            )
    }

    /// Create a command from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use SessionCommand::*;
        let command = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches)),
            Some(("todo", matches)) => match matches.subcommand() {
                Some((CmdTodoNew::NAME, matches)) => TodoNew(CmdTodoNew::from(matches)),
                Some((CmdTodoToggle::NAME, matches)) => TodoToggle(CmdTodoToggle::from(matches)),
                Some((CmdTodoDelete::NAME, matches)) => TodoDelete(CmdTodoDelete::from(matches)),
                Some((CmdTodoList::NAME, matches)) => TodoList(CmdTodoList::from(matches)),
                _ => unreachable!(),
            },
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventNew::NAME, matches)) => EventNew(CmdEventNew::from(matches)?),
                Some((CmdEventDelete::NAME, matches)) => {
                    EventDelete(CmdEventDelete::from(matches))
                }
                Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
                _ => unreachable!(),
            },
            Some((Self::QUIT, _)) => Quit,
            _ => unreachable!(),
        };
        Ok(command)
    }

    /// Run the command against the session
    pub fn run<W: io::Write>(self, session: &mut Session<W>) -> Result<Flow, Box<dyn Error>> {
        use SessionCommand::*;
        match self {
            Dashboard(a) => a.run(session)?,
            EventNew(a) => a.run(session)?,
            EventDelete(a) => a.run(session)?,
            EventList(a) => a.run(session)?,
            TodoNew(a) => a.run(session)?,
            TodoToggle(a) => a.run(session)?,
            TodoDelete(a) => a.run(session)?,
            TodoList(a) => a.run(session)?,
            Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
