// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command};
use planner_core::{EventId, TodoDraft, TodoId};

use crate::arg::{CommonArgs, OutputFormat, TodoArgs};
use crate::session::Session;

#[derive(Debug, Clone)]
pub struct CmdTodoNew {
    pub text: String,
    pub event: Option<EventId>,

    pub output_format: Option<OutputFormat>,
}

impl CmdTodoNew {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a new todo")
            .arg(TodoArgs::text())
            .arg(TodoArgs::event())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            text: TodoArgs::get_text(matches),
            event: TodoArgs::get_event(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run<W: io::Write>(self, session: &mut Session<W>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new todo...");

        // Only live events can be picked from the selector
        if let Some(id) = self.event
            && session.planner.resolve_event(id).is_none()
        {
            return Err(format!("No event with id {id}").into());
        }

        session.planner.todo_draft = TodoDraft::new(self.text, self.event);
        match session.planner.submit_todo() {
            Some(id) => session.print_todo(id, self.output_format),
            None => {
                session.planner.todo_draft.clear();
                session.notice("Nothing added: the todo text is empty")?;
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdTodoToggle {
    pub id: TodoId,

    pub output_format: Option<OutputFormat>,
}

impl CmdTodoToggle {
    pub const NAME: &str = "toggle";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("done")
            .about("Toggle whether a todo is completed")
            .arg(TodoArgs::id())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: TodoArgs::get_id(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run<W: io::Write>(self, session: &mut Session<W>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "toggling todo...");
        match session.planner.toggle_todo(self.id) {
            Some(_) => session.print_todo(self.id, self.output_format),
            None => {
                session.notice(&format!("No todo with id {}", self.id))?;
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdTodoDelete {
    pub id: TodoId,
}

impl CmdTodoDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a todo")
            .arg(TodoArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: TodoArgs::get_id(matches),
        }
    }

    pub fn run<W: io::Write>(self, session: &mut Session<W>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting todo...");
        match session.planner.delete_todo(self.id) {
            Some(todo) => writeln!(session.out, "Deleted todo #{}: {}", todo.id, todo.text)?,
            None => session.notice(&format!("No todo with id {}", self.id))?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdTodoList {
    pub output_format: Option<OutputFormat>,
}

impl CmdTodoList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List todos")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run<W: io::Write>(self, session: &mut Session<W>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing todos...");
        session.print_todos(self.output_format)
    }
}
