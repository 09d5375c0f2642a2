// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, slice};

use clap::{ArgMatches, Command};
use jiff::civil::{Date, Time};
use planner_core::{EventDraft, EventId};

use crate::arg::{CommonArgs, EventArgs, OutputFormat};
use crate::event_formatter::EventFormatter;
use crate::parser::{parse_date, parse_time};
use crate::session::Session;

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub title: String,
    pub date: Option<Date>,
    pub time: Option<Time>,
    pub description: String,

    pub output_format: Option<OutputFormat>,
}

impl CmdEventNew {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a new event")
            .arg(EventArgs::title())
            .arg(EventArgs::date())
            .arg(EventArgs::time())
            .arg(EventArgs::description())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let date = match EventArgs::get_date(matches) {
            Some(date) => parse_date(&date)?,
            None => None,
        };
        let time = match EventArgs::get_time(matches) {
            Some(time) => parse_time(&time)?,
            None => None,
        };

        Ok(Self {
            title: EventArgs::get_title(matches),
            date,
            time,
            description: EventArgs::get_description(matches),
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub fn run<W: io::Write>(self, session: &mut Session<W>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");

        session.planner.event_draft = EventDraft {
            title: self.title,
            date: self.date,
            time: self.time,
            description: self.description,
        };
        let Some(id) = session.planner.submit_event() else {
            session.planner.event_draft.clear();
            session.notice("Nothing added: an event needs a title, a date and a time")?;
            return Ok(());
        };

        let format = session.output_format(self.output_format);
        let formatter = EventFormatter::new(session.config.hour12).with_output_format(format);
        let events = session.planner.events();
        if let Some(event) = events.get(id) {
            writeln!(session.out, "{}", formatter.format(slice::from_ref(event)))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub id: EventId,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event, todos assigned to it are kept")
            .arg(EventArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
        }
    }

    pub fn run<W: io::Write>(self, session: &mut Session<W>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        let Some(event) = session.planner.delete_event(self.id) else {
            session.notice(&format!("No event with id {}", self.id))?;
            return Ok(());
        };

        writeln!(session.out, "Deleted event #{}: {}", event.id, event.title)?;
        match session.planner.todos_referencing(event.id) {
            0 => {}
            1 => session.notice("1 todo no longer has an assigned event")?,
            n => session.notice(&format!("{n} todos no longer have an assigned event"))?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventList {
    pub output_format: Option<OutputFormat>,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run<W: io::Write>(self, session: &mut Session<W>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        session.print_events(self.output_format)
    }
}
