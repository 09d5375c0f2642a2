// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::{CommonArgs, OutputFormat};
use crate::session::Session;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard {
    pub output_format: Option<OutputFormat>,
}

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("Show the dashboard, which includes all events and todos")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    /// Show the dashboard with events and todos.
    pub fn run<W: io::Write>(self, session: &mut Session<W>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");

        match session.output_format(self.output_format) {
            OutputFormat::Json => {
                let rows: Vec<_> = session.planner.todo_rows().collect();
                let dashboard = serde_json::json!({
                    "events": session.planner.events().as_slice(),
                    "todos": rows,
                });
                writeln!(session.out, "{}", serde_json::to_string_pretty(&dashboard)?)?;
            }
            OutputFormat::Table => {
                writeln!(session.out, "🗓️ {}", "Events".bold())?;
                session.print_events(Some(OutputFormat::Table))?;
                writeln!(session.out)?;

                writeln!(session.out, "✅ {}", "Todos".bold())?;
                session.print_todos(Some(OutputFormat::Table))?;
            }
        }
        Ok(())
    }
}
