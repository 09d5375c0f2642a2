// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use colored::Colorize;
use planner_core::{PlannerState, TodoId};

use crate::arg::OutputFormat;
use crate::command::SessionCommand;
use crate::config::Config;
use crate::event_formatter::{EventFormatter, event_summary};
use crate::parser::split_line;
use crate::todo_formatter::{TodoFormatter, todo_summary};

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive planner session: the planner state and where to render it.
#[derive(Debug)]
pub struct Session<W: io::Write> {
    pub(crate) planner: PlannerState,
    pub(crate) config: Config,
    pub(crate) out: W,
}

impl<W: io::Write> Session<W> {
    pub fn new(config: Config, out: W) -> Self {
        Self {
            planner: PlannerState::new(),
            config,
            out,
        }
    }

    pub fn planner(&self) -> &PlannerState {
        &self.planner
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs one input line, reporting failures to the output.
    pub fn feed(&mut self, line: &str) -> io::Result<Flow> {
        match self.execute(line) {
            Ok(flow) => Ok(flow),
            Err(e) => {
                tracing::debug!(line, error = %e, "command failed");
                writeln!(self.out, "{} {}", "Error:".red(), e)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Runs one input line.
    ///
    /// Blank lines and lines starting with `#` are ignored. Usage errors and
    /// help requests are rendered to the output rather than returned.
    pub fn execute(&mut self, line: &str) -> Result<Flow, Box<dyn Error>> {
        if line.trim_start().starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = split_line(line)?;
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let matches = match SessionCommand::command().try_get_matches_from(words) {
            Ok(matches) => matches,
            Err(e) => {
                write!(self.out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        let command = SessionCommand::from(&matches)?;
        tracing::debug!(?command, "running session command");
        command.run(self)
    }

    /// Writes the prompt configured for interactive input.
    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", self.config.prompt)?;
        self.out.flush()
    }

    pub(crate) fn output_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or(self.config.output_format)
    }

    pub(crate) fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.yellow())
    }

    /// Prints a single todo row.
    pub(crate) fn print_todo(
        &mut self,
        id: TodoId,
        format: Option<OutputFormat>,
    ) -> Result<(), Box<dyn Error>> {
        let formatter = TodoFormatter::new().with_output_format(self.output_format(format));
        let rows: Vec<_> = self
            .planner
            .todo_rows()
            .filter(|row| row.todo.id == id)
            .collect();
        writeln!(self.out, "{}", formatter.format(&rows))?;
        Ok(())
    }

    /// Prints the todo list, preceded by its summary in table output.
    pub(crate) fn print_todos(
        &mut self,
        format: Option<OutputFormat>,
    ) -> Result<(), Box<dyn Error>> {
        let format = self.output_format(format);
        if format == OutputFormat::Table {
            let summary = todo_summary(self.planner.completed_count(), self.planner.total_count());
            writeln!(self.out, "{}", summary.italic())?;
        }

        let formatter = TodoFormatter::new().with_output_format(format);
        let rows: Vec<_> = self.planner.todo_rows().collect();
        writeln!(self.out, "{}", formatter.format(&rows))?;
        Ok(())
    }

    /// Prints the event list, preceded by its summary in table output.
    pub(crate) fn print_events(
        &mut self,
        format: Option<OutputFormat>,
    ) -> Result<(), Box<dyn Error>> {
        let format = self.output_format(format);
        if format == OutputFormat::Table {
            let summary = event_summary(self.planner.event_count());
            writeln!(self.out, "{}", summary.italic())?;
        }

        let formatter = EventFormatter::new(self.config.hour12).with_output_format(format);
        writeln!(
            self.out,
            "{}",
            formatter.format(self.planner.events().as_slice())
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::EventId;

    fn session() -> Session<Vec<u8>> {
        colored::control::set_override(false);
        Session::new(Config::default(), Vec::new())
    }

    fn run(session: &mut Session<Vec<u8>>, lines: &[&str]) -> String {
        for line in lines {
            session.feed(line).unwrap();
        }
        String::from_utf8(std::mem::take(&mut session.out)).unwrap()
    }

    #[test]
    fn test_ignores_blank_and_comment_lines() {
        let mut session = session();
        let out = run(&mut session, &["", "   ", "# todo add nothing"]);
        assert_eq!(out, "");
        assert_eq!(session.planner().total_count(), 0);
    }

    #[test]
    fn test_milk_and_dog_session() {
        let mut session = session();

        run(&mut session, &["todo add Buy milk", "todo add 'Walk dog'"]);
        let out = run(&mut session, &["todo list"]);
        assert!(out.starts_with("0 of 2 completed\n"));

        run(&mut session, &["todo toggle 1", "todo delete 2"]);
        let out = run(&mut session, &["todo list"]);
        assert!(out.starts_with("1 of 1 completed\n"));
        assert!(out.contains("[x] #1 Buy milk"));
        assert!(!out.contains("Walk dog"));
    }

    #[test]
    fn test_standup_session() {
        let mut session = session();

        let out = run(
            &mut session,
            &["event add Standup --date 2024-01-10 --time 09:00"],
        );
        assert!(out.contains("#1 Wed, Jan 10, 2024 9:00 AM Standup"));

        let out = run(&mut session, &["todo add Prepare slides --event 1"]);
        assert!(out.contains("Prepare slides"));
        assert!(out.contains("@ Standup"));

        run(&mut session, &["event delete 1"]);
        let out = run(&mut session, &["todo list"]);
        assert!(out.contains("#2 Prepare slides"));
        assert!(out.contains("no assigned event"));
        assert_eq!(session.planner().event_count(), 0);
    }

    #[test]
    fn test_leading_hyphen_text_is_added() {
        let mut session = session();

        let out = run(&mut session, &["todo add -5 push-ups", "todo add -- -urgent call"]);

        assert!(out.contains("#1 -5 push-ups"));
        assert!(out.contains("#2 -urgent call"));
        assert_eq!(session.planner().total_count(), 2);
    }

    #[test]
    fn test_event_delete_reports_orphaned_todos() {
        let mut session = session();
        run(
            &mut session,
            &[
                "event add Standup --date 2024-01-10 --time 09:00",
                "todo add Prepare slides --event 1",
                "todo add Print agenda --event 1",
            ],
        );

        let out = run(&mut session, &["event delete 1"]);

        assert!(out.starts_with("Deleted event #1: Standup\n"));
        assert!(out.contains("2 todos no longer have an assigned event"));
        assert_eq!(session.planner().todos_referencing(EventId::new(1)), 2);
    }

    #[test]
    fn test_blank_input_is_rejected_with_notice() {
        let mut session = session();

        let out = run(
            &mut session,
            &[
                r#"todo add "   ""#,
                "event add Standup --date 2024-01-10",
                r#"event add "  " --date 2024-01-10 --time 09:00"#,
            ],
        );

        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().all(|l| l.starts_with("Nothing added")));
        assert_eq!(session.planner().total_count(), 0);
        assert_eq!(session.planner().event_count(), 0);
    }

    #[test]
    fn test_unknown_ids_are_reported_not_fatal() {
        let mut session = session();

        let out = run(&mut session, &["todo toggle 7", "todo delete 7", "event delete 7"]);

        assert!(out.contains("No todo with id 7"));
        assert!(out.contains("No event with id 7"));
    }

    #[test]
    fn test_selecting_missing_event_is_an_error() {
        let mut session = session();

        let out = run(&mut session, &["todo add Orphan --event 3"]);

        assert!(out.starts_with("Error: No event with id 3"));
        assert_eq!(session.planner().total_count(), 0);
    }

    #[test]
    fn test_invalid_input_is_an_error() {
        let mut session = session();

        let out = run(
            &mut session,
            &[
                "event add Standup --date 2024-13-01 --time 09:00",
                "todo add \"unterminated",
                "todo toggle abc",
            ],
        );

        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].starts_with("Error: Invalid date '2024-13-01'"));
        assert!(lines[1].starts_with("Error: Unterminated quote"));
        assert!(out.contains("invalid value 'abc'"));
        assert_eq!(session.planner().event_count(), 0);
    }

    #[test]
    fn test_help_is_rendered() {
        let mut session = session();

        let out = run(&mut session, &["help"]);

        assert!(out.contains("todo"));
        assert!(out.contains("event"));
        assert!(out.contains("dashboard"));
    }

    #[test]
    fn test_quit_stops_the_session() {
        let mut session = session();
        assert_eq!(session.feed("todo list").unwrap(), Flow::Continue);
        assert_eq!(session.feed("quit").unwrap(), Flow::Quit);
        assert_eq!(session.feed("exit").unwrap(), Flow::Quit);
    }

    #[test]
    fn test_json_output() {
        let mut session = session();
        run(&mut session, &["todo add Buy milk"]);

        let out = run(&mut session, &["todo list --output-format json"]);

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json[0]["text"], "Buy milk");
    }
}
