// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgAction, ArgMatches, arg, value_parser};
use planner_core::{EventId, TodoId};

use crate::parser::parse_event_selection;

/// The output format for commands
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    /// Output format, without a default so that the configured one applies.
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format").value_parser(value_parser!(OutputFormat))
    }

    pub fn get_output_format(matches: &ArgMatches) -> Option<OutputFormat> {
        matches.get_one("output-format").copied()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TodoArgs;

impl TodoArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the todo").value_parser(value_parser!(TodoId))
    }

    pub fn get_id(matches: &ArgMatches) -> TodoId {
        *matches.get_one::<TodoId>("id").expect("id is required")
    }

    pub fn text() -> Arg {
        // `-5 push-ups` is text, other leading hyphens need `--` first
        arg!(text: <TEXT> "What needs to be done")
            .num_args(1..)
            .allow_negative_numbers(true)
            .action(ArgAction::Append)
    }

    pub fn get_text(matches: &ArgMatches) -> String {
        join_words(matches, "text")
    }

    pub fn event() -> Arg {
        arg!(-e --event <EVENT> "Assign the todo to an event, or 'none'")
            .value_parser(parse_event_selection)
    }

    /// The selected event; `None` when no event was chosen.
    pub fn get_event(matches: &ArgMatches) -> Option<EventId> {
        matches.get_one::<Option<EventId>>("event").copied().flatten()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the event").value_parser(value_parser!(EventId))
    }

    pub fn get_id(matches: &ArgMatches) -> EventId {
        *matches.get_one::<EventId>("id").expect("id is required")
    }

    pub fn title() -> Arg {
        arg!(title: <TITLE> "The title of the event")
            .num_args(1..)
            .allow_negative_numbers(true)
            .action(ArgAction::Append)
    }

    pub fn get_title(matches: &ArgMatches) -> String {
        join_words(matches, "title")
    }

    pub fn date() -> Arg {
        arg!(-d --date <DATE> "The date of the event, in YYYY-MM-DD format")
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one::<String>("date").cloned()
    }

    pub fn time() -> Arg {
        arg!(-t --time <TIME> "The time of the event, in HH:MM format")
    }

    pub fn get_time(matches: &ArgMatches) -> Option<String> {
        matches.get_one::<String>("time").cloned()
    }

    pub fn description() -> Arg {
        arg!(--description <DESCRIPTION> "Optional notes for the event")
    }

    pub fn get_description(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("description")
            .cloned()
            .unwrap_or_default()
    }
}

fn join_words(matches: &ArgMatches, id: &str) -> String {
    matches
        .get_many::<String>(id)
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}
