// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use planner_core::Event;

use crate::arg::OutputFormat;
use crate::parser::{format_date, format_time};
use crate::table::{PaddingDirection, Table, TableColumn};

/// The one-line summary of the event list.
pub fn event_summary(count: usize) -> String {
    match count {
        0 => "No events scheduled".to_string(),
        1 => "1 event scheduled".to_string(),
        n => format!("{n} events scheduled"),
    }
}

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(hour12: bool) -> Self {
        Self {
            columns: vec![
                EventColumn::Id(EventColumnId),
                EventColumn::Date(EventColumnDate),
                EventColumn::Time(EventColumnTime { hour12 }),
                EventColumn::Title(EventColumnTitle),
                EventColumn::Description(EventColumnDescription),
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table if self.events.is_empty() => write!(f, "No events yet."),
            OutputFormat::Table => {
                write!(f, "{}", Table::new(&self.formatter.columns, self.events))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventColumn {
    Date(EventColumnDate),
    Description(EventColumnDescription),
    Id(EventColumnId),
    Time(EventColumnTime),
    Title(EventColumnTitle),
}

impl TableColumn<Event> for EventColumn {
    fn format<'a>(&self, data: &'a Event) -> Cow<'a, str> {
        match self {
            EventColumn::Date(a) => a.format(data),
            EventColumn::Description(a) => a.format(data),
            EventColumn::Id(a) => a.format(data),
            EventColumn::Time(a) => a.format(data),
            EventColumn::Title(a) => a.format(data),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id(_) | EventColumn::Time(_) => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, _data: &Event) -> Option<Color> {
        match self {
            EventColumn::Description(_) => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnDate;

impl EventColumnDate {
    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        format_date(event.date).into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnDescription;

impl EventColumnDescription {
    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        event.description.as_deref().unwrap_or_default().into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnId;

impl EventColumnId {
    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        format!("#{}", event.id).into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnTime {
    hour12: bool,
}

impl EventColumnTime {
    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        format_time(event.time, self.hour12).into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnTitle;

impl EventColumnTitle {
    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        event.title.as_str().into()
    }
}
