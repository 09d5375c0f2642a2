// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use planner_core::TodoRow;

use crate::arg::OutputFormat;
use crate::table::{PaddingDirection, Table, TableColumn};

/// Shown for a todo without an event, or whose event has been deleted.
pub const NO_ASSIGNED_EVENT: &str = "no assigned event";

/// The one-line progress summary of the todo list.
pub fn todo_summary(completed: usize, total: usize) -> String {
    match total {
        0 => "No tasks yet".to_string(),
        _ => format!("{completed} of {total} completed"),
    }
}

#[derive(Debug)]
pub struct TodoFormatter {
    columns: Vec<TodoColumn>,
    format: OutputFormat,
}

impl TodoFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                TodoColumn::Status(TodoColumnStatus),
                TodoColumn::Id(TodoColumnId),
                TodoColumn::Text(TodoColumnText),
                TodoColumn::Event(TodoColumnEvent),
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, rows: &'a [TodoRow<'a>]) -> Display<'a> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: &'a [TodoRow<'a>],
    formatter: &'a TodoFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.rows).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table if self.rows.is_empty() => write!(f, "No todos yet."),
            OutputFormat::Table => {
                write!(f, "{}", Table::new(&self.formatter.columns, self.rows))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum TodoColumn {
    Event(TodoColumnEvent),
    Id(TodoColumnId),
    Status(TodoColumnStatus),
    Text(TodoColumnText),
}

impl<'r> TableColumn<TodoRow<'r>> for TodoColumn {
    fn format<'a>(&self, data: &'a TodoRow<'r>) -> Cow<'a, str> {
        match self {
            TodoColumn::Event(a) => a.format(data),
            TodoColumn::Id(a) => a.format(data),
            TodoColumn::Status(a) => a.format(data),
            TodoColumn::Text(a) => a.format(data),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TodoColumn::Id(_) => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &TodoRow<'r>) -> Option<Color> {
        match self {
            TodoColumn::Event(a) => a.get_color(data),
            TodoColumn::Status(a) => a.get_color(data),
            TodoColumn::Text(a) => a.get_color(data),
            TodoColumn::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TodoColumnEvent;

impl TodoColumnEvent {
    fn format<'a>(&self, row: &'a TodoRow<'_>) -> Cow<'a, str> {
        match row.event {
            Some(event) => format!("@ {}", event.title).into(),
            None => NO_ASSIGNED_EVENT.into(),
        }
    }

    fn get_color(&self, row: &TodoRow<'_>) -> Option<Color> {
        row.event.is_none().then_some(Color::BrightBlack)
    }
}

#[derive(Debug, Clone)]
pub struct TodoColumnId;

impl TodoColumnId {
    fn format<'a>(&self, row: &'a TodoRow<'_>) -> Cow<'a, str> {
        format!("#{}", row.todo.id).into()
    }
}

#[derive(Debug, Clone)]
pub struct TodoColumnStatus;

impl TodoColumnStatus {
    fn format<'a>(&self, row: &'a TodoRow<'_>) -> Cow<'a, str> {
        match row.todo.completed {
            true => "[x]",
            false => "[ ]",
        }
        .into()
    }

    fn get_color(&self, row: &TodoRow<'_>) -> Option<Color> {
        row.todo.completed.then_some(Color::Green)
    }
}

#[derive(Debug, Clone)]
pub struct TodoColumnText;

impl TodoColumnText {
    fn format<'a>(&self, row: &'a TodoRow<'_>) -> Cow<'a, str> {
        row.todo.text.as_str().into()
    }

    fn get_color(&self, row: &TodoRow<'_>) -> Option<Color> {
        row.todo.completed.then_some(Color::BrightBlack)
    }
}
