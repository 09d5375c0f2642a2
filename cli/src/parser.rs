// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::civil::{Date, Time};
use planner_core::{EventId, ParseIdError};

/// Parses the value of a date input. Blank input means no date was chosen.
pub fn parse_date(s: &str) -> Result<Option<Date>, Box<dyn Error>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    Date::strptime("%Y-%m-%d", s)
        .map(Some)
        .map_err(|e| format!("Invalid date '{s}', expected YYYY-MM-DD: {e}").into())
}

/// Parses the value of a time input. Blank input means no time was chosen.
pub fn parse_time(s: &str) -> Result<Option<Time>, Box<dyn Error>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    Time::strptime("%H:%M", s)
        .map(Some)
        .map_err(|e| format!("Invalid time '{s}', expected HH:MM: {e}").into())
}

/// Parses the event selector: `none` or an empty value selects no event.
pub fn parse_event_selection(s: &str) -> Result<Option<EventId>, ParseIdError> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        s.parse().map(Some)
    }
}

/// Formats a date like `Wed, Jan 10, 2024`.
pub fn format_date(date: Date) -> String {
    date.strftime("%a, %b %-d, %Y").to_string()
}

/// Formats a time like `9:00 AM`, or `09:00` on a 24-hour clock.
pub fn format_time(time: Time, hour12: bool) -> String {
    match hour12 {
        true => time.strftime("%-I:%M %p").to_string(),
        false => time.strftime("%H:%M").to_string(),
    }
}

/// Splits an input line into words.
///
/// Words are separated by whitespace. Single quotes group text literally,
/// double quotes group text and honor backslash escapes, and a backslash
/// outside quotes escapes the next character.
pub fn split_line(line: &str) -> Result<Vec<String>, &'static str> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Quote {
        None,
        Single,
        Double,
    }

    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Quote::None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            (Quote::None, '\'') => {
                quote = Quote::Single;
                in_word = true;
            }
            (Quote::None, '"') => {
                quote = Quote::Double;
                in_word = true;
            }
            (Quote::Single, '\'') | (Quote::Double, '"') => quote = Quote::None,
            (Quote::None | Quote::Double, '\\') => {
                let escaped = chars.next().ok_or("Dangling escape at end of line")?;
                word.push(escaped);
                in_word = true;
            }
            (_, c) => {
                word.push(c);
                in_word = true;
            }
        }
    }

    if quote != Quote::None {
        return Err("Unterminated quote");
    }
    if in_word {
        words.push(word);
    }
    Ok(words)
}
