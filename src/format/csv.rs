// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `label,start,end` CSV schedules.
//!
//! The first non-empty line is a header and is skipped. Fields may be double-quoted (`""` inside
//! quotes is a literal quote) and keep their inner whitespace; unquoted fields are trimmed. Fields
//! beyond the third are ignored. Records cannot span lines.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::debug;

use crate::model::{Interval, Schedule, ScheduleError, Timestamp};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S %:z",
    "%Y-%m-%d %H:%M %z",
];

// Timestamps without an offset are read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    Label,
    Start,
    End,
}

impl ScheduleField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for ScheduleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleParseError {
    MissingHeader,
    UnterminatedQuote {
        line_no: usize,
    },
    MissingField {
        line_no: usize,
        field: ScheduleField,
    },
    MalformedTimestamp {
        line_no: usize,
        field: ScheduleField,
        value: String,
    },
    Schedule(ScheduleError),
}

impl fmt::Display for ScheduleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => f.write_str("expected a header line, found empty input"),
            Self::UnterminatedQuote { line_no } => {
                write!(f, "unterminated quoted field on line {line_no}")
            }
            Self::MissingField { line_no, field } => write!(
                f,
                "missing {field} field on line {line_no} (expected '<label>,<start>,<end>')"
            ),
            Self::MalformedTimestamp {
                line_no,
                field,
                value,
            } => write!(f, "malformed {field} timestamp on line {line_no}: {value:?}"),
            Self::Schedule(err) => write!(f, "invalid schedule: {err}"),
        }
    }
}

impl std::error::Error for ScheduleParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Schedule(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ScheduleError> for ScheduleParseError {
    fn from(value: ScheduleError) -> Self {
        Self::Schedule(value)
    }
}

#[derive(Debug)]
pub enum LoadScheduleError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: ScheduleParseError },
}

impl fmt::Display for LoadScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Parse { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for LoadScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

pub fn load_schedule_csv(path: impl AsRef<Path>) -> Result<Schedule, LoadScheduleError> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path).map_err(|source| LoadScheduleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_schedule_csv(&src).map_err(|source| LoadScheduleError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_schedule_csv(src: &str) -> Result<Schedule, ScheduleParseError> {
    let src = src.strip_prefix('\u{feff}').unwrap_or(src);
    let mut lines = src
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    if lines.next().is_none() {
        return Err(ScheduleParseError::MissingHeader);
    }

    let mut intervals = Vec::new();
    for (line_no, line) in lines {
        let fields =
            split_fields(line).ok_or(ScheduleParseError::UnterminatedQuote { line_no })?;
        let mut fields = fields.into_iter();

        let label = fields.next().ok_or(ScheduleParseError::MissingField {
            line_no,
            field: ScheduleField::Label,
        })?;
        let start = parse_field(fields.next(), line_no, ScheduleField::Start)?;
        let end = parse_field(fields.next(), line_no, ScheduleField::End)?;

        intervals.push(Interval::new(label, start, end));
    }

    debug!(intervals = intervals.len(), "parsed schedule csv");
    Ok(Schedule::new(intervals)?)
}

fn parse_field(
    value: Option<String>,
    line_no: usize,
    field: ScheduleField,
) -> Result<Timestamp, ScheduleParseError> {
    let value = value.ok_or(ScheduleParseError::MissingField { line_no, field })?;
    parse_timestamp(&value).ok_or(ScheduleParseError::MalformedTimestamp {
        line_no,
        field,
        value,
    })
}

/// Parses an unambiguous textual timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM[:SS[.fff]] ±HHMM`, the same forms without an offset
/// (read as UTC, with either a space or `T` separator) and a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt);
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&naive).fixed_offset());
        }
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).fixed_offset())
}

/// Splits one CSV record; `None` if a quoted field is never closed.
///
/// Unquoted fields are trimmed. Quoted fields keep their inner whitespace; whitespace around the
/// quotes is dropped.
fn split_fields(line: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if !quoted && field.trim().is_empty() => {
                field.clear();
                quoted = true;
                in_quotes = true;
            }
            ',' => {
                fields.push(finish_field(&mut field, quoted));
                quoted = false;
            }
            _ if quoted && ch.is_whitespace() => {}
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return None;
    }

    fields.push(finish_field(&mut field, quoted));
    Some(fields)
}

fn finish_field(field: &mut String, quoted: bool) -> String {
    let out = if quoted {
        std::mem::take(field)
    } else {
        field.trim().to_owned()
    };
    field.clear();
    out
}
