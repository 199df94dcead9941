// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use chrono::Duration;

use crate::model::{Schedule, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisError {
    ZeroWidth,
    DegenerateTimeFrame { at: Timestamp },
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => f.write_str("screen width must be at least one column"),
            Self::DegenerateTimeFrame { at } => write!(
                f,
                "schedule spans no time (every interval starts and ends at {at})"
            ),
        }
    }
}

impl std::error::Error for AxisError {}

/// Mapping from absolute time to character columns for one rendering run.
///
/// Column counts are `floor(screen_width * duration / time_frame)` in integer nanoseconds, so a
/// bar may come out one column short of its exact proportional length but never longer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxis {
    start_time: Timestamp,
    end_time: Timestamp,
    frame_nanos: i128,
    screen_width: usize,
}

impl TimeAxis {
    pub fn new(schedule: &Schedule, screen_width: usize) -> Result<Self, AxisError> {
        Self::from_span(schedule.start_time(), schedule.end_time(), screen_width)
    }

    pub fn from_span(
        start_time: Timestamp,
        end_time: Timestamp,
        screen_width: usize,
    ) -> Result<Self, AxisError> {
        if screen_width == 0 {
            return Err(AxisError::ZeroWidth);
        }

        let frame_nanos = duration_nanos(end_time - start_time);
        if frame_nanos <= 0 {
            return Err(AxisError::DegenerateTimeFrame { at: start_time });
        }

        Ok(Self {
            start_time,
            end_time,
            frame_nanos,
            screen_width,
        })
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    pub fn end_time(&self) -> Timestamp {
        self.end_time
    }

    pub fn time_frame(&self) -> Duration {
        self.end_time - self.start_time
    }

    pub fn screen_width(&self) -> usize {
        self.screen_width
    }

    /// Number of whole columns `duration` covers; truncated toward zero, never negative.
    pub fn columns_for(&self, duration: Duration) -> usize {
        let nanos = duration_nanos(duration);
        if nanos <= 0 {
            return 0;
        }

        let columns = (self.screen_width as i128).saturating_mul(nanos) / self.frame_nanos;
        usize::try_from(columns).unwrap_or(usize::MAX)
    }

    /// Column offset of `at` from the start of the axis.
    pub fn column_of(&self, at: Timestamp) -> usize {
        self.columns_for(at - self.start_time)
    }

    /// The timestamp represented by column `column`.
    pub fn time_at(&self, column: usize) -> Timestamp {
        let offset = self.frame_nanos * (column as i128) / (self.screen_width as i128);
        self.start_time + nanos_to_duration(offset)
    }

    /// `(column, timestamp)` for every column boundary `0..=screen_width`.
    pub fn times(&self) -> impl Iterator<Item = (usize, Timestamp)> + '_ {
        (0..=self.screen_width).map(move |column| (column, self.time_at(column)))
    }
}

fn duration_nanos(duration: Duration) -> i128 {
    // Spans beyond ~292 years overflow i64 nanoseconds; fall back to coarser units.
    duration
        .num_nanoseconds()
        .map(i128::from)
        .or_else(|| duration.num_microseconds().map(|us| i128::from(us) * 1_000))
        .unwrap_or_else(|| i128::from(duration.num_milliseconds()) * 1_000_000)
}

fn nanos_to_duration(nanos: i128) -> Duration {
    match i64::try_from(nanos) {
        Ok(nanos) => Duration::nanoseconds(nanos),
        Err(_) => Duration::milliseconds(i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)),
    }
}
