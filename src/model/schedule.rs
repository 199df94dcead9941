// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Duration, FixedOffset};
use smol_str::SmolStr;

/// An absolute point in time with the offset it was written in.
pub type Timestamp = DateTime<FixedOffset>;

/// One `(label, start, end)` schedule entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    label: SmolStr,
    start: Timestamp,
    end: Timestamp,
}

impl Interval {
    pub fn new(label: impl Into<SmolStr>, start: Timestamp, end: Timestamp) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    Empty,
    InvertedInterval {
        index: usize,
        label: SmolStr,
        start: Timestamp,
        end: Timestamp,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("schedule contains no intervals"),
            Self::InvertedInterval {
                index,
                label,
                start,
                end,
            } => write!(
                f,
                "interval {index} ({label}) ends before it starts: {start} > {end}"
            ),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// A validated, non-empty schedule with its derived scalars.
///
/// The scalars are computed once in [`Schedule::new`] and never change; the schedule itself is
/// read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    intervals: Vec<Interval>,
    start_time: Timestamp,
    end_time: Timestamp,
    label_width: usize,
}

impl Schedule {
    /// Builds a schedule, rejecting empty input and intervals that end before they start.
    ///
    /// Overlapping intervals (same label or not) are accepted as-is.
    pub fn new(intervals: Vec<Interval>) -> Result<Self, ScheduleError> {
        let first = intervals.first().ok_or(ScheduleError::Empty)?;
        let mut start_time = first.start;
        let mut end_time = first.end;
        let mut label_width = 0usize;

        for (index, interval) in intervals.iter().enumerate() {
            if interval.end < interval.start {
                return Err(ScheduleError::InvertedInterval {
                    index,
                    label: interval.label.clone(),
                    start: interval.start,
                    end: interval.end,
                });
            }

            start_time = start_time.min(interval.start);
            end_time = end_time.max(interval.end);
            label_width = label_width.max(interval.label.chars().count());
        }

        Ok(Self {
            intervals,
            start_time,
            end_time,
            label_width,
        })
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
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

    /// Width in chars of the longest label.
    pub fn label_width(&self) -> usize {
        self.label_width
    }

    pub fn label_groups(&self) -> LabelGroups<'_> {
        LabelGroups::from_intervals(&self.intervals)
    }
}

/// All intervals sharing one label, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGroup<'a> {
    label: &'a str,
    intervals: Vec<&'a Interval>,
}

impl<'a> LabelGroup<'a> {
    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn intervals(&self) -> &[&'a Interval] {
        &self.intervals
    }
}

/// Ordered multimap from label to its intervals; iteration follows first-seen label order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelGroups<'a> {
    groups: Vec<LabelGroup<'a>>,
}

impl<'a> LabelGroups<'a> {
    pub fn from_intervals(intervals: &'a [Interval]) -> Self {
        let mut index_by_label = HashMap::<&'a str, usize>::new();
        let mut groups = Vec::<LabelGroup<'a>>::new();

        for interval in intervals {
            let label = interval.label();
            let idx = *index_by_label.entry(label).or_insert_with(|| {
                groups.push(LabelGroup {
                    label,
                    intervals: Vec::new(),
                });
                groups.len() - 1
            });
            groups[idx].intervals.push(interval);
        }

        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&LabelGroup<'a>> {
        self.groups.iter().find(|group| group.label == label)
    }

    pub fn as_slice(&self) -> &[LabelGroup<'a>] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabelGroup<'a>> {
        self.groups.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|group| group.label)
    }
}

impl<'g, 'a> IntoIterator for &'g LabelGroups<'a> {
    type Item = &'g LabelGroup<'a>;
    type IntoIter = std::slice::Iter<'g, LabelGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
