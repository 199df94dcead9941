// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::fmt::Write as _;

use chrono::{Duration, TimeZone, Utc};
use termgantt::model::{Interval, Schedule, Timestamp};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    MediumDense,
    LargeLongLabels,
    WeekManyDivisions,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumDense => "medium_dense",
            Self::LargeLongLabels => "large_long_labels",
            Self::WeekManyDivisions => "week_many_divisions",
        }
    }

    fn shape(self) -> Shape {
        match self {
            Self::Small => Shape {
                labels: 4,
                intervals_per_label: 3,
                span_minutes: 12 * 60,
                label_len: 8,
            },
            Self::MediumDense => Shape {
                labels: 24,
                intervals_per_label: 40,
                span_minutes: 2 * 24 * 60,
                label_len: 12,
            },
            Self::LargeLongLabels => Shape {
                labels: 200,
                intervals_per_label: 10,
                span_minutes: 3 * 24 * 60,
                label_len: 64,
            },
            Self::WeekManyDivisions => Shape {
                labels: 16,
                intervals_per_label: 28,
                span_minutes: 7 * 24 * 60,
                label_len: 10,
            },
        }
    }
}

struct Shape {
    labels: usize,
    intervals_per_label: usize,
    span_minutes: i64,
    label_len: usize,
}

fn base_time() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 3, 4, 6, 0, 0)
        .single()
        .map(|ts| ts.fixed_offset())
        .expect("valid base time")
}

fn label_for(index: usize, len: usize) -> String {
    let mut label = format!("task-{index:03}-");
    while label.len() < len {
        label.push((b'a' + (label.len() % 26) as u8) as char);
    }
    label
}

/// Intervals in file order. Each label gets evenly spaced slots with a start skew so rows differ.
pub fn intervals(case: Case) -> Vec<Interval> {
    let shape = case.shape();
    let base = base_time();
    let slot = shape.span_minutes / shape.intervals_per_label as i64;
    let mut out = Vec::with_capacity(shape.labels * shape.intervals_per_label);

    for n in 0..shape.intervals_per_label {
        for label_index in 0..shape.labels {
            let skew = ((label_index * 7 + n * 3) as i64) % slot.max(1);
            let start = base + Duration::minutes(n as i64 * slot + skew / 2);
            let len = (slot / 2 + (label_index as i64 % 5) * slot / 10).max(1);
            out.push(Interval::new(
                label_for(label_index, shape.label_len),
                start,
                start + Duration::minutes(len),
            ));
        }
    }

    out
}

pub fn schedule(case: Case) -> Schedule {
    Schedule::new(intervals(case)).expect("fixture schedule")
}

pub fn csv(case: Case) -> String {
    let mut out = String::from("label,start,end\n");
    for interval in intervals(case) {
        let _ = writeln!(
            out,
            "{},{},{}",
            interval.label(),
            interval.start().format("%Y-%m-%d %H:%M:%S"),
            interval.end().format("%Y-%m-%d %H:%M:%S"),
        );
    }
    out
}

pub fn checksum_schedule(schedule: &Schedule) -> u64 {
    schedule.intervals().len() as u64 ^ (schedule.label_width() as u64).rotate_left(17)
}
