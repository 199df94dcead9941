// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{NaiveDateTime, TimeZone, Utc};

use super::schedule::{Interval, Schedule, Timestamp};

/// Parses `YYYY-MM-DD HH:MM` as UTC.
pub(crate) fn ts(value: &str) -> Timestamp {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").expect("fixture timestamp");
    Utc.from_utc_datetime(&naive).fixed_offset()
}

pub(crate) fn interval(label: &str, start: &str, end: &str) -> Interval {
    Interval::new(label, ts(start), ts(end))
}

/// Two `A` intervals around one `B` interval over a 09:00-12:00 window.
pub(crate) fn two_labels_overlapping() -> Schedule {
    Schedule::new(vec![
        interval("A", "2024-01-01 09:00", "2024-01-01 10:00"),
        interval("A", "2024-01-01 11:00", "2024-01-01 12:00"),
        interval("B", "2024-01-01 09:30", "2024-01-01 11:30"),
    ])
    .expect("fixture schedule")
}

/// A 24h window starting at 18:00 that crosses one midnight.
pub(crate) fn across_midnight() -> Schedule {
    Schedule::new(vec![
        interval("night", "2024-01-01 18:00", "2024-01-02 02:00"),
        interval("day", "2024-01-02 08:00", "2024-01-02 18:00"),
    ])
    .expect("fixture schedule")
}
