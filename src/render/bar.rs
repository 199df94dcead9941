// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Interval;

use super::axis::TimeAxis;
use super::ChartGlyphs;

/// Renders a single interval as one row: filler up to the start column, bar glyphs for the
/// duration, then filler padding up to `screen_width`.
///
/// The row is never shorter than `screen_width`. It can be longer when the lead-in and bar
/// together exceed the axis (an interval reaching past the axis end); merging tolerates that.
pub fn render_bar(interval: &Interval, axis: &TimeAxis, glyphs: &ChartGlyphs) -> String {
    let lead = axis.column_of(interval.start());
    let len = axis.columns_for(interval.duration());
    let trail = axis.screen_width().saturating_sub(lead.saturating_add(len));

    let mut row = String::with_capacity(
        (lead + trail) * glyphs.filler.len_utf8() + len * glyphs.bar.len_utf8(),
    );
    row.extend(std::iter::repeat(glyphs.filler).take(lead));
    row.extend(std::iter::repeat(glyphs.bar).take(len));
    row.extend(std::iter::repeat(glyphs.filler).take(trail));
    row
}
