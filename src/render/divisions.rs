// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::Timelike;
use smallvec::SmallVec;

use super::axis::TimeAxis;
use super::ChartGlyphs;

/// An hour boundary on the axis: a divider goes in front of `column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    pub column: usize,
    pub hour: u32,
}

impl Division {
    pub fn is_day_boundary(&self) -> bool {
        self.hour == 0
    }

    pub fn glyph(&self, glyphs: &ChartGlyphs) -> char {
        if self.is_day_boundary() {
            glyphs.day_divider
        } else {
            glyphs.divider
        }
    }
}

pub type Divisions = SmallVec<[Division; 16]>;

/// Scans the axis column boundaries `0..=screen_width` and emits a division wherever the hour of
/// day changes to a multiple of `divide_every_h`.
///
/// Only the last *emitted* hour is remembered, so a run of columns inside one qualifying hour
/// yields a single division. Columns come out strictly ascending. `divide_every_h == 0` yields
/// no divisions.
pub fn compute_divisions(axis: &TimeAxis, divide_every_h: u32) -> Divisions {
    let mut divisions = Divisions::new();
    if divide_every_h == 0 {
        return divisions;
    }

    let mut last_hour = None::<u32>;
    for (column, time) in axis.times() {
        let hour = time.hour();
        if last_hour != Some(hour) && hour % divide_every_h == 0 {
            last_hour = Some(hour);
            divisions.push(Division { column, hour });
        }
    }

    divisions
}

/// Turns divisions into insertion edits in output coordinates.
///
/// Each edit position is the division column shifted by the number of glyphs inserted before it.
pub fn divider_edits(divisions: &[Division], glyphs: &ChartGlyphs) -> Vec<(usize, char)> {
    divisions
        .iter()
        .enumerate()
        .map(|(inserted, division)| (division.column + inserted, division.glyph(glyphs)))
        .collect()
}

/// Builds a new row with `glyph` placed at each edit position of the output.
///
/// `edits` must be sorted by position. An edit past the end of the row is appended.
pub fn apply_insertions(row: &str, edits: &[(usize, char)]) -> String {
    let mut out = String::with_capacity(row.len() + edits.len() * 4);
    let mut chars = row.chars();
    let mut pos = 0usize;

    for &(at, glyph) in edits {
        while pos < at {
            match chars.next() {
                Some(ch) => {
                    out.push(ch);
                    pos += 1;
                }
                None => break,
            }
        }
        out.push(glyph);
        pos += 1;
    }

    out.extend(chars);
    out
}

/// Splices divider glyphs into an already rendered row.
pub fn insert_dividers(row: &str, divisions: &[Division], glyphs: &ChartGlyphs) -> String {
    if divisions.is_empty() {
        return row.to_owned();
    }
    apply_insertions(row, &divider_edits(divisions, glyphs))
}
