// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for schedules.
//!
//! The pipeline maps time onto a fixed number of character columns ([`TimeAxis`]), paints one
//! row per interval ([`render_bar`]), overlays rows of the same label ([`merge_rows`]) and finally
//! splices hour-division glyphs into the finished rows ([`insert_dividers`]). [`render_gantt`]
//! drives all of it.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod axis;
pub mod bar;
pub mod chart;
pub mod divisions;
pub mod merge;
mod text;

pub use axis::{AxisError, TimeAxis};
pub use bar::render_bar;
pub use chart::{render_gantt, render_gantt_chart, GanttChart, GanttRenderError, GanttRow};
pub use divisions::{
    apply_insertions, compute_divisions, divider_edits, insert_dividers, Division, Divisions,
};
pub use merge::{filler_row, fold_rows, merge_rows};

pub const DEFAULT_SCREEN_WIDTH: usize = 200;
pub const DEFAULT_DIVIDE_EVERY_H: u32 = 6;

pub const UNICODE_FILLER: char = '.';
pub const UNICODE_BAR: char = '▓';
pub const UNICODE_DIVIDER: char = '|';
pub const UNICODE_DAY_DIVIDER: char = '║';

pub const ASCII_FILLER: char = '.';
pub const ASCII_BAR: char = '#';
pub const ASCII_DIVIDER: char = '|';
pub const ASCII_DAY_DIVIDER: char = '!';

/// The glyphs a chart is drawn with.
///
/// `filler` and plain space are the "no information" cells: merging lets any other glyph win
/// over them. Every other glyph must therefore differ from both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartGlyphs {
    pub filler: char,
    pub bar: char,
    pub divider: char,
    pub day_divider: char,
}

impl ChartGlyphs {
    pub const UNICODE: Self = Self {
        filler: UNICODE_FILLER,
        bar: UNICODE_BAR,
        divider: UNICODE_DIVIDER,
        day_divider: UNICODE_DAY_DIVIDER,
    };

    pub const ASCII: Self = Self {
        filler: ASCII_FILLER,
        bar: ASCII_BAR,
        divider: ASCII_DIVIDER,
        day_divider: ASCII_DAY_DIVIDER,
    };

    pub fn is_filler(&self, ch: char) -> bool {
        ch == self.filler || ch == ' '
    }

    pub fn validate(&self) -> Result<(), GlyphError> {
        for (name, glyph) in [
            ("bar", self.bar),
            ("divider", self.divider),
            ("day_divider", self.day_divider),
        ] {
            if self.is_filler(glyph) {
                return Err(GlyphError::IndistinctFromFiller { name, glyph });
            }
        }

        Ok(())
    }
}

impl Default for ChartGlyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    IndistinctFromFiller { name: &'static str, glyph: char },
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndistinctFromFiller { name, glyph } => write!(
                f,
                "{name} glyph {glyph:?} would be treated as filler (must differ from the filler glyph and space)"
            ),
        }
    }
}

impl std::error::Error for GlyphError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Columns available to the bar area before any divider is inserted.
    pub screen_width: usize,
    /// Insert a division every N hours; `None` renders without divisions.
    pub divide_every_h: Option<u32>,
    pub glyphs: ChartGlyphs,
    /// Labels longer than this are shortened with `…` on display.
    pub max_label_width: Option<usize>,
}

impl ChartOptions {
    /// Options for a chart without hour divisions.
    pub fn plain(screen_width: usize) -> Self {
        Self {
            screen_width,
            divide_every_h: None,
            ..Self::default()
        }
    }

    pub fn with_divisions(screen_width: usize, divide_every_h: u32) -> Self {
        Self {
            screen_width,
            divide_every_h: Some(divide_every_h),
            ..Self::default()
        }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            divide_every_h: Some(DEFAULT_DIVIDE_EVERY_H),
            glyphs: ChartGlyphs::default(),
            max_label_width: None,
        }
    }
}
