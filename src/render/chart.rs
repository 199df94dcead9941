// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use rayon::prelude::*;
use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::model::{LabelGroup, Schedule, Timestamp};

use super::axis::{AxisError, TimeAxis};
use super::bar::render_bar;
use super::divisions::{compute_divisions, insert_dividers, Divisions};
use super::merge::{filler_row, fold_rows, merge_rows};
use super::text::{fit_label, pad_left};
use super::{ChartGlyphs, ChartOptions, GlyphError};

/// Format of the `START TIME` / `END TIME` footer lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GanttRenderError {
    Axis(AxisError),
    Glyphs(GlyphError),
    ZeroDivisionInterval,
}

impl fmt::Display for GanttRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axis(err) => write!(f, "axis error: {err}"),
            Self::Glyphs(err) => write!(f, "glyph error: {err}"),
            Self::ZeroDivisionInterval => f.write_str("division interval must be at least 1 hour"),
        }
    }
}

impl std::error::Error for GanttRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Axis(err) => Some(err),
            Self::Glyphs(err) => Some(err),
            Self::ZeroDivisionInterval => None,
        }
    }
}

impl From<AxisError> for GanttRenderError {
    fn from(value: AxisError) -> Self {
        Self::Axis(value)
    }
}

impl From<GlyphError> for GanttRenderError {
    fn from(value: GlyphError) -> Self {
        Self::Glyphs(value)
    }
}

/// One label and its finished (divided) bar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttRow {
    label: SmolStr,
    bars: String,
}

impl GanttRow {
    /// The label as displayed (possibly shortened).
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    pub fn bars(&self) -> &str {
        &self.bars
    }
}

/// A fully rendered chart. `Display` produces the final text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttChart {
    rows: Vec<GanttRow>,
    summary: String,
    label_width: usize,
    start_time: Timestamp,
    end_time: Timestamp,
    divisions: Divisions,
}

impl GanttChart {
    pub fn rows(&self) -> &[GanttRow] {
        &self.rows
    }

    /// The summary bars without the label-column indent.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn label_width(&self) -> usize {
        self.label_width
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    pub fn end_time(&self) -> Timestamp {
        self.end_time
    }

    pub fn divisions(&self) -> &Divisions {
        &self.divisions
    }
}

impl fmt::Display for GanttChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{} {}", pad_left(row.label(), self.label_width), row.bars())?;
        }
        writeln!(f, "{}{}", " ".repeat(self.label_width + 1), self.summary)?;
        writeln!(f, "START TIME: {}", self.start_time.format(TIMESTAMP_FORMAT))?;
        write!(f, "END TIME:   {}", self.end_time.format(TIMESTAMP_FORMAT))
    }
}

pub fn render_gantt(
    schedule: &Schedule,
    options: &ChartOptions,
) -> Result<String, GanttRenderError> {
    Ok(render_gantt_chart(schedule, options)?.to_string())
}

/// Renders every label group of `schedule` into a [`GanttChart`].
///
/// Rows follow first-seen label order. The summary overlays all label rows before divisions are
/// inserted and then receives the same divisions, so dividers line up across every line.
pub fn render_gantt_chart(
    schedule: &Schedule,
    options: &ChartOptions,
) -> Result<GanttChart, GanttRenderError> {
    if options.divide_every_h == Some(0) {
        return Err(GanttRenderError::ZeroDivisionInterval);
    }
    options.glyphs.validate()?;

    let glyphs = &options.glyphs;
    let axis = TimeAxis::new(schedule, options.screen_width)?;
    let divisions = options
        .divide_every_h
        .map(|every| compute_divisions(&axis, every))
        .unwrap_or_default();
    debug!(
        screen_width = axis.screen_width(),
        time_frame_secs = axis.time_frame().num_seconds(),
        divisions = divisions.len(),
        "derived chart axis"
    );

    let base = filler_row(axis.screen_width(), glyphs);
    let groups = schedule.label_groups();
    let undivided = groups
        .as_slice()
        .par_iter()
        .map(|group| (group.label(), render_group_row(group, &axis, glyphs, &base)))
        .collect::<Vec<_>>();

    let summary = fold_rows(undivided.iter().map(|(_, bars)| bars), glyphs)
        .unwrap_or_else(|| base.clone());
    let summary = insert_dividers(&summary, &divisions, glyphs);

    let label_width = match options.max_label_width {
        Some(max) => schedule.label_width().min(max),
        None => schedule.label_width(),
    };

    let rows = undivided
        .into_iter()
        .map(|(label, bars)| GanttRow {
            label: fit_label(label, options.max_label_width),
            bars: insert_dividers(&bars, &divisions, glyphs),
        })
        .collect::<Vec<_>>();

    Ok(GanttChart {
        rows,
        summary,
        label_width,
        start_time: schedule.start_time(),
        end_time: schedule.end_time(),
        divisions,
    })
}

fn render_group_row(
    group: &LabelGroup<'_>,
    axis: &TimeAxis,
    glyphs: &ChartGlyphs,
    base: &str,
) -> String {
    let bars = group
        .intervals()
        .iter()
        .map(|interval| render_bar(interval, axis, glyphs));
    let row = match fold_rows(bars, glyphs) {
        Some(folded) => merge_rows(base, &folded, glyphs),
        None => base.to_owned(),
    };
    trace!(label = group.label(), intervals = group.intervals().len(), "rendered row");
    row
}
