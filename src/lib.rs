// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Termgantt: fixed-width Gantt charts for the terminal.
//!
//! A [`model::Schedule`] of labeled intervals is rendered by [`render::render_gantt`] into one
//! bar row per label, a summary row and the overall start/end time. [`format::csv`] reads
//! schedules from `label,start,end` CSV files and [`config`] loads chart options from JSON.

pub mod config;
pub mod format;
pub mod model;
pub mod render;

pub use model::{Interval, Schedule};
pub use render::{render_gantt, ChartGlyphs, ChartOptions};
