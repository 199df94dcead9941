// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A schedule is an ordered list of labeled intervals plus the scalars derived from it once
//! (overall start/end and the widest label). Label grouping keeps first-seen order.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod schedule;

pub use schedule::{Interval, LabelGroup, LabelGroups, Schedule, ScheduleError, Timestamp};
