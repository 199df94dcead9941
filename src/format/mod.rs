// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Schedule source formats.

pub mod csv;

pub use csv::{
    load_schedule_csv, parse_schedule_csv, parse_timestamp, LoadScheduleError, ScheduleField,
    ScheduleParseError,
};
